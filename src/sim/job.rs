use std::str::FromStr;

use super::input::InputError;
use crate::core::state::{MAX_NAME_LEN, Pid, ProcessRecord, Ticks};

/// One input record, `name:id:burst:arrival`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub name: String,
    pub id: Pid,
    pub burst: Ticks,
    pub arrival: Ticks,
}

impl Job {
    pub fn new(name: impl Into<String>, id: Pid, burst: Ticks, arrival: Ticks) -> Self {
        Self {
            name: name.into(),
            id,
            burst,
            arrival,
        }
    }

    pub fn into_record(self) -> ProcessRecord {
        ProcessRecord::new(self.id, self.name, self.burst, self.arrival)
    }
}

fn number<T: FromStr>(field: &'static str, value: &str) -> Result<T, InputError> {
    value.parse().map_err(|_| InputError::InvalidNumber {
        field,
        value: value.to_owned(),
    })
}

impl FromStr for Job {
    type Err = InputError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        // Empty fields are skipped, the same way repeated separators are
        let mut fields = line
            .trim_end_matches(['\r', '\n'])
            .split(':')
            .filter(|field| !field.is_empty());
        let mut next = |field: &'static str| fields.next().ok_or(InputError::MissingField(field));

        let name = next("pname")?;
        if name.len() > MAX_NAME_LEN {
            return Err(InputError::NameTooLong(name.to_owned()));
        }
        let id = number("pid", next("pid")?)?;
        let burst = number("duration", next("duration")?)?;
        let arrival = number("arrival time", next("arrival time")?)?;

        if fields.next().is_some() {
            return Err(InputError::TrailingField(line.to_owned()));
        }

        Ok(Self::new(name, id, burst, arrival))
    }
}
