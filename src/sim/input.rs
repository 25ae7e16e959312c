use thiserror::Error;

use super::job::Job;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Expecting process count")]
    MissingCount,

    #[error("Invalid process count: {0}")]
    InvalidCount(String),

    #[error("Expecting scheduling policy")]
    MissingPolicy,

    #[error("Expecting {expected} process records, found {found}")]
    MissingRecord { expected: usize, found: usize },

    #[error("Expecting token {0}")]
    MissingField(&'static str),

    #[error("Unexpected trailing field in record: {0}")]
    TrailingField(String),

    #[error("Invalid {field}: {value}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("Process name longer than 19 bytes: {0}")]
    NameTooLong(String),
}

/// Parsed standard input: policy name is kept raw so records are
/// validated before the policy is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    pub policy: String,
    pub jobs: Vec<Job>,
}

/// Reads `<count> <policy>` followed by `count` records. Tokens are
/// whitespace separated; anything after the last record is ignored.
pub fn parse_input(text: &str) -> Result<Input, InputError> {
    let mut tokens = text.split_whitespace();

    let count = tokens.next().ok_or(InputError::MissingCount)?;
    let count: usize = count
        .parse()
        .map_err(|_| InputError::InvalidCount(count.to_owned()))?;
    let policy = tokens.next().ok_or(InputError::MissingPolicy)?.to_owned();

    let mut jobs: Vec<Job> = Vec::with_capacity(count.min(1024));
    for found in 0..count {
        let record = tokens.next().ok_or(InputError::MissingRecord {
            expected: count,
            found,
        })?;
        jobs.push(record.parse::<Job>()?);
    }

    Ok(Input { policy, jobs })
}
