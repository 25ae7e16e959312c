use slotmap::{SlotMap, new_key_type};

use super::queue::ReadyQueue;

pub type Ticks = u64;
pub type Pid = u32;

new_key_type! {
    pub struct ProcessKey;
}

/// Longest process name the loader accepts, in bytes.
pub const MAX_NAME_LEN: usize = 19;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessRecord {
    pub id: Pid,
    pub name: String,
    pub burst: Ticks,
    pub arrival: Ticks,
    pub remaining: Ticks,
    pub completion: Option<Ticks>,
}

impl ProcessRecord {
    pub fn new(id: Pid, name: impl Into<String>, burst: Ticks, arrival: Ticks) -> Self {
        Self {
            id,
            name: name.into(),
            burst,
            arrival,
            remaining: burst,
            completion: None,
        }
    }

    pub fn has_arrived(&self, now: Ticks) -> bool {
        self.arrival <= now
    }
}

#[derive(Debug)]
pub struct SimCtx {
    pub now: Ticks,
    pub processes: SlotMap<ProcessKey, ProcessRecord>,
    pub queue: ReadyQueue,
    // Retirement order
    pub retired: Vec<ProcessRecord>,
}

impl SimCtx {
    pub fn new() -> Self {
        Self {
            now: 0,
            processes: SlotMap::with_key(),
            queue: ReadyQueue::new(),
            retired: Vec::new(),
        }
    }

    /// Allocates `record` in the arena and appends it to the ready queue.
    pub fn admit(&mut self, record: ProcessRecord) -> ProcessKey {
        let key = self.processes.insert(record);
        self.queue.push_back(key);
        key
    }

    pub fn advance_time(&mut self, delta: Ticks) {
        self.now = self.now.saturating_add(delta);
    }

    pub fn process(&self, key: ProcessKey) -> &ProcessRecord {
        self.processes
            .get(key)
            .expect("Process key missing from process table")
    }

    pub fn process_mut(&mut self, key: ProcessKey) -> &mut ProcessRecord {
        self.processes
            .get_mut(key)
            .expect("Process key missing from process table")
    }

    pub fn head_has_arrived(&self) -> bool {
        match self.queue.front() {
            Some(key) => self.process(key).has_arrived(self.now),
            None => false,
        }
    }

    // Return the amount of work actually done
    pub fn execute(&mut self, key: ProcessKey, slice: Ticks) -> Ticks {
        let process = self.process_mut(key);
        let ran = slice.min(process.remaining);
        process.remaining -= ran;
        ran
    }

    pub fn is_finished(&self, key: ProcessKey) -> bool {
        self.process(key).remaining == 0
    }

    /// Stamps completion and drops the process from the arena.
    pub fn retire(&mut self, key: ProcessKey) -> &ProcessRecord {
        debug_assert!(
            !self.queue.contains(key),
            "Retiring process {key:?} that is still enqueued"
        );
        let mut record = self
            .processes
            .remove(key)
            .expect("Retiring unknown process");
        debug_assert_eq!(record.remaining, 0, "Process {} retired early", record.name);
        record.completion = Some(self.now);
        self.retired.push(record);
        &self.retired[self.retired.len() - 1]
    }

    /// Name and remaining time of every queued process, head to tail.
    pub fn queue_snapshot(&self) -> Vec<(String, Ticks)> {
        self.queue
            .iter()
            .map(|key| {
                let process = self.process(key);
                (process.name.clone(), process.remaining)
            })
            .collect()
    }
}

impl Default for SimCtx {
    fn default() -> Self {
        Self::new()
    }
}
