use std::cmp::Ordering;
use std::collections::VecDeque;

use super::state::ProcessKey;

/// Admitted, unfinished processes. Ordering is entirely up to the caller;
/// the queue never sorts on its own.
#[derive(Debug, Default, Clone)]
pub struct ReadyQueue {
    keys: VecDeque<ProcessKey>,
}

impl ReadyQueue {
    pub fn new() -> Self {
        Self {
            keys: VecDeque::new(),
        }
    }

    pub fn push_back(&mut self, key: ProcessKey) {
        self.keys.push_back(key);
    }

    pub fn push_front(&mut self, key: ProcessKey) {
        self.keys.push_front(key);
    }

    pub fn pop_front(&mut self) -> Option<ProcessKey> {
        self.keys.pop_front()
    }

    /// Removes the element at `index`, keeping the order of the rest.
    pub fn remove(&mut self, index: usize) -> Option<ProcessKey> {
        self.keys.remove(index)
    }

    pub fn front(&self) -> Option<ProcessKey> {
        self.keys.front().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn contains(&self, key: ProcessKey) -> bool {
        self.keys.contains(&key)
    }

    pub fn iter(&self) -> impl Iterator<Item = ProcessKey> + '_ {
        self.keys.iter().copied()
    }

    /// Stable reorder: keys that compare equal keep their relative order.
    pub fn reorder_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(ProcessKey, ProcessKey) -> Ordering,
    {
        self.keys
            .make_contiguous()
            .sort_by(|a, b| compare(*a, *b));
    }
}
