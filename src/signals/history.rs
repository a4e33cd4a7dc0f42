//! Bounded record of signal class changes.

use std::collections::{HashMap, VecDeque};

use crate::models::signal::{SignalClass, SignalRecord};

pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

#[derive(Debug, Clone)]
pub struct SignalHistory {
    capacity: usize,
    entries: VecDeque<SignalRecord>,
}

impl SignalHistory {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            entries: VecDeque::with_capacity(capacity),
        }
    }

    /// Append `record` when its class differs from the newest entry.
    ///
    /// Returns `true` when the record was stored. The oldest entry is evicted
    /// once the capacity is exceeded.
    pub fn record(&mut self, record: SignalRecord) -> bool {
        if self
            .latest()
            .is_some_and(|last| last.signal_class == record.signal_class)
        {
            return false;
        }
        self.entries.push_back(record);
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
        true
    }

    pub fn latest(&self) -> Option<&SignalRecord> {
        self.entries.back()
    }

    /// Up to `limit` entries, newest first.
    pub fn recent(&self, limit: usize) -> Vec<SignalRecord> {
        self.entries.iter().rev().take(limit).cloned().collect()
    }

    /// Count per class, including zero counts.
    pub fn distribution(&self) -> HashMap<SignalClass, usize> {
        let mut counts: HashMap<SignalClass, usize> =
            SignalClass::all().into_iter().map(|class| (class, 0)).collect();
        for entry in &self.entries {
            *counts.entry(entry.signal_class).or_insert(0) += 1;
        }
        counts
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for SignalHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}
