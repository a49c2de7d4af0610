//! Per-meeting repetition memory for response generators

use std::collections::{BTreeMap, BTreeSet};

/// Lines each participant has already said in the current meeting.
///
/// Owned by one meeting run and lent to the response generator by `&mut`, so
/// a new meeting always starts with an empty memory.
#[derive(Debug, Clone, Default)]
pub struct ResponseMemory {
    used: BTreeMap<String, BTreeSet<String>>,
}

impl ResponseMemory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_used(&self, participant: &str, line: &str) -> bool {
        self.used
            .get(participant)
            .is_some_and(|lines| lines.contains(line))
    }

    pub fn remember(&mut self, participant: &str, line: impl Into<String>) {
        self.used
            .entry(participant.to_string())
            .or_default()
            .insert(line.into());
    }

    /// Drop everything remembered for `participant`
    pub fn forget(&mut self, participant: &str) {
        self.used.remove(participant);
    }

    pub fn used_count(&self, participant: &str) -> usize {
        self.used.get(participant).map_or(0, BTreeSet::len)
    }

    pub fn is_empty(&self) -> bool {
        self.used.values().all(BTreeSet::is_empty)
    }
}
