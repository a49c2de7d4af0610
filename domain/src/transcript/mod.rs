//! Meeting transcript - the append-only record of every turn.

pub mod analytics;
pub mod record;

use record::TurnRecord;
use serde::{Deserialize, Serialize};

/// Ordered sequence of [`TurnRecord`]s for one meeting.
///
/// Records can only be appended; nothing already written is ever changed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transcript {
    records: Vec<TurnRecord>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: TurnRecord) {
        self.records.push(record);
    }

    /// The last `count` records, oldest first
    pub fn recent(&self, count: usize) -> &[TurnRecord] {
        let start = self.records.len().saturating_sub(count);
        &self.records[start..]
    }

    pub fn records(&self) -> &[TurnRecord] {
        &self.records
    }

    pub fn last(&self) -> Option<&TurnRecord> {
        self.records.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TurnRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
