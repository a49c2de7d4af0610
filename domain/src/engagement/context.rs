//! Situational context the engagement model reads

use crate::participant::roster::Roster;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Who is currently in the room.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngagementContext {
    present: BTreeSet<String>,
}

impl EngagementContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Context where every roster member is present
    pub fn from_roster(roster: &Roster) -> Self {
        Self {
            present: roster.iter().map(|p| p.name().to_string()).collect(),
        }
    }

    pub fn with_present(mut self, name: impl Into<String>) -> Self {
        self.present.insert(name.into());
        self
    }

    pub fn without(mut self, name: &str) -> Self {
        self.present.remove(name);
        self
    }

    pub fn is_present(&self, name: &str) -> bool {
        self.present.contains(name)
    }

    pub fn present(&self) -> impl Iterator<Item = &str> {
        self.present.iter().map(String::as_str)
    }
}
