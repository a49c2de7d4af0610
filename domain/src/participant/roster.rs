//! Roster - the participants present in one meeting

use super::profile::ParticipantProfile;
use crate::core::error::DomainError;
use std::collections::BTreeSet;
use std::sync::Arc;

/// Participants active in a session.
///
/// Membership is what matters; the stored order is kept only so that a seeded
/// draw picks the same person on every run. Built through
/// [`ProfileCatalog::roster`](super::catalog::ProfileCatalog::roster), so every
/// member is known to be a valid profile.
#[derive(Debug, Clone)]
pub struct Roster {
    members: Vec<Arc<ParticipantProfile>>,
}

impl Roster {
    pub(crate) fn new(members: Vec<Arc<ParticipantProfile>>) -> Result<Self, DomainError> {
        let mut seen = BTreeSet::new();
        let members: Vec<_> = members
            .into_iter()
            .filter(|profile| seen.insert(profile.name().to_string()))
            .collect();

        if members.is_empty() {
            return Err(DomainError::EmptyRoster);
        }
        Ok(Self { members })
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Always false: a roster is never built empty
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.members.iter().any(|p| p.name() == name)
    }

    pub fn get(&self, name: &str) -> Option<&ParticipantProfile> {
        self.members
            .iter()
            .map(Arc::as_ref)
            .find(|p| p.name() == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ParticipantProfile> {
        self.members.iter().map(Arc::as_ref)
    }

    pub fn names(&self) -> Vec<String> {
        self.iter().map(|p| p.name().to_string()).collect()
    }

    /// Members whose names are not in `exclude`
    pub fn without(&self, exclude: &BTreeSet<String>) -> Vec<&ParticipantProfile> {
        self.iter().filter(|p| !exclude.contains(p.name())).collect()
    }

    /// Fail with the first name in `names` that is not on the roster
    pub fn ensure_members<'a>(
        &self,
        names: impl IntoIterator<Item = &'a String>,
    ) -> Result<(), DomainError> {
        match names.into_iter().find(|name| !self.contains(name)) {
            Some(unknown) => Err(DomainError::UnknownParticipant(unknown.clone())),
            None => Ok(()),
        }
    }
}
