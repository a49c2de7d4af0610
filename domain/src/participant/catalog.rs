//! Profile catalog - every participant a meeting may draw from

use super::profile::ParticipantProfile;
use super::roster::Roster;
use crate::core::error::DomainError;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Name-keyed set of validated participant profiles.
///
/// A catalog is loaded once at startup and shared read-only; rosters hold
/// cheap `Arc` handles into it.
#[derive(Debug, Clone, Default)]
pub struct ProfileCatalog {
    profiles: BTreeMap<String, Arc<ParticipantProfile>>,
}

impl ProfileCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog, validating every profile and every suppression target.
    pub fn from_profiles(
        profiles: impl IntoIterator<Item = ParticipantProfile>,
    ) -> Result<Self, DomainError> {
        let mut catalog = Self::new();
        for profile in profiles {
            catalog.insert(profile)?;
        }
        catalog.validate()?;
        Ok(catalog)
    }

    /// Add or replace a profile.
    ///
    /// Only the profile itself is validated here; call [`validate`](Self::validate)
    /// once all profiles are in to check cross references.
    pub fn insert(&mut self, profile: ParticipantProfile) -> Result<(), DomainError> {
        profile.validate()?;
        self.profiles
            .insert(profile.name().to_string(), Arc::new(profile));
        Ok(())
    }

    /// Check that every suppression rule targets a known participant.
    pub fn validate(&self) -> Result<(), DomainError> {
        for profile in self.profiles.values() {
            if let Some(rule) = profile.suppression()
                && !self.profiles.contains_key(&rule.target)
            {
                return Err(DomainError::UnknownSuppressionTarget {
                    name: profile.name().to_string(),
                    target: rule.target.clone(),
                });
            }
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> Result<&Arc<ParticipantProfile>, DomainError> {
        self.profiles
            .get(name)
            .ok_or_else(|| DomainError::UnknownParticipant(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.profiles.contains_key(name)
    }

    /// Participant names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ParticipantProfile> {
        self.profiles.values().map(Arc::as_ref)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Resolve a list of names into a roster.
    ///
    /// Fails on the first unknown name, or when no names are given.
    pub fn roster<S: AsRef<str>>(&self, names: &[S]) -> Result<Roster, DomainError> {
        let members = names
            .iter()
            .map(|name| self.get(name.as_ref()).cloned())
            .collect::<Result<Vec<_>, _>>()?;
        Roster::new(members)
    }

    /// Roster containing every participant in the catalog
    pub fn full_roster(&self) -> Result<Roster, DomainError> {
        Roster::new(self.profiles.values().cloned().collect())
    }
}
