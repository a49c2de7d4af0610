//! Participants - static profiles, the catalog that holds them, and rosters.

pub mod catalog;
pub mod profile;
pub mod roster;
