//! Use cases (application services)

pub mod run_meeting;
