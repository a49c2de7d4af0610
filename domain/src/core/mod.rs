//! Core domain concepts shared across all subdomains.
//!
//! - [`topic::Topic`]: closed set of conversation topic labels
//! - [`error::DomainError`]: domain-level (configuration) errors

pub mod error;
pub mod topic;
