//! Response generator adapters

mod scripted;

pub use scripted::{END_MARKER, ScriptedResponseGenerator};
