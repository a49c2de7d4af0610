//! Turn orchestration domain
//!
//! Pure building blocks of the turn loop: scoring the roster, drawing the
//! next speaker, and the back-to-back rule. The loop itself lives in the
//! application layer's `RunMeetingUseCase`.

pub mod distribution;
pub mod exclusion;
pub mod selection;
