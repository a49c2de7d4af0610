//! Meeting-scoped state and termination.

pub mod end;
pub mod memory;
