//! Type-safe wrappers and enums for draft board data.

pub mod ids;
pub mod position;
