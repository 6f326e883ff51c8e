//! Row access over catalog tables.

pub mod maintenance;
pub mod skip_ops;
