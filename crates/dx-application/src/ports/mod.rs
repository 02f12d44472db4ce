//! Application ports
//!
//! - `registry`: capability declarations, implementation registration and
//!   the process-wide capability registry

pub mod registry;
