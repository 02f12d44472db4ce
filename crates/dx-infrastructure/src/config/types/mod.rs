//! Configuration types module

pub mod app;
pub mod logging;
pub mod resources;

// Re-export main types
pub use app::*;
