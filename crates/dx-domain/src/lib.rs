//! # Domain Layer
//!
//! Core types shared by capability discovery and job configuration assembly.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | Error taxonomy and `Result` alias |
//! | [`value_objects`] | Configuration tree, job statistics |
//! | [`ports`] | Contracts implemented by outer layers |
//! | [`constants`] | Well-known configuration paths |
//!
//! This crate depends only on serialization and error-derive libraries.

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use value_objects::{Configuration, JobStatistics};
