//! Application Layer - DataX SPI
//!
//! Orchestrates capability discovery and job configuration assembly on top
//! of the domain types and ports.
//!
//! ## Ports
//!
//! - `ports::registry::*`: capability declarations, `linkme` implementation
//!   slices, per-capability loaders and the process-wide registry
//!
//! ## Use Cases
//!
//! - `use_cases::config_assembly`: job text + core defaults + plugin
//!   descriptors → effective job configuration
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `dx-domain`: configuration tree, errors and port traits
//! - `linkme` / `once_cell` for registration and initialize-once cells

pub mod ports;
pub mod use_cases;

pub use ports::registry::{CapabilityRegistry, PluginLoader, RegistrySettings};
pub use use_cases::{AssemblySettings, ConfigAssembler, PluginRole};
