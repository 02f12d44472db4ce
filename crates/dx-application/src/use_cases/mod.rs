//! Use cases

pub mod config_assembly;

pub use config_assembly::{
    AssemblySettings, ConfigAssembler, DEFAULT_CORE_CONFIG, DEFAULT_DESCRIPTOR_FILE, PluginRole,
};
