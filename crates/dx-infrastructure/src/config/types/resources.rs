//! Resource discovery configuration types

use dx_application::ports::registry::{DEFAULT_CAPABILITY_DIR, RegistrySettings};
use dx_application::use_cases::{AssemblySettings, DEFAULT_CORE_CONFIG, DEFAULT_DESCRIPTOR_FILE};
use dx_domain::constants::DEFAULT_LOAD_TYPE;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::DEFAULT_SEARCH_ROOT;

/// Where capability manifests, the core configuration and plugin
/// descriptors are looked up
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceConfig {
    /// Search roots, in priority order
    pub search_roots: Vec<PathBuf>,

    /// Directory, relative to each root, holding capability manifests
    pub capability_dir: String,

    /// Core configuration location, relative to each root
    pub core_config: String,

    /// File name of plugin descriptors
    pub descriptor_file: String,

    /// Load type recorded on matched descriptors
    pub load_type: String,
}

impl Default for ResourceConfig {
    fn default() -> Self {
        Self {
            search_roots: vec![PathBuf::from(DEFAULT_SEARCH_ROOT)],
            capability_dir: DEFAULT_CAPABILITY_DIR.to_string(),
            core_config: DEFAULT_CORE_CONFIG.to_string(),
            descriptor_file: DEFAULT_DESCRIPTOR_FILE.to_string(),
            load_type: DEFAULT_LOAD_TYPE.to_string(),
        }
    }
}

impl ResourceConfig {
    /// Settings for the capability registry
    pub fn to_registry_settings(&self) -> RegistrySettings {
        RegistrySettings::new(self.capability_dir.clone())
    }

    /// Settings for the config assembler
    pub fn to_assembly_settings(&self) -> AssemblySettings {
        AssemblySettings {
            core_config: self.core_config.clone(),
            descriptor_file: self.descriptor_file.clone(),
            load_type: self.load_type.clone(),
        }
    }
}
