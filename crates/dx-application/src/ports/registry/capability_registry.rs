//! Process-wide capability registry
//!
//! Owns one [`PluginLoader`] per capability. The registry is an explicit
//! object: build it once at startup, share it by reference (or `Arc`) with
//! the components that need capability lookup, and drop it to tear down all
//! cached loaders and instances.

use std::any::Any;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use dx_domain::error::{Error, Result};
use dx_domain::ports::ResourceProvider;
use once_cell::sync::OnceCell;
use tracing::debug;

use super::capability::{Capability, CapabilityEntry};
use super::implementation::ImplementationCatalog;
use super::loader::PluginLoader;

/// Default directory, relative to each search root, holding capability manifests
pub const DEFAULT_CAPABILITY_DIR: &str = "META-INF/datax";

type ErasedLoader = Arc<dyn Any + Send + Sync>;

/// Settings for capability discovery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrySettings {
    /// Directory, relative to each search root, holding capability manifests
    pub capability_dir: String,
}

impl RegistrySettings {
    /// Create settings with the given manifest directory
    pub fn new(capability_dir: impl Into<String>) -> Self {
        Self {
            capability_dir: capability_dir.into(),
        }
    }
}

impl Default for RegistrySettings {
    fn default() -> Self {
        Self::new(DEFAULT_CAPABILITY_DIR)
    }
}

/// Registry of capability loaders
pub struct CapabilityRegistry {
    catalog: ImplementationCatalog,
    resources: Arc<dyn ResourceProvider>,
    settings: RegistrySettings,
    loaders: Mutex<HashMap<&'static str, Arc<OnceCell<ErasedLoader>>>>,
}

impl CapabilityRegistry {
    /// Create a registry over an explicit catalog
    pub fn new(
        catalog: ImplementationCatalog,
        resources: Arc<dyn ResourceProvider>,
        settings: RegistrySettings,
    ) -> Self {
        Self {
            catalog,
            resources,
            settings,
            loaders: Mutex::new(HashMap::new()),
        }
    }

    /// Create a registry over everything registered at link time
    pub fn from_linked(resources: Arc<dyn ResourceProvider>, settings: RegistrySettings) -> Self {
        Self::new(ImplementationCatalog::from_linked(), resources, settings)
    }

    /// The loader for capability `C`.
    ///
    /// The first call discovers `C`'s implementations. Concurrent first calls
    /// wait on the same per-capability cell, so discovery runs once and one
    /// loader is published. A failed discovery publishes nothing; a later
    /// call tries again.
    pub fn for_capability<C: Capability + ?Sized>(&self) -> Result<Arc<PluginLoader<C>>> {
        if !self.catalog.is_declared(C::IDENTIFIER) {
            return Err(Error::configuration(format!(
                "Plugin type ({}) is not a declared capability; add it to the CAPABILITIES registry",
                C::IDENTIFIER
            )));
        }

        let cell = {
            let mut loaders = self.loaders.lock().unwrap_or_else(PoisonError::into_inner);
            Arc::clone(loaders.entry(C::IDENTIFIER).or_default())
        };

        let loader = cell.get_or_try_init(|| {
            debug!(capability = C::IDENTIFIER, "Building capability loader");
            PluginLoader::<C>::discover(
                &self.catalog,
                self.resources.as_ref(),
                &self.settings.capability_dir,
            )
            .map(|loader| Arc::new(loader) as ErasedLoader)
        })?;

        Arc::clone(loader)
            .downcast::<PluginLoader<C>>()
            .map_err(|_| {
                Error::internal(format!(
                    "Capability identifier {} is shared by more than one capability type",
                    C::IDENTIFIER
                ))
            })
    }

    /// Shortcut for `for_capability::<C>()?.get_or_create_instances()`
    pub fn instances<C: Capability + ?Sized>(&self) -> Result<Arc<[Arc<C>]>> {
        self.for_capability::<C>()?.get_or_create_instances()
    }

    /// Declared capabilities
    pub fn capabilities(&self) -> Vec<CapabilityEntry> {
        self.catalog.capabilities()
    }

    /// The catalog implementations are resolved against
    pub fn catalog(&self) -> &ImplementationCatalog {
        &self.catalog
    }

    /// Settings used for discovery
    pub fn settings(&self) -> &RegistrySettings {
        &self.settings
    }
}

impl std::fmt::Debug for CapabilityRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CapabilityRegistry")
            .field("resources", &self.resources.provider_name())
            .field("settings", &self.settings)
            .field("capabilities", &self.catalog.capabilities().len())
            .finish()
    }
}
