//! Runtime bootstrap
//!
//! Composition root: wires the filesystem resource provider, the capability
//! registry and the config assembler from one [`AppConfig`].
//!
//! ```text
//! AppConfig → FileSystemResourceProvider ─┬→ CapabilityRegistry (linkme catalog)
//!                                         └→ ConfigAssembler (+ secret decryptor)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! let context = DataxContext::build(ConfigLoader::new().load()?)?;
//! let job = context.assemble(&std::fs::read_to_string("job.json")?)?;
//! // ... run the job ...
//! context.job_finished(&job, &statistics)?;
//! ```

use std::sync::Arc;

use dx_application::ports::registry::{CapabilityRegistry, notify_job_finished};
use dx_application::use_cases::ConfigAssembler;
use dx_domain::error::{Error, Result};
use dx_domain::ports::{ResourceProvider, SecretDecryptor};
use dx_domain::value_objects::{Configuration, JobStatistics};
use tracing::info;

use crate::config::AppConfig;
use crate::resources::FileSystemResourceProvider;
use crate::secrets::IdentitySecretDecryptor;

// Links the built-in implementations into every binary using the context
use dx_providers as _;

/// Runtime context shared by everything that runs jobs
///
/// Dropping the context tears down every cached loader and instance.
pub struct DataxContext {
    /// Application configuration
    pub config: Arc<AppConfig>,

    registry: Arc<CapabilityRegistry>,
    assembler: ConfigAssembler,
}

impl DataxContext {
    /// Build a context with the identity secret decryptor
    pub fn build(config: AppConfig) -> Result<Self> {
        Self::build_with_decryptor(config, Arc::new(IdentitySecretDecryptor))
    }

    /// Build a context with a custom secret decryptor
    pub fn build_with_decryptor(
        config: AppConfig,
        decryptor: Arc<dyn SecretDecryptor>,
    ) -> Result<Self> {
        if config.resources.search_roots.is_empty() {
            return Err(Error::configuration(
                "At least one resource search root is required",
            ));
        }

        let resources: Arc<dyn ResourceProvider> = Arc::new(FileSystemResourceProvider::new(
            config.resources.search_roots.iter().cloned(),
        ));
        let registry = Arc::new(CapabilityRegistry::from_linked(
            Arc::clone(&resources),
            config.resources.to_registry_settings(),
        ));
        let assembler = ConfigAssembler::new(
            resources,
            decryptor,
            config.resources.to_assembly_settings(),
        );

        info!(
            roots = config.resources.search_roots.len(),
            capabilities = registry.capabilities().len(),
            "Runtime context initialized"
        );

        Ok(Self {
            config: Arc::new(config),
            registry,
            assembler,
        })
    }

    /// Capability registry
    pub fn registry(&self) -> Arc<CapabilityRegistry> {
        Arc::clone(&self.registry)
    }

    /// Config assembler
    pub fn assembler(&self) -> &ConfigAssembler {
        &self.assembler
    }

    /// Assemble the effective configuration of a job
    pub fn assemble(&self, job_content: &str) -> Result<Configuration> {
        self.assembler.assemble(job_content)
    }

    /// Run every discovered job hook; returns how many hooks ran
    pub fn job_finished(
        &self,
        configuration: &Configuration,
        statistics: &JobStatistics,
    ) -> Result<usize> {
        notify_job_finished(&self.registry, configuration, statistics)
    }
}

impl std::fmt::Debug for DataxContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataxContext")
            .field("config", &self.config)
            .field("registry", &self.registry)
            .finish()
    }
}
