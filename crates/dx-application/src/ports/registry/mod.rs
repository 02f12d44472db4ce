//! Capability Registry System
//!
//! Discovers, validates and instantiates implementations of extensible
//! capabilities. Implementations are registered with the `linkme` crate at
//! compile time; capability manifests found on the search roots select which
//! of them a deployment actually loads.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                   Capability Discovery Flow                     │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  1. Capability declares: impl Capability for dyn JobHook        │
//! │                          + entry in CAPABILITIES                │
//! │                              ↓                                  │
//! │  2. Provider registers:  #[linkme::distributed_slice(           │
//! │                              IMPLEMENTATIONS)]                  │
//! │                              ↓                                  │
//! │  3. Manifest selects:    META-INF/datax/<capability identifier> │
//! │                          one implementation name per line       │
//! │                              ↓                                  │
//! │  4. Registry resolves:   for_capability::<dyn JobHook>()        │
//! │                          .get_or_create_instances()             │
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ### Registering an implementation (in dx-providers)
//!
//! ```ignore
//! use dx_application::ports::registry::{erase, ImplementationEntry, IMPLEMENTATIONS};
//!
//! #[linkme::distributed_slice(IMPLEMENTATIONS)]
//! static LOGGING_HOOK: ImplementationEntry = ImplementationEntry {
//!     name: "com.alibaba.datax.core.job.event.LoggingJobHook",
//!     capability: JOB_HOOK_CAPABILITY,
//!     description: "Logs job statistics",
//!     factory: || Ok(erase::<dyn JobHook>(Arc::new(LoggingJobHook::new()))),
//! };
//! ```
//!
//! ### Resolving instances
//!
//! ```ignore
//! let registry = CapabilityRegistry::from_linked(resources, RegistrySettings::default());
//! let hooks = registry.for_capability::<dyn JobHook>()?.get_or_create_instances()?;
//! ```

pub mod capability;
pub mod capability_registry;
pub mod implementation;
pub mod job_hook;
pub mod loader;

pub use capability::{CAPABILITIES, Capability, CapabilityEntry, list_capabilities};
pub use capability_registry::{CapabilityRegistry, DEFAULT_CAPABILITY_DIR, RegistrySettings};
pub use implementation::{
    ErasedInstance, IMPLEMENTATIONS, ImplementationCatalog, ImplementationEntry,
    ImplementationFactory, erase,
};
pub use job_hook::{JOB_HOOK_CAPABILITY, notify_job_finished};
pub use loader::{PluginLoader, manifest_path};
