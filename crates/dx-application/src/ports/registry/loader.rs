//! Per-capability plugin loader
//!
//! Discovery reads every capability manifest
//! (`<capability_dir>/<capability identifier>`) found across the search
//! roots. Each manifest line, with `#` comments stripped and whitespace
//! trimmed, names one implementation. Discovery happens once when the loader
//! is built; instances are created lazily on the first call to
//! [`PluginLoader::get_or_create_instances`] and cached for the lifetime of
//! the loader.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, PoisonError};

use dx_domain::constants::MANIFEST_COMMENT;
use dx_domain::error::{Error, Result};
use dx_domain::ports::ResourceProvider;
use once_cell::sync::OnceCell;
use tracing::{debug, error, info, warn};

use super::capability::Capability;
use super::implementation::{ImplementationCatalog, ImplementationEntry};

/// Implementation names listed in a manifest, in order
pub(crate) fn parse_manifest(content: &str) -> Vec<&str> {
    content
        .lines()
        .map(|line| match line.find(MANIFEST_COMMENT) {
            Some(ci) => &line[..ci],
            None => line,
        })
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Manifest location for a capability under `capability_dir`
pub fn manifest_path(capability_dir: &str, identifier: &str) -> String {
    let dir = capability_dir.trim_end_matches('/');
    if dir.is_empty() {
        identifier.to_string()
    } else {
        format!("{dir}/{identifier}")
    }
}

/// Discovered implementations of one capability and their cached instances
pub struct PluginLoader<C: Capability + ?Sized> {
    implementations: Vec<ImplementationEntry>,
    instances: OnceCell<Arc<[Arc<C>]>>,
    build_lock: Mutex<()>,
}

impl<C: Capability + ?Sized> PluginLoader<C> {
    /// Scan every manifest for `C` and validate the implementations it lists.
    ///
    /// Manifests that cannot be enumerated or read are logged and skipped. A
    /// line naming an unregistered implementation, or one registered for a
    /// different capability, fails the whole discovery.
    pub fn discover(
        catalog: &ImplementationCatalog,
        resources: &dyn ResourceProvider,
        capability_dir: &str,
    ) -> Result<Self> {
        let manifest = manifest_path(capability_dir, C::IDENTIFIER);
        let found = match resources.find_resources(&manifest) {
            Ok(found) => found,
            Err(e) => {
                error!(
                    capability = C::IDENTIFIER,
                    manifest = %manifest,
                    provider = resources.provider_name(),
                    error = %e,
                    "Failed to enumerate capability manifests"
                );
                Vec::new()
            }
        };

        let mut seen = HashSet::new();
        let mut implementations = Vec::new();
        for resource in &found {
            let content = match resources.read_to_string(resource) {
                Ok(content) => content,
                Err(e) => {
                    warn!(
                        capability = C::IDENTIFIER,
                        resource = %resource,
                        error = %e,
                        "Skipping unreadable capability manifest"
                    );
                    continue;
                }
            };

            for name in parse_manifest(&content) {
                let entry = catalog.resolve(name).ok_or_else(|| {
                    Error::unresolved_implementation(C::IDENTIFIER, name, resource.location())
                })?;
                if entry.capability != C::IDENTIFIER {
                    return Err(Error::contract_violation(
                        C::IDENTIFIER,
                        entry.name,
                        resource.location(),
                    ));
                }
                if seen.insert(entry.name) {
                    debug!(
                        capability = C::IDENTIFIER,
                        implementation = entry.name,
                        resource = %resource,
                        "Discovered implementation"
                    );
                    implementations.push(*entry);
                }
            }
        }

        info!(
            capability = C::IDENTIFIER,
            manifests = found.len(),
            implementations = implementations.len(),
            "Capability discovery finished"
        );

        Ok(Self {
            implementations,
            instances: OnceCell::new(),
            build_lock: Mutex::new(()),
        })
    }

    /// Identifier of the capability this loader serves
    pub fn capability(&self) -> &'static str {
        C::IDENTIFIER
    }

    /// Names of the discovered implementations, in discovery order
    pub fn implementations(&self) -> Vec<&'static str> {
        self.implementations.iter().map(|e| e.name).collect()
    }

    /// Whether instances have been built
    pub fn is_instantiated(&self) -> bool {
        self.instances.get().is_some()
    }

    /// One shared instance per discovered implementation.
    ///
    /// The first caller builds the list under the loader's lock; concurrent
    /// callers wait for that build and every caller receives the same `Arc`.
    /// Any factory failure aborts the build and nothing is cached.
    pub fn get_or_create_instances(&self) -> Result<Arc<[Arc<C>]>> {
        if let Some(instances) = self.instances.get() {
            return Ok(Arc::clone(instances));
        }

        let _guard = self
            .build_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(instances) = self.instances.get() {
            return Ok(Arc::clone(instances));
        }

        let mut built = Vec::with_capacity(self.implementations.len());
        for entry in &self.implementations {
            built.push(instantiate::<C>(entry)?);
        }
        let instances: Arc<[Arc<C>]> = Arc::from(built);

        // Only the lock holder sets the cell, so this never fails.
        let _ = self.instances.set(Arc::clone(&instances));
        info!(
            capability = C::IDENTIFIER,
            count = instances.len(),
            "Capability instances created"
        );
        Ok(instances)
    }
}

fn instantiate<C: Capability + ?Sized>(entry: &ImplementationEntry) -> Result<Arc<C>> {
    let erased = (entry.factory)()
        .map_err(|message| Error::instantiation(C::IDENTIFIER, entry.name, message))?;
    erased
        .downcast::<Arc<C>>()
        .map(|boxed| *boxed)
        .map_err(|_| Error::contract_violation(C::IDENTIFIER, entry.name, "its factory"))
}
