//! Implementation Registry
//!
//! Implementations register a named no-argument factory for one capability.
//! Capability manifests list implementation names; the loader resolves each
//! name against an [`ImplementationCatalog`] built from [`IMPLEMENTATIONS`]
//! (link-time registration) and [`CAPABILITIES`], or assembled explicitly.

use std::any::Any;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use tracing::warn;

use super::capability::{CAPABILITIES, Capability, CapabilityEntry};

/// Type-erased instance produced by a factory; always an `Arc<C>` for the
/// capability `C` the entry is registered under
pub type ErasedInstance = Box<dyn Any + Send + Sync>;

/// No-argument constructor for one implementation
pub type ImplementationFactory = fn() -> Result<ErasedInstance, String>;

/// Registry entry for capability implementations
///
/// Each implementation registers itself with this entry using
/// `#[linkme::distributed_slice(IMPLEMENTATIONS)]`.
#[derive(Debug, Clone, Copy)]
pub struct ImplementationEntry {
    /// Unique implementation name, as listed in capability manifests
    pub name: &'static str,
    /// Identifier of the capability this implementation satisfies
    pub capability: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create the instance
    pub factory: ImplementationFactory,
}

// Auto-collection via linkme distributed slices - implementations submit entries at compile time
#[linkme::distributed_slice]
pub static IMPLEMENTATIONS: [ImplementationEntry] = [..];

/// Erase a capability instance so it can be returned from a factory
pub fn erase<C: Capability + ?Sized>(instance: Arc<C>) -> ErasedInstance {
    Box::new(instance)
}

/// Declared capabilities and registered implementations
#[derive(Debug, Clone, Default)]
pub struct ImplementationCatalog {
    capabilities: BTreeMap<&'static str, CapabilityEntry>,
    implementations: HashMap<&'static str, ImplementationEntry>,
}

impl ImplementationCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from everything registered at link time
    pub fn from_linked() -> Self {
        let catalog = CAPABILITIES
            .iter()
            .fold(Self::new(), |catalog, entry| catalog.declare(*entry));
        IMPLEMENTATIONS
            .iter()
            .fold(catalog, |catalog, entry| catalog.register(*entry))
    }

    /// Declare a capability
    pub fn declare(mut self, entry: CapabilityEntry) -> Self {
        self.capabilities.entry(entry.identifier).or_insert(entry);
        self
    }

    /// Register an implementation; the first registration of a name wins
    pub fn register(mut self, entry: ImplementationEntry) -> Self {
        if let Some(existing) = self.implementations.get(entry.name) {
            warn!(
                implementation = entry.name,
                kept = existing.capability,
                ignored = entry.capability,
                "Duplicate implementation name, keeping first registration"
            );
            return self;
        }
        self.implementations.insert(entry.name, entry);
        self
    }

    /// Whether `identifier` is a declared capability
    pub fn is_declared(&self, identifier: &str) -> bool {
        self.capabilities.contains_key(identifier)
    }

    /// Look up an implementation by name
    pub fn resolve(&self, name: &str) -> Option<&ImplementationEntry> {
        self.implementations.get(name)
    }

    /// Declared capabilities, ordered by identifier
    pub fn capabilities(&self) -> Vec<CapabilityEntry> {
        self.capabilities.values().copied().collect()
    }

    /// Implementations registered for `capability`, ordered by name
    pub fn implementations_of(&self, capability: &str) -> Vec<ImplementationEntry> {
        let mut entries: Vec<ImplementationEntry> = self
            .implementations
            .values()
            .filter(|e| e.capability == capability)
            .copied()
            .collect();
        entries.sort_by_key(|e| e.name);
        entries
    }
}
