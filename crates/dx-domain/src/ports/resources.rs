//! Resource discovery port
//!
//! Abstracts the search roots that capability manifests, plugin descriptors
//! and the core configuration are discovered from.

use std::fmt;

use crate::error::Result;

/// Handle to one discovered resource
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Resource {
    location: String,
}

impl Resource {
    /// Create a resource handle from its origin locator
    pub fn new<S: Into<String>>(location: S) -> Self {
        Self {
            location: location.into(),
        }
    }

    /// Origin locator (a filesystem path or provider-specific URI)
    pub fn location(&self) -> &str {
        &self.location
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.location)
    }
}

/// Source of discoverable resources spread over several search roots
///
/// Enumeration order follows search-root order; within a root the order is
/// implementation-defined and callers must not rely on it.
pub trait ResourceProvider: Send + Sync {
    /// Resources at the exact `relative` path under every search root
    fn find_resources(&self, relative: &str) -> Result<Vec<Resource>>;

    /// Resources whose file name is `file_name`, anywhere under the roots
    fn find_named(&self, file_name: &str) -> Result<Vec<Resource>>;

    /// Read a resource as UTF-8 text
    fn read_to_string(&self, resource: &Resource) -> Result<String>;

    /// Short name for diagnostics
    fn provider_name(&self) -> &str;
}
