//! Capability declarations
//!
//! A capability is a contract whose implementations are discovered at
//! runtime instead of being linked statically. The Rust side of the contract
//! is a trait object type implementing [`Capability`]; the runtime side is an
//! entry in [`CAPABILITIES`]. Only declared capabilities can be loaded.

/// Marker for trait-object types that can be discovered through the registry
///
/// ```ignore
/// impl Capability for dyn JobHook {
///     const IDENTIFIER: &'static str = "com.alibaba.datax.core.job.event.JobHook";
/// }
/// ```
pub trait Capability: Send + Sync + 'static {
    /// Fully-qualified identifier; also the capability manifest file name
    const IDENTIFIER: &'static str;
}

/// Declaration of an extensible capability
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapabilityEntry {
    /// Fully-qualified capability identifier
    pub identifier: &'static str,
    /// Human-readable description
    pub description: &'static str,
}

// Auto-collection via linkme distributed slices - capabilities are declared at compile time
#[linkme::distributed_slice]
pub static CAPABILITIES: [CapabilityEntry] = [..];

/// List all declared capabilities as (identifier, description) tuples
pub fn list_capabilities() -> Vec<(&'static str, &'static str)> {
    CAPABILITIES
        .iter()
        .map(|e| (e.identifier, e.description))
        .collect()
}
