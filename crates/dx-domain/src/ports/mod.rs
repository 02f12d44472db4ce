//! Domain Port Interfaces
//!
//! Boundary contracts implemented by outer layers:
//!
//! - **hooks** - capabilities discovered at runtime (job completion hooks)
//! - **resources** - search roots for manifests, descriptors and core config
//! - **secrets** - opaque decryption applied to parsed job definitions

/// Job lifecycle hooks
pub mod hooks;
/// Resource discovery
pub mod resources;
/// Secret decryption
pub mod secrets;

pub use hooks::JobHook;
pub use resources::{Resource, ResourceProvider};
pub use secrets::SecretDecryptor;
