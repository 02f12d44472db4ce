//! Secret decryption
//!
//! Job definitions may carry encrypted values. The runtime ships without a
//! key store, so the default decryptor passes configurations through.

use dx_domain::error::Result;
use dx_domain::ports::SecretDecryptor;
use dx_domain::value_objects::Configuration;
use tracing::trace;

/// Decryptor that returns its input unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentitySecretDecryptor;

impl SecretDecryptor for IdentitySecretDecryptor {
    fn decrypt(&self, configuration: Configuration) -> Result<Configuration> {
        trace!("No secret decryption configured");
        Ok(configuration)
    }
}
