//! Secret decryption port

use crate::error::Result;
use crate::value_objects::Configuration;

/// Transform that replaces encrypted values in a parsed job definition
///
/// Applied once, right after the job text is parsed and before any merge.
pub trait SecretDecryptor: Send + Sync {
    /// Return the configuration with every secret value decrypted
    fn decrypt(&self, configuration: Configuration) -> Result<Configuration>;
}
