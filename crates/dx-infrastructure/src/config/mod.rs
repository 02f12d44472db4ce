//! Runtime settings
//!
//! [`ConfigLoader`] layers defaults, an optional `datax.toml` and `DATAX__`
//! environment variables into an [`AppConfig`].

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::{AppConfig, LoggingConfig, ResourceConfig};
