//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns that support the application and domain
//! layers.
//!
//! ## Module Categories
//!
//! ### Configuration & Bootstrap
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment settings: defaults, `datax.toml`, `DATAX__*` env vars |
//! | [`bootstrap`] | Composition root ([`DataxContext`]) |
//! | [`constants`] | Centralized infrastructure constants |
//!
//! ### Resources
//! | Module | Description |
//! |--------|-------------|
//! | [`resources`] | File system search roots |
//! | [`secrets`] | Secret decryptors |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;
pub mod resources;
pub mod secrets;

// Re-export commonly used types
pub use bootstrap::DataxContext;
pub use error_ext::ErrorContext;
