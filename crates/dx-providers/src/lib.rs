//! # DataX SPI - Built-in Implementations
//!
//! Capability implementations shipped with the runtime. Each one registers
//! itself into [`IMPLEMENTATIONS`](dx_application::ports::registry::IMPLEMENTATIONS)
//! at link time and becomes discoverable as soon as a capability manifest
//! lists its name.
//!
//! | Capability | Implementations |
//! |------------|-----------------|
//! | `JobHook` | [`LoggingJobHook`](hooks::LoggingJobHook) |
//!
//! Binaries must link this crate for the registrations to be present:
//!
//! ```ignore
//! extern crate dx_providers;
//! ```

pub use dx_domain::error::{Error, Result};
pub use dx_domain::ports::JobHook;

/// Job completion hooks
pub mod hooks;

pub use hooks::{LOGGING_JOB_HOOK, LoggingJobHook};
