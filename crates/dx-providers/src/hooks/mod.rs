//! Job Hook Implementations
//!
//! | Hook | Description |
//! |------|-------------|
//! | [`LoggingJobHook`] | Logs a one-line summary of every finished job |
//!
//! List a hook in `META-INF/datax/com.alibaba.datax.core.job.event.JobHook`
//! under any search root to enable it.

pub mod logging;

pub use logging::{LOGGING_JOB_HOOK, LoggingJobHook};
