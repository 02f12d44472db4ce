//! Job lifecycle hook port

use crate::value_objects::{Configuration, JobStatistics};

/// Callback invoked once a job has finished
///
/// Implementations are discovered through the capability registry and
/// instantiated once per registry, so they must be shareable across threads.
pub trait JobHook: Send + Sync {
    /// Called with the assembled job configuration and its final statistics
    fn finished(&self, configuration: &Configuration, statistics: &JobStatistics);

    /// Short name for diagnostics
    fn hook_name(&self) -> &str;
}
