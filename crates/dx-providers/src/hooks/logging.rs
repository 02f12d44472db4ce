//! Logging job hook
//!
//! Emits a summary of every finished job through `tracing`: `info` for clean
//! runs, `warn` when records failed.

use std::sync::Arc;

use dx_application::ports::registry::{
    IMPLEMENTATIONS, ImplementationEntry, JOB_HOOK_CAPABILITY, erase,
};
use dx_domain::constants::{JOB_CONTENT_READER_NAME, JOB_CONTENT_WRITER_NAME};
use dx_domain::ports::JobHook;
use dx_domain::value_objects::{Configuration, JobStatistics};
use tracing::{debug, info, warn};

/// Manifest name of [`LoggingJobHook`]
pub const LOGGING_JOB_HOOK: &str = "com.alibaba.datax.core.job.event.LoggingJobHook";

const UNKNOWN_PLUGIN: &str = "unknown";

/// Job hook that logs job statistics
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingJobHook;

impl LoggingJobHook {
    /// Create a new logging hook
    pub fn new() -> Self {
        Self
    }

    /// One-line human-readable summary of a finished job
    pub fn summarize(configuration: &Configuration, statistics: &JobStatistics) -> String {
        format!(
            "{} -> {}: {} records read, {} failed, {} ms, {} B/s, {} records/s",
            plugin_name(configuration, JOB_CONTENT_READER_NAME),
            plugin_name(configuration, JOB_CONTENT_WRITER_NAME),
            statistics.total_read_records,
            statistics.total_error_records,
            statistics.total_costs,
            statistics.byte_speed_per_second,
            statistics.record_speed_per_second,
        )
    }
}

fn plugin_name(configuration: &Configuration, path: &str) -> String {
    configuration
        .get_string_or(path, UNKNOWN_PLUGIN)
        .unwrap_or_else(|_| UNKNOWN_PLUGIN.to_string())
}

impl JobHook for LoggingJobHook {
    fn finished(&self, configuration: &Configuration, statistics: &JobStatistics) {
        let summary = Self::summarize(configuration, statistics);
        if statistics.has_errors() {
            warn!(
                error_records = statistics.total_error_records,
                "Job finished with errors: {summary}"
            );
        } else {
            info!("Job finished: {summary}");
        }

        if let Ok(raw) = serde_json::to_string(statistics) {
            debug!(statistics = %raw, "Job statistics");
        }
    }

    fn hook_name(&self) -> &str {
        "logging"
    }
}

#[linkme::distributed_slice(IMPLEMENTATIONS)]
static LOGGING_HOOK_ENTRY: ImplementationEntry = ImplementationEntry {
    name: LOGGING_JOB_HOOK,
    capability: JOB_HOOK_CAPABILITY,
    description: "Logs a summary of each finished job",
    factory: || Ok(erase::<dyn JobHook>(Arc::new(LoggingJobHook::new()))),
};
