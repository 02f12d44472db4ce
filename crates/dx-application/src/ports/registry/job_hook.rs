//! Job Hook Capability
//!
//! Declares [`JobHook`] as a discoverable capability. Hook implementations
//! register into [`IMPLEMENTATIONS`](super::IMPLEMENTATIONS) and are listed in
//! `META-INF/datax/com.alibaba.datax.core.job.event.JobHook` manifests.

use dx_domain::error::Result;
use dx_domain::ports::JobHook;
use dx_domain::value_objects::{Configuration, JobStatistics};
use tracing::debug;

use super::capability::{CAPABILITIES, Capability, CapabilityEntry};
use super::capability_registry::CapabilityRegistry;

/// Identifier of the job completion hook capability
pub const JOB_HOOK_CAPABILITY: &str = "com.alibaba.datax.core.job.event.JobHook";

impl Capability for dyn JobHook {
    const IDENTIFIER: &'static str = JOB_HOOK_CAPABILITY;
}

#[linkme::distributed_slice(CAPABILITIES)]
static JOB_HOOK: CapabilityEntry = CapabilityEntry {
    identifier: JOB_HOOK_CAPABILITY,
    description: "Callbacks invoked once a job has finished",
};

/// Invoke every discovered job hook; returns how many hooks ran
pub fn notify_job_finished(
    registry: &CapabilityRegistry,
    configuration: &Configuration,
    statistics: &JobStatistics,
) -> Result<usize> {
    let hooks = registry.instances::<dyn JobHook>()?;
    for hook in hooks.iter() {
        debug!(hook = hook.hook_name(), "Invoking job hook");
        hook.finished(configuration, statistics);
    }
    Ok(hooks.len())
}
