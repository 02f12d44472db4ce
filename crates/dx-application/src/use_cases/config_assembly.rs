//! Job configuration assembly
//!
//! Produces the effective configuration of one job:
//!
//! 1. parse the job definition and decrypt its secrets
//! 2. merge the core configuration beneath it
//! 3. find the descriptor of the requested reader and writer among every
//!    discoverable descriptor resource and nest each one under
//!    `plugin.<role>.<name>`, tagged with its origin and load type
//!
//! The pipeline is one pass: the first failing step aborts the run and no
//! partial result is returned.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use dx_domain::constants::{
    DEFAULT_LOAD_TYPE, DESCRIPTOR_LOAD_TYPE, DESCRIPTOR_NAME, DESCRIPTOR_PATH,
    JOB_CONTENT_READER_NAME, JOB_CONTENT_WRITER_NAME, PLUGIN_ROOT,
};
use dx_domain::error::{Error, Result};
use dx_domain::ports::{Resource, ResourceProvider, SecretDecryptor};
use dx_domain::value_objects::Configuration;
use serde_json::{Map, Value};
use tracing::{debug, info};

/// Default location, relative to each search root, of the core configuration
pub const DEFAULT_CORE_CONFIG: &str = "conf/core.json";

/// Default file name of plugin descriptors
pub const DEFAULT_DESCRIPTOR_FILE: &str = "plugin.json";

/// Role a requested plugin plays in a job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluginRole {
    /// Source of records
    Reader,
    /// Sink of records
    Writer,
}

impl PluginRole {
    /// Path segment used under `plugin.`
    pub fn as_str(&self) -> &'static str {
        match self {
            PluginRole::Reader => "reader",
            PluginRole::Writer => "writer",
        }
    }
}

impl fmt::Display for PluginRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Settings for configuration assembly
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssemblySettings {
    /// Core configuration location, relative to each search root
    pub core_config: String,
    /// File name of plugin descriptors
    pub descriptor_file: String,
    /// Load type recorded on every matched descriptor
    pub load_type: String,
}

impl Default for AssemblySettings {
    fn default() -> Self {
        Self {
            core_config: DEFAULT_CORE_CONFIG.to_string(),
            descriptor_file: DEFAULT_DESCRIPTOR_FILE.to_string(),
            load_type: DEFAULT_LOAD_TYPE.to_string(),
        }
    }
}

/// Assembles job configurations from job text, core defaults and plugin descriptors
pub struct ConfigAssembler {
    resources: Arc<dyn ResourceProvider>,
    decryptor: Arc<dyn SecretDecryptor>,
    settings: AssemblySettings,
}

impl ConfigAssembler {
    /// Create an assembler
    pub fn new(
        resources: Arc<dyn ResourceProvider>,
        decryptor: Arc<dyn SecretDecryptor>,
        settings: AssemblySettings,
    ) -> Self {
        Self {
            resources,
            decryptor,
            settings,
        }
    }

    /// Settings used by this assembler
    pub fn settings(&self) -> &AssemblySettings {
        &self.settings
    }

    /// Assemble the effective configuration for `job_content`
    pub fn assemble(&self, job_content: &str) -> Result<Configuration> {
        let parsed = Configuration::from_json(job_content)?;
        let mut configuration = self.decryptor.decrypt(parsed)?;

        let core = self.load_core_config()?;
        configuration.merge(&core, false);

        let mut outstanding = requested_plugins(&configuration)?;
        info!(plugins = ?outstanding, "Assembling job configuration");

        self.merge_plugin_descriptors(&mut configuration, &mut outstanding)?;
        if !outstanding.is_empty() {
            return Err(unresolved_plugins(outstanding.into_keys().collect()));
        }
        Ok(configuration)
    }

    fn load_core_config(&self) -> Result<Configuration> {
        let core_path = &self.settings.core_config;
        let resource = self
            .resources
            .find_resources(core_path)?
            .into_iter()
            .next()
            .ok_or_else(|| {
                Error::missing_resource(
                    core_path.as_str(),
                    format!(
                        "Failed to load the core configuration. Please check whether {core_path} exists under a search root"
                    ),
                )
            })?;

        let text = self.resources.read_to_string(&resource).map_err(|e| {
            Error::missing_resource(resource.location(), format!("unreadable: {e}"))
        })?;
        debug!(resource = %resource, "Loaded core configuration");
        parse_resource(&text, &resource)
    }

    fn merge_plugin_descriptors(
        &self,
        configuration: &mut Configuration,
        outstanding: &mut HashMap<String, PluginRole>,
    ) -> Result<()> {
        let descriptors = self.resources.find_named(&self.settings.descriptor_file)?;
        for resource in descriptors {
            if outstanding.is_empty() {
                break;
            }

            let text = self.resources.read_to_string(&resource)?;
            let mut descriptor = parse_resource(&text, &resource)?;
            let name = descriptor
                .get_string_or(DESCRIPTOR_NAME, "")
                .unwrap_or_else(|e| {
                    debug!(resource = %resource, error = %e, "Descriptor name is not a scalar");
                    String::new()
                });
            let Some(role) = outstanding.remove(&name) else {
                debug!(resource = %resource, plugin = name.as_str(), "Descriptor not requested");
                continue;
            };

            descriptor.set(DESCRIPTOR_PATH, Value::String(resource.location().to_string()))?;
            descriptor.set(
                DESCRIPTOR_LOAD_TYPE,
                Value::String(self.settings.load_type.clone()),
            )?;
            configuration.merge(&nest_descriptor(role, &name, descriptor)?, false);
            info!(
                plugin = name.as_str(),
                role = role.as_str(),
                resource = %resource,
                "Matched plugin descriptor"
            );
        }
        Ok(())
    }
}

fn requested_plugins(configuration: &Configuration) -> Result<HashMap<String, PluginRole>> {
    let reader = configuration.get_string(JOB_CONTENT_READER_NAME)?;
    let writer = configuration.get_string(JOB_CONTENT_WRITER_NAME)?;
    if reader == writer {
        return Err(Error::configuration(format!(
            "Reader and writer cannot both be '{reader}'"
        )));
    }

    let mut outstanding = HashMap::with_capacity(2);
    outstanding.insert(reader, PluginRole::Reader);
    outstanding.insert(writer, PluginRole::Writer);
    Ok(outstanding)
}

fn parse_resource(text: &str, resource: &Resource) -> Result<Configuration> {
    Configuration::from_json(text).map_err(|e| match e {
        Error::Parse { message, source } => Error::Parse {
            message: format!("{resource}: {message}"),
            source,
        },
        other => other,
    })
}

/// `{"plugin": {<role>: {<name>: descriptor}}}`, built without path parsing so
/// plugin names are taken verbatim
fn nest_descriptor(role: PluginRole, name: &str, descriptor: Configuration) -> Result<Configuration> {
    let mut by_name = Map::new();
    by_name.insert(name.to_string(), descriptor.into_raw());
    let mut by_role = Map::new();
    by_role.insert(role.as_str().to_string(), Value::Object(by_name));
    let mut root = Map::new();
    root.insert(PLUGIN_ROOT.to_string(), Value::Object(by_role));
    Configuration::from_value(Value::Object(root))
}

fn unresolved_plugins(mut names: Vec<String>) -> Error {
    names.sort();
    let message = format!(
        "plugin [{}] load failed. Try to analyze the reasons from the following aspects:\n\
         1: Check that the plugin name is spelled correctly and that the plugin is supported\n\
         2: Check that the plugin ships a plugin descriptor under one of the configured search roots\n\
         3: Check that the descriptor's \"name\" field matches the name used in the job",
        names.join(", ")
    );
    Error::unresolved_plugin(names, message)
}
