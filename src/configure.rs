use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::fault::FaultPolicy;

/// Service tag used when nothing overrides it.
pub const SERVICE_TAG: &str = "[GoogleDataTransport]";

#[derive(Debug, Clone, Deserialize)]
pub struct EmitterConfig {
    pub service_tag: String,
    pub fault_policy: FaultPolicy,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            service_tag: SERVICE_TAG.to_string(),
            fault_policy: FaultPolicy::default(),
        }
    }
}

pub fn load_config() -> Result<EmitterConfig, ConfigError> {
    load_config_from("config/gdt_console")
}

/// Load from `path` (any extension `config` understands, optional) and
/// `GDT_*` environment variables, on top of the defaults.
pub fn load_config_from(path: &str) -> Result<EmitterConfig, ConfigError> {
    let s = Config::builder()
        // Set defaults
        .set_default("service_tag", SERVICE_TAG)?
        .set_default("fault_policy", "debug_assert")?
        .add_source(File::with_name(path).required(false))
        // e.g. GDT_FAULT_POLICY=log_only
        .add_source(Environment::with_prefix("GDT"))
        .build()?;

    s.try_deserialize()
}
