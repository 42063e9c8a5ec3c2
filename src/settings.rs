use std::sync::Arc;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use url::Url;

const ENV_PREFIX: &str = "LINKFORM";

pub const DEFAULT_API_BASE: &str = "http://localhost:3000";
const DEFAULT_LISTEN_ADDRESS: &str = "127.0.0.1:8080";

pub type ArcSettings = Arc<Settings>;

/// Returns the name of a process-level environment variable, e.g. `LINKFORM_LOG`.
pub fn env_name(name: &str) -> String {
    format!("{ENV_PREFIX}_{name}")
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub general: GeneralSettings,
    pub api: ApiSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeneralSettings {
    pub listen_address: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiSettings {
    /// Base address of the remote shortening service.
    pub base_url: Url,
}

impl Settings {
    /// Loads settings from `linkform.toml` (optional) and `LINKFORM_*` variables.
    pub fn try_load() -> Result<Self, ConfigError> {
        Self::load_with(environment())
    }

    fn load_with(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("general.listen_address", DEFAULT_LISTEN_ADDRESS)?
            .set_default("api.base_url", DEFAULT_API_BASE)?
            .add_source(File::with_name("linkform").required(false))
            .add_source(environment)
            .build()?
            .try_deserialize()
    }
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
}
