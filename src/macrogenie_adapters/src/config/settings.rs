use std::path::PathBuf;
use std::time::Duration;

use color_eyre::eyre::{Result, WrapErr};
use config::{Config as ConfigLoader, Environment, File};
use serde::Deserialize;

use super::constants::{
    DEFAULT_CONFIG_FILE, DEFAULT_CREDENTIAL_KEY, DEFAULT_CREDENTIALS_PATH, api, env,
};

#[derive(Debug, Clone, Deserialize)]
pub struct ApiSettings {
    pub base_url: String,
    #[serde(with = "millis")]
    pub timeout_in_millis: Duration,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CredentialSettings {
    pub path: PathBuf,
    pub key: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub api: ApiSettings,
    pub credentials: CredentialSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api: ApiSettings {
                base_url: api::DEFAULT_BASE_URL.to_string(),
                timeout_in_millis: api::DEFAULT_TIMEOUT,
            },
            credentials: CredentialSettings {
                path: PathBuf::from(DEFAULT_CREDENTIALS_PATH),
                key: DEFAULT_CREDENTIAL_KEY.to_string(),
            },
        }
    }
}

impl Settings {
    /// Load settings from defaults, an optional JSON file and `MACROGENIE__*`
    /// environment variables, in increasing order of precedence.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let config_file =
            std::env::var(env::CONFIG_PATH_ENV_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.into());

        Self::builder()?
            .add_source(File::with_name(&config_file).required(false))
            .add_source(
                Environment::with_prefix(env::ENV_PREFIX)
                    .prefix_separator(env::ENV_SEPARATOR)
                    .separator(env::ENV_SEPARATOR),
            )
            .build()
            .wrap_err("Failed to build configuration")?
            .try_deserialize()
            .wrap_err("Failed to deserialize settings")
    }

    /// Load settings from a single JSON file layered over the defaults.
    pub fn from_file(path: &str) -> Result<Self> {
        Self::builder()?
            .add_source(File::with_name(path))
            .build()
            .wrap_err_with(|| format!("Failed to read configuration from {path}"))?
            .try_deserialize()
            .wrap_err("Failed to deserialize settings")
    }

    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>> {
        let defaults = Self::default();
        let timeout_millis = i64::try_from(defaults.api.timeout_in_millis.as_millis())
            .wrap_err("Default timeout out of range")?;

        ConfigLoader::builder()
            .set_default("api.base_url", defaults.api.base_url)?
            .set_default("api.timeout_in_millis", timeout_millis)?
            .set_default(
                "credentials.path",
                defaults.credentials.path.to_string_lossy().into_owned(),
            )?
            .set_default("credentials.key", defaults.credentials.key)
            .wrap_err("Failed to set configuration defaults")
    }
}

mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
