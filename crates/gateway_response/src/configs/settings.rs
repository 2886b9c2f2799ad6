use std::path::PathBuf;

use config::{Environment, File};
use serde::Deserialize;

use crate::{
    core::errors::{ApplicationError, ApplicationResult},
    logger,
};

/// Env variable selecting `config/<env>.toml`.
pub const RUN_ENV: &str = "RUN_ENV";
const DEFAULT_ENV: &str = "development";
const ENV_PREFIX: &str = "GATEWAY";

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Settings {
    pub log: logger::config::Log,
    pub decoder: DecoderSettings,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DecoderSettings {
    /// Provider key used for wallet responses when the caller names none.
    pub wallet_provider: String,
}

impl Default for DecoderSettings {
    fn default() -> Self {
        Self {
            wallet_provider: "masterpass".to_string(),
        }
    }
}

impl Settings {
    pub fn new() -> ApplicationResult<Self> {
        Self::with_config_path(None)
    }

    ///
    /// Layer `GATEWAY__`-prefixed environment variables over the config file. The file is
    /// optional: without it the defaults apply.
    ///
    pub fn with_config_path(config_path: Option<PathBuf>) -> ApplicationResult<Self> {
        let config_path = config_path.unwrap_or_else(default_config_path);

        let config = config::Config::builder()
            .add_source(File::from(config_path).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .try_parsing(true)
                    .separator("__"),
            )
            .build()?;

        serde_path_to_error::deserialize(config).map_err(|error| {
            ApplicationError::InvalidConfigurationValueError(format!(
                "Unable to deserialize application configuration: {error}"
            ))
        })
    }

    pub fn validate(&self) -> ApplicationResult<()> {
        if self.decoder.wallet_provider.trim().is_empty() {
            return Err(ApplicationError::InvalidConfigurationValueError(
                "decoder.wallet_provider must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// `<workspace>/config/<RUN_ENV>.toml`
fn default_config_path() -> PathBuf {
    let environment = std::env::var(RUN_ENV).unwrap_or_else(|_| DEFAULT_ENV.into());
    let mut path = workspace_path();
    path.push("config");
    path.push(format!("{}.toml", environment.to_lowercase()));
    path
}

fn workspace_path() -> PathBuf {
    if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
        let mut path = PathBuf::from(manifest_dir);
        path.pop();
        path.pop();
        path
    } else {
        PathBuf::from(".")
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let settings =
            Settings::with_config_path(Some(PathBuf::from("does/not/exist.toml"))).unwrap();

        assert_eq!(settings.decoder.wallet_provider, "masterpass");
        assert!(settings.log.console.enabled);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn empty_wallet_provider_is_rejected() {
        let settings = Settings {
            decoder: DecoderSettings {
                wallet_provider: " ".to_string(),
            },
            ..Settings::default()
        };

        assert!(matches!(
            settings.validate(),
            Err(ApplicationError::InvalidConfigurationValueError(_))
        ));
    }

    #[test]
    fn workspace_config_file_parses() {
        let mut path = workspace_path();
        path.push("config/development.toml");

        let settings = Settings::with_config_path(Some(path)).unwrap();
        assert_eq!(
            settings.log.console.log_format,
            logger::config::LogFormat::Default
        );
        assert_eq!(settings.log.console.level, logger::config::Level::Debug);
    }
}
