use crate::{ApiConfig, ConfigError, ConfigErrorResult};

use std::path::PathBuf;

use serde::Deserialize;

const CONFIG_FILENAME: &str = "config.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
}

impl Config {
    /// Load configuration.
    ///
    /// Loading order:
    /// 1. Check for CARAVEL_CONFIG_DIR env var, else use the platform
    ///    config directory + "caravel"
    /// 2. Load config.toml if it exists, else use defaults
    /// 3. Apply CARAVEL_* environment variable overrides
    pub fn load() -> ConfigErrorResult<Self> {
        let config_path = Self::config_dir()?.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            log::debug!("no config file at {}, using defaults", config_path.display());
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: CARAVEL_CONFIG_DIR env var > <platform config dir>/caravel
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var("CARAVEL_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        dirs::config_dir()
            .map(|dir| dir.join("caravel"))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Path of the config file, for error messages and guidance output.
    pub fn config_file_path() -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILENAME))
    }

    fn apply_env_overrides(&mut self) {
        Self::apply_env_option_string("CARAVEL_API_URL", &mut self.api.url);
        Self::apply_env_option_string("CARAVEL_API_TOKEN", &mut self.api.token);
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
