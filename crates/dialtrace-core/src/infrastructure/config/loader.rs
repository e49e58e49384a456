use std::path::{
    Path,
    PathBuf,
};

use thiserror::Error;

use super::interpolation::{
    interpolate_toml,
    InterpolationError,
};
use super::schema::DialtraceConfig;

pub const CONFIG_PATH_ENV: &str = "DIALTRACE_CONFIG_PATH";

const LOCAL_CONFIG_FILE: &str = "dialtrace.toml";

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("Config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Environment variable interpolation failed: {0}")]
    InterpolationError(#[from] InterpolationError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type ConfigLoadResult<T> = Result<T, ConfigLoadError>;

pub struct ConfigLoader;

impl ConfigLoader {
    /// First existing candidate among `DIALTRACE_CONFIG_PATH`, `./dialtrace.toml`
    /// and the user config directory. An explicit path is returned even when
    /// missing so that loading it reports the mistake.
    pub fn discover_config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            tracing::debug!("Using config path from {}: {}", CONFIG_PATH_ENV, path);
            return Some(PathBuf::from(path));
        }

        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.exists() {
            tracing::debug!("Using local config path: {}", local.display());
            return Some(local);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let path = config_dir.join("dialtrace").join("config.toml");
            if path.exists() {
                tracing::debug!("Using user config path: {}", path.display());
                return Some(path);
            }
        }

        None
    }

    /// Loads the discovered file, or built-in defaults when there is none.
    /// Environment overrides are applied in both cases.
    pub fn load_default() -> ConfigLoadResult<DialtraceConfig> {
        let mut config = match Self::discover_config_path() {
            Some(path) => Self::load(&path)?,
            None => {
                tracing::info!("No config file found, using defaults");
                DialtraceConfig::default()
            }
        };

        config.apply_env_overrides();
        Self::check(&config)?;

        Ok(config)
    }

    pub fn load(path: &Path) -> ConfigLoadResult<DialtraceConfig> {
        if !path.exists() {
            return Err(ConfigLoadError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        let config = Self::parse(&content)?;

        tracing::info!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    pub fn parse(content: &str) -> ConfigLoadResult<DialtraceConfig> {
        let mut value: toml::Value = toml::from_str(content)?;

        interpolate_toml(&mut value)?;

        let config: DialtraceConfig = value.try_into().map_err(|e| {
            ConfigLoadError::InvalidConfig(format!("Failed to deserialize config: {}", e))
        })?;

        tracing::debug!(
            credential_mode = %config.lookup.credential_mode,
            connectivity_check = config.lookup.connectivity_check,
            "Parsed config"
        );

        Ok(config)
    }

    fn check(config: &DialtraceConfig) -> ConfigLoadResult<()> {
        config.validate().map_err(ConfigLoadError::InvalidConfig)
    }
}
