use std::time::Duration;

use secrecy::SecretString;
use serde::{
    Deserialize,
    Serialize,
};

pub(super) const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";

pub(super) const DEFAULT_CORS_ALLOW_ALL: bool = true;

pub(super) const DEFAULT_PROBE_URL: &str = "https://google.com";

pub(super) const DEFAULT_PROBE_TIMEOUT_SECS: u64 = 5;

pub(super) const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Where the Numverify credential comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CredentialMode {
    /// One key from configuration; a search without it is refused outright.
    #[default]
    SingleKey,
    /// Each request supplies its own key; without it only Numverify fails.
    PerRequest,
}

impl std::fmt::Display for CredentialMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SingleKey => write!(f, "single_key"),
            Self::PerRequest => write!(f, "per_request"),
        }
    }
}

impl std::str::FromStr for CredentialMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "single_key" => Ok(Self::SingleKey),
            "per_request" => Ok(Self::PerRequest),
            _ => Err(format!(
                "Unknown credential mode: {}. Valid options: single_key, per_request",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DialtraceConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub lookup: LookupConfig,
}

impl DialtraceConfig {
    /// Human-readable problems; empty when the config is usable.
    pub fn validation_errors(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.server.bind_addr.trim().is_empty() {
            errors.push("server.bind_addr must not be empty".to_string());
        }
        if self.lookup.request_timeout_secs == 0 {
            errors.push("lookup.request_timeout_secs must be greater than 0".to_string());
        }
        if self.lookup.connectivity_check {
            if self.lookup.probe_timeout_secs == 0 {
                errors.push("lookup.probe_timeout_secs must be greater than 0".to_string());
            }
            if let Err(e) = reqwest::Url::parse(&self.lookup.probe_url) {
                errors.push(format!(
                    "lookup.probe_url is not a valid URL ({}): {}",
                    self.lookup.probe_url, e
                ));
            }
        }

        errors
    }

    pub fn validate(&self) -> Result<(), String> {
        let errors = self.validation_errors();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors.join("; "))
        }
    }

    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key.env_var_name()).ok());
    }

    /// Applies every override `lookup` yields. Unparseable values are logged
    /// and ignored.
    pub(super) fn apply_overrides(&mut self, lookup: impl Fn(ConfigKey) -> Option<String>) {
        if let Some(bind_addr) = lookup(ConfigKey::BindAddr) {
            self.server.bind_addr = bind_addr;
        }

        if let Some(port) = lookup(ConfigKey::Port) {
            match port.trim().parse::<u16>() {
                Ok(port) => self.server.bind_addr = with_port(&self.server.bind_addr, port),
                Err(_) => tracing::warn!(value = %port, "Ignoring invalid PORT"),
            }
        }

        if let Some(cors) = lookup(ConfigKey::CorsAllowAll) {
            match cors.trim().parse::<bool>() {
                Ok(cors) => self.server.cors_allow_all = cors,
                Err(_) => tracing::warn!(value = %cors, "Ignoring invalid DIALTRACE_CORS_ALLOW_ALL"),
            }
        }

        if let Some(mode) = lookup(ConfigKey::CredentialMode) {
            match mode.parse::<CredentialMode>() {
                Ok(mode) => self.lookup.credential_mode = mode,
                Err(e) => tracing::warn!("Ignoring DIALTRACE_CREDENTIAL_MODE: {}", e),
            }
        }

        if let Some(key) = lookup(ConfigKey::NumverifyApiKey) {
            self.lookup.numverify_api_key = key;
        }
    }
}

fn with_port(bind_addr: &str, port: u16) -> String {
    let host = match bind_addr.rsplit_once(':') {
        Some((host, _)) if !host.is_empty() => host,
        _ => "0.0.0.0",
    };
    format!("{}:{}", host, port)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    #[serde(default = "default_cors_allow_all")]
    pub cors_allow_all: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            cors_allow_all: default_cors_allow_all(),
        }
    }
}

fn default_bind_addr() -> String {
    DEFAULT_BIND_ADDR.to_string()
}

fn default_cors_allow_all() -> bool {
    DEFAULT_CORS_ALLOW_ALL
}

#[derive(Clone, Serialize, Deserialize)]
pub struct LookupConfig {
    #[serde(default)]
    pub credential_mode: CredentialMode,

    #[serde(default, skip_serializing)]
    pub numverify_api_key: String,

    #[serde(default = "default_connectivity_check")]
    pub connectivity_check: bool,

    #[serde(default = "default_probe_url")]
    pub probe_url: String,

    #[serde(default = "default_probe_timeout_secs")]
    pub probe_timeout_secs: u64,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            credential_mode: CredentialMode::default(),
            numverify_api_key: String::new(),
            connectivity_check: default_connectivity_check(),
            probe_url: default_probe_url(),
            probe_timeout_secs: default_probe_timeout_secs(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl std::fmt::Debug for LookupConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LookupConfig")
            .field("credential_mode", &self.credential_mode)
            .field("has_numverify_api_key", &!self.numverify_api_key.is_empty())
            .field("connectivity_check", &self.connectivity_check)
            .field("probe_url", &self.probe_url)
            .field("probe_timeout_secs", &self.probe_timeout_secs)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

impl LookupConfig {
    /// The configured key, if any.
    pub fn numverify_api_key(&self) -> Option<SecretString> {
        let key = self.numverify_api_key.trim();
        (!key.is_empty()).then(|| SecretString::from(key.to_string()))
    }

    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

fn default_connectivity_check() -> bool {
    true
}

fn default_probe_url() -> String {
    DEFAULT_PROBE_URL.to_string()
}

fn default_probe_timeout_secs() -> u64 {
    DEFAULT_PROBE_TIMEOUT_SECS
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigKey {
    BindAddr,
    Port,
    CorsAllowAll,
    CredentialMode,
    NumverifyApiKey,
}

impl ConfigKey {
    pub fn env_var_name(&self) -> &'static str {
        match self {
            Self::BindAddr => "DIALTRACE_BIND_ADDR",
            Self::Port => "PORT",
            Self::CorsAllowAll => "DIALTRACE_CORS_ALLOW_ALL",
            Self::CredentialMode => "DIALTRACE_CREDENTIAL_MODE",
            Self::NumverifyApiKey => "NUMVERIFY_API_KEY",
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use secrecy::ExposeSecret;

    use super::*;

    fn overrides(pairs: &[(ConfigKey, &str)]) -> impl Fn(ConfigKey) -> Option<String> {
        let map: HashMap<ConfigKey, String> =
            pairs.iter().map(|(k, v)| (*k, v.to_string())).collect();
        move |key| map.get(&key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = DialtraceConfig::default();

        assert_eq!(config.server.bind_addr, "0.0.0.0:5000");
        assert!(config.server.cors_allow_all);
        assert_eq!(config.lookup.credential_mode, CredentialMode::SingleKey);
        assert!(config.lookup.connectivity_check);
        assert_eq!(config.lookup.probe_url, "https://google.com");
        assert_eq!(config.lookup.probe_timeout(), Duration::from_secs(5));
        assert_eq!(config.lookup.request_timeout(), Duration::from_secs(10));
        assert!(config.lookup.numverify_api_key().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_credential_mode_parsing() {
        assert_eq!(
            "single_key".parse::<CredentialMode>().unwrap(),
            CredentialMode::SingleKey
        );
        assert_eq!(
            "Per-Request".parse::<CredentialMode>().unwrap(),
            CredentialMode::PerRequest
        );
        assert!("both".parse::<CredentialMode>().is_err());
        assert_eq!(CredentialMode::PerRequest.to_string(), "per_request");
    }

    #[test]
    fn test_port_replaces_only_port() {
        let mut config = DialtraceConfig::default();
        config.server.bind_addr = "127.0.0.1:8080".to_string();

        config.apply_overrides(overrides(&[(ConfigKey::Port, "9000")]));

        assert_eq!(config.server.bind_addr, "127.0.0.1:9000");
    }

    #[test]
    fn test_env_overrides() {
        let mut config = DialtraceConfig::default();

        config.apply_overrides(overrides(&[
            (ConfigKey::BindAddr, "127.0.0.1:7000"),
            (ConfigKey::CorsAllowAll, "false"),
            (ConfigKey::CredentialMode, "per_request"),
            (ConfigKey::NumverifyApiKey, "from-env"),
        ]));

        assert_eq!(config.server.bind_addr, "127.0.0.1:7000");
        assert!(!config.server.cors_allow_all);
        assert_eq!(config.lookup.credential_mode, CredentialMode::PerRequest);
        assert_eq!(
            config.lookup.numverify_api_key().unwrap().expose_secret(),
            "from-env"
        );
    }

    #[test]
    fn test_invalid_overrides_are_ignored() {
        let mut config = DialtraceConfig::default();

        config.apply_overrides(overrides(&[
            (ConfigKey::Port, "not-a-port"),
            (ConfigKey::CorsAllowAll, "maybe"),
            (ConfigKey::CredentialMode, "sometimes"),
        ]));

        assert_eq!(config.server.bind_addr, "0.0.0.0:5000");
        assert!(config.server.cors_allow_all);
        assert_eq!(config.lookup.credential_mode, CredentialMode::SingleKey);
    }

    #[test]
    fn test_validation_errors() {
        let mut config = DialtraceConfig::default();
        config.server.bind_addr = " ".to_string();
        config.lookup.request_timeout_secs = 0;
        config.lookup.probe_url = "not a url".to_string();

        let errors = config.validation_errors();

        assert_eq!(errors.len(), 3);
        assert!(errors[2].starts_with("lookup.probe_url is not a valid URL"));

        config.lookup.connectivity_check = false;
        assert_eq!(config.validation_errors().len(), 2);
    }

    #[test]
    fn test_blank_key_is_absent() {
        let lookup = LookupConfig {
            numverify_api_key: "  ".to_string(),
            ..LookupConfig::default()
        };
        assert!(lookup.numverify_api_key().is_none());
    }

    #[test]
    fn test_debug_hides_key() {
        let lookup = LookupConfig {
            numverify_api_key: "secret-value".to_string(),
            ..LookupConfig::default()
        };
        let debug = format!("{:?}", lookup);
        assert!(!debug.contains("secret-value"));
        assert!(debug.contains("has_numverify_api_key: true"));
    }

    #[test]
    fn test_config_key_env_vars() {
        assert_eq!(ConfigKey::Port.env_var_name(), "PORT");
        assert_eq!(ConfigKey::NumverifyApiKey.env_var_name(), "NUMVERIFY_API_KEY");
        assert_eq!(ConfigKey::CredentialMode.env_var_name(), "DIALTRACE_CREDENTIAL_MODE");
    }
}
