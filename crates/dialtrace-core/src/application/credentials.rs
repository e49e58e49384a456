use secrecy::{
    ExposeSecret,
    SecretString,
};

use crate::infrastructure::config::{
    CredentialMode,
    LookupConfig,
};

/// Decides which credential a search receives.
#[derive(Debug)]
pub enum CredentialPolicy {
    /// The deployment's own key; anything a caller supplies is ignored.
    SingleKey(Option<SecretString>),
    /// Whatever the caller supplies with the request.
    PerRequest,
}

impl CredentialPolicy {
    pub fn from_config(config: &LookupConfig) -> Self {
        match config.credential_mode {
            CredentialMode::SingleKey => Self::SingleKey(config.numverify_api_key()),
            CredentialMode::PerRequest => Self::PerRequest,
        }
    }

    pub fn mode(&self) -> CredentialMode {
        match self {
            Self::SingleKey(_) => CredentialMode::SingleKey,
            Self::PerRequest => CredentialMode::PerRequest,
        }
    }

    /// Whether callers are expected to send their own key.
    pub fn accepts_request_key(&self) -> bool {
        matches!(self, Self::PerRequest)
    }

    pub fn resolve<'a>(&'a self, supplied: Option<&'a str>) -> Option<&'a str> {
        match self {
            Self::SingleKey(key) => key.as_ref().map(|k| k.expose_secret()),
            Self::PerRequest => supplied.map(str::trim).filter(|k| !k.is_empty()),
        }
    }
}
