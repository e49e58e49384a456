pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod logging;
pub mod sources;

use std::sync::Arc;

pub use application::{
    CredentialPolicy,
    SearchService,
};
pub use dialtrace_source_api::{
    HttpTransport,
    SourceMetadata,
    SourceRecord,
};
pub use domain::{
    SearchError,
    SearchOutcome,
    SearchResult,
};
pub use infrastructure::{
    ConfigLoader,
    CredentialMode,
    DialtraceConfig,
    ReqwestTransport,
};

pub struct CoreContext {
    pub config: DialtraceConfig,

    pub search_service: Arc<SearchService>,

    pub credential_policy: CredentialPolicy,
}

impl CoreContext {
    pub fn new(config: DialtraceConfig) -> anyhow::Result<Self> {
        let transport = ReqwestTransport::new()?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    pub fn with_transport(config: DialtraceConfig, transport: Arc<dyn HttpTransport>) -> Self {
        let registry = sources::create_source_registry();
        let search_service = SearchService::from_config(registry, transport, &config.lookup);
        let credential_policy = CredentialPolicy::from_config(&config.lookup);

        if credential_policy.mode() == CredentialMode::SingleKey
            && credential_policy.resolve(None).is_none()
        {
            tracing::warn!("No Numverify API key configured; searches will be refused");
        }

        tracing::info!(
            sources = search_service.sources().len(),
            credential_mode = %credential_policy.mode(),
            "Core initialized"
        );

        Self {
            config,
            search_service: Arc::new(search_service),
            credential_policy,
        }
    }

    /// Searches with the credential the policy selects for `supplied`.
    pub async fn search(&self, phone_number: &str, supplied: Option<&str>) -> SearchOutcome {
        let credential = self.credential_policy.resolve(supplied);
        self.search_service.search(phone_number, credential).await
    }
}

#[cfg(test)]
mod tests {
    use dialtrace_source_api::testing::MockTransport;

    use super::*;

    #[tokio::test]
    async fn test_single_key_from_config_ignores_request_key() {
        let mut config = DialtraceConfig::default();
        config.lookup.connectivity_check = false;
        let transport = MockTransport::new();
        let core = CoreContext::with_transport(config, Arc::new(transport.clone()));

        let outcome = core.search("+15555555555", Some("from-request")).await;

        assert_eq!(
            outcome,
            Err(SearchError::MissingCredential("Numverify".to_string()))
        );
        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn test_configured_key_reaches_numverify() {
        let mut config = DialtraceConfig::default();
        config.lookup.connectivity_check = false;
        config.lookup.numverify_api_key = "configured".to_string();
        let transport = MockTransport::new();
        let core = CoreContext::with_transport(config, Arc::new(transport.clone()));

        let records = core.search("+15555555555", None).await.unwrap();

        assert_eq!(records.len(), 4);
        assert!(transport
            .urls()
            .iter()
            .any(|url| url.contains("access_key=configured")));
    }
}
