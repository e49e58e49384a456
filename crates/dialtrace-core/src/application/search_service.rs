use std::sync::Arc;
use std::time::Duration;

use dialtrace_source_api::{
    HttpTransport,
    LookupContext,
    PhoneNumber,
    SourceMetadata,
    SourceRegistry,
    UserAgentPool,
};

use crate::domain::{
    additional_sources,
    SearchError,
    SearchOutcome,
};
use crate::infrastructure::config::{
    CredentialMode,
    LookupConfig,
};
use crate::infrastructure::ConnectivityProbe;

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Runs one phone number through every registered source.
///
/// Sources are queried strictly in registration order, one at a time. A
/// failing source contributes an error record and never aborts the search;
/// only invalid input, a failed connectivity probe, or a missing credential
/// in single-key mode stop it early.
pub struct SearchService {
    registry: SourceRegistry,
    transport: Arc<dyn HttpTransport>,
    user_agents: UserAgentPool,
    probe: Option<ConnectivityProbe>,
    credential_mode: CredentialMode,
    request_timeout: Duration,
}

impl SearchService {
    pub fn new(registry: SourceRegistry, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            registry,
            transport,
            user_agents: UserAgentPool::default(),
            probe: Some(ConnectivityProbe::default()),
            credential_mode: CredentialMode::default(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    pub fn from_config(
        registry: SourceRegistry, transport: Arc<dyn HttpTransport>, config: &LookupConfig,
    ) -> Self {
        let probe = config
            .connectivity_check
            .then(|| ConnectivityProbe::new(config.probe_url.clone(), config.probe_timeout()));

        Self::new(registry, transport)
            .with_probe(probe)
            .with_credential_mode(config.credential_mode)
            .with_request_timeout(config.request_timeout())
    }

    pub fn with_probe(mut self, probe: Option<ConnectivityProbe>) -> Self {
        self.probe = probe;
        self
    }

    pub fn with_credential_mode(mut self, mode: CredentialMode) -> Self {
        self.credential_mode = mode;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_user_agents(mut self, user_agents: UserAgentPool) -> Self {
        self.user_agents = user_agents;
        self
    }

    pub fn credential_mode(&self) -> CredentialMode {
        self.credential_mode
    }

    pub fn sources(&self) -> Vec<SourceMetadata> {
        self.registry
            .iter()
            .map(|source| source.metadata().clone())
            .collect()
    }

    pub async fn search(&self, phone_number: &str, credential: Option<&str>) -> SearchOutcome {
        let phone = PhoneNumber::parse(phone_number)?;
        let credential = credential.filter(|key| !key.is_empty());

        if self.credential_mode == CredentialMode::SingleKey && credential.is_none() {
            if let Some(source) = self
                .registry
                .iter()
                .find(|source| source.metadata().requires_credential)
            {
                return Err(SearchError::MissingCredential(
                    source.metadata().name.clone(),
                ));
            }
        }

        if let Some(probe) = &self.probe {
            if !probe.is_reachable(self.transport.as_ref()).await {
                return Err(SearchError::NoConnectivity);
            }
        }

        tracing::debug!(phone = %phone, sources = self.registry.count(), "Starting search");

        let ctx = LookupContext {
            phone: &phone,
            credential,
            transport: self.transport.as_ref(),
            user_agents: &self.user_agents,
            timeout: self.request_timeout,
        };

        let mut records = Vec::with_capacity(self.registry.count() + 1);
        for source in self.registry.iter() {
            let record = source.lookup(&ctx).await;
            if record.is_error() {
                tracing::info!(source = source.label(), "Source returned an error record");
            }
            records.push(record);
        }
        records.push(additional_sources(&phone));

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use dialtrace_source_api::testing::MockTransport;
    use dialtrace_source_api::user_agent::USER_AGENTS;

    use super::*;
    use crate::domain::ADDITIONAL_SOURCES_LABEL;
    use crate::sources::create_source_registry;

    const PROBE: &str = "https://google.com";
    const HTMLWEB: &str = "https://htmlweb.ru/geo/api.php";
    const NOMINATIM: &str = "https://nominatim.openstreetmap.org/reverse";
    const NUMVERIFY: &str = "http://apilayer.net/api/validate";
    const OK_LOGIN: &str = "https://www.ok.ru/dk?st.cmd=anonymMain";
    const OK_RECOVER: &str = "https://www.ok.ru/dk?st.cmd=anonymRecoveryAfterFailedLogin";

    fn healthy_upstreams() -> MockTransport {
        MockTransport::new()
            .respond(PROBE, 200, "<html></html>")
            .respond(
                HTMLWEB,
                200,
                r#"{
                    "country": {"telcod": "7", "fullname": "Russia"},
                    "okrug": "Central",
                    "region": {"name": "Moscow"},
                    "0": {"name": "Moscow", "latitude": 55.75, "longitude": 37.62, "time_zone": 3, "oper": "MTS"}
                }"#,
            )
            .respond(
                NOMINATIM,
                200,
                r#"{"address": {"road": "Tverskaya", "house_number": "7", "postcode": "125009"}}"#,
            )
            .respond(
                NUMVERIFY,
                200,
                r#"{"valid": true, "international_format": "+79123456789", "country_name": "Russia", "carrier": "MTS", "line_type": "mobile"}"#,
            )
            .respond(OK_LOGIN, 200, "")
            .respond(
                OK_RECOVER,
                200,
                r#"<div data-l="registrationContainer,home_rest"></div>"#,
            )
    }

    fn service(transport: &MockTransport, mode: CredentialMode) -> SearchService {
        SearchService::new(create_source_registry(), Arc::new(transport.clone()))
            .with_credential_mode(mode)
            .with_user_agents(UserAgentPool::seeded(7))
    }

    #[tokio::test]
    async fn test_invalid_input_makes_no_requests() {
        let transport = healthy_upstreams();
        let service = service(&transport, CredentialMode::PerRequest);

        for input in ["", "+", "79123456789", "+7 912", "+7-912", "+7912a"] {
            assert_eq!(
                service.search(input, Some("key")).await,
                Err(SearchError::InvalidPhoneNumber)
            );
        }
        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn test_probe_failure_stops_search() {
        let transport = MockTransport::new().fail(PROBE, "network unreachable");
        let service = service(&transport, CredentialMode::PerRequest);

        let outcome = service.search("+79123456789", Some("key")).await;

        assert_eq!(outcome, Err(SearchError::NoConnectivity));
        assert_eq!(transport.urls(), vec![PROBE.to_string()]);
    }

    #[tokio::test]
    async fn test_probe_can_be_disabled() {
        let transport = healthy_upstreams();
        let service = service(&transport, CredentialMode::PerRequest).with_probe(None);

        service.search("+79123456789", Some("key")).await.unwrap();

        assert!(transport.urls().iter().all(|url| !url.starts_with(PROBE)));
    }

    #[tokio::test]
    async fn test_single_key_missing_refuses_search() {
        let transport = healthy_upstreams();
        let service = service(&transport, CredentialMode::SingleKey);

        for credential in [None, Some("")] {
            let outcome = service.search("+15555555555", credential).await;
            assert_eq!(
                outcome,
                Err(SearchError::MissingCredential("Numverify".to_string()))
            );
            assert_eq!(
                outcome.unwrap_err().to_string(),
                "Numverify API key is required"
            );
        }
        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn test_per_request_missing_key_fails_one_source() {
        let transport = healthy_upstreams();
        let service = service(&transport, CredentialMode::PerRequest);

        let records = service.search("+79123456789", None).await.unwrap();

        assert_eq!(records.len(), 4);
        assert!(!records[0].is_error());
        assert_eq!(
            records[1].error_message(),
            Some("Numverify API key is required")
        );
        assert!(!records[2].is_error());
        assert!(transport.urls().iter().all(|url| !url.starts_with(NUMVERIFY)));
    }

    #[tokio::test]
    async fn test_full_pipeline_order() {
        let transport = healthy_upstreams();
        let service = service(&transport, CredentialMode::SingleKey);

        let records = service.search("+79123456789", Some("key")).await.unwrap();

        let labels: Vec<&str> = records.iter().map(|r| r.source.as_str()).collect();
        assert_eq!(
            labels,
            vec!["HTMLWEB", "Numverify", "Odnoklassniki", ADDITIONAL_SOURCES_LABEL]
        );
        assert_eq!(records[0].get_str("latitude"), Some("55.75"));
        assert_eq!(records[0].get_str("timezone"), Some("+3 UTC"));
        assert_eq!(records[1].get_str("type"), Some("mobile"));
        assert_eq!(
            records[2].get_str("status"),
            Some("Number not associated with account")
        );

        let urls = transport.urls();
        let prefixes = [PROBE, HTMLWEB, NOMINATIM, NUMVERIFY, OK_LOGIN, OK_RECOVER];
        assert_eq!(urls.len(), prefixes.len());
        for (url, prefix) in urls.iter().zip(prefixes) {
            assert!(url.starts_with(prefix), "{url} should start with {prefix}");
        }
    }

    #[tokio::test]
    async fn test_failing_sources_do_not_abort() {
        let transport = MockTransport::new()
            .respond(PROBE, 200, "")
            .respond(HTMLWEB, 503, "")
            .fail(NUMVERIFY, "timed out")
            .fail(OK_LOGIN, "connection reset");
        let service = service(&transport, CredentialMode::PerRequest);

        let records = service.search("+79123456789", Some("key")).await.unwrap();

        assert_eq!(records.len(), 4);
        assert_eq!(records[0].error_message(), Some("HTTP Error: 503"));
        assert_eq!(records[1].error_message(), Some("Network error: timed out"));
        assert_eq!(
            records[2].error_message(),
            Some("Network error: connection reset")
        );
        assert_eq!(records[3].source, ADDITIONAL_SOURCES_LABEL);
    }

    #[tokio::test]
    async fn test_repeated_search_is_identical() {
        let transport = healthy_upstreams();
        let service = service(&transport, CredentialMode::SingleKey);

        let first = service.search("+79123456789", Some("s3cr3t-k3y")).await.unwrap();
        let second = service.search("+79123456789", Some("s3cr3t-k3y")).await.unwrap();

        let first = serde_json::to_string(&first).unwrap();
        let second = serde_json::to_string(&second).unwrap();
        assert_eq!(first, second);
        assert!(USER_AGENTS.iter().all(|ua| !first.contains(ua)));
        assert!(!first.contains("s3cr3t-k3y"));
    }

    #[tokio::test]
    async fn test_every_request_is_bounded_and_identified() {
        let transport = healthy_upstreams();
        let service = service(&transport, CredentialMode::SingleKey)
            .with_request_timeout(Duration::from_secs(3));

        service.search("+79123456789", Some("key")).await.unwrap();

        let requests = transport.requests();
        let (probe, lookups) = requests.split_first().unwrap();
        assert_eq!(probe.timeout, Duration::from_secs(5));
        assert!(lookups.iter().all(|r| r.timeout == Duration::from_secs(3)
            && r.user_agent.as_deref().is_some_and(|ua| USER_AGENTS.contains(&ua))));
    }

    #[test]
    fn test_from_config() {
        let config = LookupConfig {
            credential_mode: CredentialMode::PerRequest,
            connectivity_check: false,
            ..LookupConfig::default()
        };
        let service = SearchService::from_config(
            create_source_registry(),
            Arc::new(MockTransport::new()),
            &config,
        );

        assert_eq!(service.credential_mode(), CredentialMode::PerRequest);
        assert!(service.probe.is_none());
        assert_eq!(service.sources().len(), 3);
    }
}
