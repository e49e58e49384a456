use std::time::Duration;

use dialtrace_source_api::{
    HttpRequest,
    HttpTransport,
};

pub const DEFAULT_PROBE_URL: &str = "https://google.com";
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Checks that the outside world is reachable before any source runs.
#[derive(Debug, Clone)]
pub struct ConnectivityProbe {
    url: String,
    timeout: Duration,
}

impl Default for ConnectivityProbe {
    fn default() -> Self {
        Self::new(DEFAULT_PROBE_URL, DEFAULT_PROBE_TIMEOUT)
    }
}

impl ConnectivityProbe {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            timeout,
        }
    }

    /// Any HTTP answer counts as reachable; only a transport failure does not.
    pub async fn is_reachable(&self, transport: &dyn HttpTransport) -> bool {
        match transport
            .get(HttpRequest::get(self.url.clone(), self.timeout))
            .await
        {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!(url = %self.url, error = %e, "Connectivity probe failed");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use dialtrace_source_api::testing::MockTransport;

    use super::*;

    #[tokio::test]
    async fn test_reachable_on_any_status() {
        let transport = MockTransport::new().respond(DEFAULT_PROBE_URL, 301, "");
        assert!(ConnectivityProbe::default().is_reachable(&transport).await);

        let requests = transport.requests();
        assert_eq!(requests[0].timeout, Duration::from_secs(5));
    }

    #[tokio::test]
    async fn test_unreachable_on_transport_error() {
        let transport = MockTransport::new().fail(DEFAULT_PROBE_URL, "network unreachable");
        assert!(!ConnectivityProbe::default().is_reachable(&transport).await);
    }
}
