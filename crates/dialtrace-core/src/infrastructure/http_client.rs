use std::time::Duration;

use async_trait::async_trait;
use dialtrace_source_api::{
    HttpRequest,
    HttpResponse,
    HttpTransport,
    SourceError,
    SourceResult,
};
use reqwest::header::USER_AGENT;
use reqwest::Client;

/// [`HttpTransport`] backed by a pooled `reqwest` client.
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> SourceResult<Self> {
        Ok(Self {
            client: Self::create_client(false)?,
        })
    }

    fn create_client(cookie_store: bool) -> SourceResult<Client> {
        Client::builder()
            .cookie_store(cookie_store)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(60))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| SourceError::Internal(format!("Failed to create HTTP client: {e}")))
    }
}

/// Query strings may carry credentials, so reqwest's URL suffix is dropped.
fn map_send_error(err: reqwest::Error, timeout: Duration) -> SourceError {
    if err.is_timeout() {
        SourceError::NetworkError(format!("Request timed out after {}s", timeout.as_secs()))
    } else {
        SourceError::NetworkError(err.without_url().to_string())
    }
}

/// Scheme, host and path of `url`, without query or fragment.
fn loggable_url(url: &str) -> String {
    match reqwest::Url::parse(url) {
        Ok(mut parsed) => {
            parsed.set_query(None);
            parsed.set_fragment(None);
            parsed.to_string()
        }
        Err(_) => "<invalid url>".to_string(),
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, request: HttpRequest) -> SourceResult<HttpResponse> {
        let mut builder = self.client.get(&request.url).timeout(request.timeout);
        if let Some(user_agent) = &request.user_agent {
            builder = builder.header(USER_AGENT, user_agent);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| map_send_error(e, request.timeout))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| map_send_error(e, request.timeout))?;

        tracing::trace!(url = %loggable_url(&request.url), status, "HTTP GET completed");

        Ok(HttpResponse { status, body })
    }

    fn session(&self) -> SourceResult<Box<dyn HttpTransport>> {
        Ok(Box::new(Self {
            client: Self::create_client(true)?,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEYED_URL: &str = "http://127.0.0.1:1/api/validate?access_key=S3CRET&number=%2B15555555555";

    fn transport() -> ReqwestTransport {
        let _ = rustls::crypto::ring::default_provider().install_default();
        ReqwestTransport::new().unwrap()
    }

    #[tokio::test]
    async fn test_connection_error_omits_query() {
        let err = transport()
            .get(HttpRequest::get(KEYED_URL, Duration::from_secs(5)))
            .await
            .unwrap_err();

        assert!(matches!(err, SourceError::NetworkError(_)));
        assert!(!err.to_string().contains("S3CRET"));
        assert!(!err.to_string().contains("access_key"));
    }

    #[tokio::test]
    async fn test_session_error_omits_query() {
        let session = transport().session().unwrap();

        let err = session
            .get(HttpRequest::get(KEYED_URL, Duration::from_secs(5)).with_user_agent("test"))
            .await
            .unwrap_err();

        assert!(!err.to_string().contains("S3CRET"));
    }

    #[test]
    fn test_loggable_url_strips_query() {
        assert_eq!(loggable_url(KEYED_URL), "http://127.0.0.1:1/api/validate");
        assert_eq!(loggable_url("not a url"), "<invalid url>");
    }
}
