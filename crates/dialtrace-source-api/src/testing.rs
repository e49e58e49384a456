//! Scripted transport for exercising sources without a network.

use std::sync::{
    Arc,
    Mutex,
};

use async_trait::async_trait;

use crate::error::{
    SourceError,
    SourceResult,
};
use crate::transport::{
    HttpRequest,
    HttpResponse,
    HttpTransport,
};

#[derive(Clone)]
enum Reply {
    Respond(HttpResponse),
    Fail(String),
}

#[derive(Default)]
struct Script {
    routes: Vec<(String, Reply)>,
    requests: Vec<HttpRequest>,
    sessions: usize,
}

/// Replays canned replies keyed by URL prefix and records every request.
///
/// The first matching prefix wins. Requests with no matching route fail with
/// a network error. Sessions share the script and the request log.
#[derive(Clone, Default)]
pub struct MockTransport {
    script: Arc<Mutex<Script>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, url_prefix: &str, status: u16, body: &str) -> Self {
        self.push(url_prefix, Reply::Respond(HttpResponse::new(status, body)))
    }

    pub fn fail(self, url_prefix: &str, message: &str) -> Self {
        self.push(url_prefix, Reply::Fail(message.to_string()))
    }

    fn push(self, url_prefix: &str, reply: Reply) -> Self {
        self.lock().routes.push((url_prefix.to_string(), reply));
        self
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Script> {
        self.script.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.lock().requests.clone()
    }

    pub fn request_count(&self) -> usize {
        self.lock().requests.len()
    }

    pub fn urls(&self) -> Vec<String> {
        self.lock().requests.iter().map(|r| r.url.clone()).collect()
    }

    pub fn sessions_opened(&self) -> usize {
        self.lock().sessions
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn get(&self, request: HttpRequest) -> SourceResult<HttpResponse> {
        let mut script = self.lock();
        let reply = script
            .routes
            .iter()
            .find(|(prefix, _)| request.url.starts_with(prefix.as_str()))
            .map(|(_, reply)| reply.clone());
        let url = request.url.clone();
        script.requests.push(request);

        match reply {
            Some(Reply::Respond(response)) => Ok(response),
            Some(Reply::Fail(message)) => Err(SourceError::NetworkError(message)),
            None => Err(SourceError::NetworkError(format!(
                "no scripted response for {url}"
            ))),
        }
    }

    fn session(&self) -> SourceResult<Box<dyn HttpTransport>> {
        self.lock().sessions += 1;
        Ok(Box::new(self.clone()))
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[tokio::test]
    async fn test_replays_by_prefix_and_records() {
        let transport = MockTransport::new()
            .respond("https://a.test/x", 200, "first")
            .respond("https://a.test/", 404, "")
            .fail("https://down.test/", "connection refused");

        let timeout = Duration::from_secs(1);
        let first = transport
            .get(HttpRequest::get("https://a.test/x?q=1", timeout))
            .await
            .unwrap();
        assert_eq!(first.body, "first");

        let second = transport
            .get(HttpRequest::get("https://a.test/y", timeout))
            .await
            .unwrap();
        assert_eq!(second.status, 404);

        let failed = transport
            .get(HttpRequest::get("https://down.test/", timeout))
            .await;
        assert_eq!(
            failed,
            Err(SourceError::NetworkError("connection refused".to_string()))
        );

        assert!(transport
            .get(HttpRequest::get("https://other.test/", timeout))
            .await
            .is_err());
        assert_eq!(transport.request_count(), 4);
    }

    #[tokio::test]
    async fn test_session_shares_log() {
        let transport = MockTransport::new().respond("https://a.test/", 200, "");
        let session = transport.session().unwrap();
        session
            .get(HttpRequest::get("https://a.test/", Duration::from_secs(1)))
            .await
            .unwrap();

        assert_eq!(transport.sessions_opened(), 1);
        assert_eq!(transport.urls(), vec!["https://a.test/".to_string()]);
    }
}
