use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{
    SourceError,
    SourceResult,
};

/// A single outbound GET request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub user_agent: Option<String>,
    pub timeout: Duration,
}

impl HttpRequest {
    pub fn get(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            user_agent: None,
            timeout,
        }
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == 200
    }

    /// Fails with [`SourceError::HttpStatus`] unless the status is 200.
    pub fn error_for_status(self) -> SourceResult<Self> {
        if self.is_ok() {
            Ok(self)
        } else {
            Err(SourceError::HttpStatus(self.status))
        }
    }

    pub fn json(&self) -> SourceResult<Value> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// Outbound HTTP used by every source.
///
/// Implementations apply the per-request timeout and User-Agent and report
/// transport failures as [`SourceError::NetworkError`]. Non-200 statuses are
/// returned as responses, not errors.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn get(&self, request: HttpRequest) -> SourceResult<HttpResponse>;

    /// A fresh transport whose requests share one cookie jar.
    fn session(&self) -> SourceResult<Box<dyn HttpTransport>>;
}
