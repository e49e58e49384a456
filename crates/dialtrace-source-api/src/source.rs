use std::time::Duration;

use async_trait::async_trait;
use serde::{
    Deserialize,
    Serialize,
};

use crate::phone::PhoneNumber;
use crate::record::SourceRecord;
use crate::transport::{
    HttpRequest,
    HttpTransport,
};
use crate::user_agent::UserAgentPool;

/// Source metadata - describes the source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceMetadata {
    /// Human-readable name (e.g., "Numverify")
    pub name: String,
    /// Label written into every record this source produces
    pub label: String,
    /// Source identifier (e.g., "numverify")
    pub source_type: String,
    /// Source version
    pub version: String,
    /// What the source contributes to a report
    pub description: String,
    /// Upstream service the source talks to
    pub homepage: Option<String>,
    /// Whether the source refuses to run without an API credential
    pub requires_credential: bool,
}

/// Everything a source needs for one lookup.
pub struct LookupContext<'a> {
    pub phone: &'a PhoneNumber,
    pub credential: Option<&'a str>,
    pub transport: &'a dyn HttpTransport,
    pub user_agents: &'a UserAgentPool,
    pub timeout: Duration,
}

impl<'a> LookupContext<'a> {
    /// A GET request carrying a freshly rotated User-Agent and the lookup timeout.
    pub fn request(&self, url: impl Into<String>) -> HttpRequest {
        HttpRequest::get(url, self.timeout).with_user_agent(self.user_agents.next())
    }
}

/// Main source trait - every information source implements this
///
/// `lookup` never fails: transport, HTTP and semantic failures are reported
/// as an error record labelled with the source.
#[async_trait]
pub trait Source: Send + Sync {
    /// Get source metadata
    fn metadata(&self) -> &SourceMetadata;

    /// Query the upstream for `ctx.phone` and normalise the answer
    async fn lookup(&self, ctx: &LookupContext<'_>) -> SourceRecord;

    /// Get the source type string
    fn source_type(&self) -> &str {
        &self.metadata().source_type
    }

    /// Label used in records
    fn label(&self) -> &str {
        &self.metadata().label
    }
}
