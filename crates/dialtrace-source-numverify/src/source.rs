//! Numverify source implementation

use async_trait::async_trait;
use dialtrace_source_api::*;

use crate::{
    client,
    mapper,
    metadata,
};

/// Number validation through the Numverify API
pub struct NumverifySource {
    metadata: SourceMetadata,
}

impl Default for NumverifySource {
    fn default() -> Self {
        Self::new()
    }
}

impl NumverifySource {
    pub fn new() -> Self {
        Self {
            metadata: metadata::create_metadata(),
        }
    }

    async fn validate(&self, ctx: &LookupContext<'_>) -> SourceResult<SourceRecord> {
        let access_key = ctx
            .credential
            .filter(|key| !key.is_empty())
            .ok_or_else(|| SourceError::MissingCredential(self.metadata.name.clone()))?;

        let response = client::validate(ctx, access_key).await?;
        mapper::map_validation(self.label(), &response)
    }
}

#[async_trait]
impl Source for NumverifySource {
    fn metadata(&self) -> &SourceMetadata {
        &self.metadata
    }

    async fn lookup(&self, ctx: &LookupContext<'_>) -> SourceRecord {
        self.validate(ctx).await.unwrap_or_else(|e| {
            tracing::warn!(source = self.label(), error = %e, "Number validation failed");
            SourceRecord::from_error(self.label(), &e)
        })
    }
}
