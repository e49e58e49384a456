//! HTMLWEB source implementation

use async_trait::async_trait;
use dialtrace_source_api::*;

use crate::geocoding::ReverseGeocoder;
use crate::{
    client,
    mapper,
    metadata,
};

/// Geo/telecom lookup by dialing code, enriched with a street address
pub struct HtmlwebSource {
    metadata: SourceMetadata,
    geocoder: ReverseGeocoder,
}

impl Default for HtmlwebSource {
    fn default() -> Self {
        Self::new()
    }
}

impl HtmlwebSource {
    pub fn new() -> Self {
        Self::with_geocoder(ReverseGeocoder::default())
    }

    pub fn with_geocoder(geocoder: ReverseGeocoder) -> Self {
        Self {
            metadata: metadata::create_metadata(),
            geocoder,
        }
    }
}

#[async_trait]
impl Source for HtmlwebSource {
    fn metadata(&self) -> &SourceMetadata {
        &self.metadata
    }

    async fn lookup(&self, ctx: &LookupContext<'_>) -> SourceRecord {
        let data = match client::fetch_telcod(ctx).await {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!(source = self.label(), error = %e, "Dialing code lookup failed");
                return SourceRecord::from_error(self.label(), &e);
            }
        };

        let mut record = mapper::map_telcod(self.label(), &data);

        if let Some((latitude, longitude)) = mapper::coordinates(&record) {
            match self.geocoder.address(ctx, &latitude, &longitude).await {
                Ok(address) => {
                    let address: serde_json::Map<String, serde_json::Value> = address
                        .into_iter()
                        .map(|(label, value)| (label, value.into()))
                        .collect();
                    record.insert("address", address);
                }
                Err(e) => {
                    tracing::debug!(source = self.label(), error = %e, "Address enrichment skipped");
                }
            }
        }

        record
    }
}
