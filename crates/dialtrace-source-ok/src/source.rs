//! Odnoklassniki source implementation

use async_trait::async_trait;
use dialtrace_source_api::*;

use crate::markup::{
    self,
    RecoveryPage,
};
use crate::{
    client,
    metadata,
};

pub const NOT_ASSOCIATED_STATUS: &str = "Number not associated with account";
pub const NO_INFORMATION_STATUS: &str = "No information available";

/// Account lookup through the Odnoklassniki password recovery flow
pub struct OdnoklassnikiSource {
    metadata: SourceMetadata,
}

impl Default for OdnoklassnikiSource {
    fn default() -> Self {
        Self::new()
    }
}

impl OdnoklassnikiSource {
    pub fn new() -> Self {
        Self {
            metadata: metadata::create_metadata(),
        }
    }

    fn to_record(&self, phone: &PhoneNumber, page: RecoveryPage) -> SourceRecord {
        match page {
            RecoveryPage::Associated(account) => SourceRecord::new(self.label())
                .with("phone", phone.as_str())
                .with("name", account.name)
                .with("profile_info", account.profile_info)
                .with("registered", account.registered),
            RecoveryPage::NotAssociated => SourceRecord::status(self.label(), NOT_ASSOCIATED_STATUS),
            RecoveryPage::Ambiguous => SourceRecord::status(self.label(), NO_INFORMATION_STATUS),
        }
    }
}

#[async_trait]
impl Source for OdnoklassnikiSource {
    fn metadata(&self) -> &SourceMetadata {
        &self.metadata
    }

    async fn lookup(&self, ctx: &LookupContext<'_>) -> SourceRecord {
        match client::fetch_recovery_page(ctx).await {
            Ok(body) => {
                let page = markup::parse_recovery_page(&body);
                if page == RecoveryPage::Ambiguous {
                    tracing::debug!(source = self.label(), "Recovery page matched no known layout");
                }
                self.to_record(ctx.phone, page)
            }
            Err(e) => {
                tracing::warn!(source = self.label(), error = %e, "Recovery flow failed");
                SourceRecord::from_error(self.label(), &e)
            }
        }
    }
}
