//! Source API for Dialtrace
//!
//! Every information source queried during a phone lookup implements the
//! [`Source`] trait. Sources never talk to the network directly: they go
//! through an [`HttpTransport`] handed to them in the [`LookupContext`], so
//! the aggregation pipeline can be driven against scripted responses.

pub mod error;
pub mod json;
pub mod phone;
pub mod record;
pub mod registry;
pub mod source;
#[cfg(any(test, feature = "testing"))]
pub mod testing;
pub mod transport;
pub mod user_agent;

pub use error::{
    SourceError,
    SourceResult,
};
pub use phone::{
    InvalidPhoneNumber,
    PhoneNumber,
};
pub use record::SourceRecord;
pub use registry::SourceRegistry;
pub use source::{
    LookupContext,
    Source,
    SourceMetadata,
};
pub use transport::{
    HttpRequest,
    HttpResponse,
    HttpTransport,
};
pub use user_agent::UserAgentPool;

/// Placeholder used for every field an upstream response leaves out.
pub const UNKNOWN: &str = "Unknown";

#[macro_export]
macro_rules! register_source {
    ($source_type:ty) => {
        pub fn register(registry: &mut $crate::SourceRegistry) {
            registry.register(Box::new(<$source_type>::default()));
        }
    };
}
