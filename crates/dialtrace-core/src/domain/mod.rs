pub mod error;
pub mod links;

pub use dialtrace_source_api::SourceRecord;
pub use error::{
    SearchError,
    SearchOutcome,
};
pub use links::{
    additional_sources,
    ADDITIONAL_SOURCES_LABEL,
};

/// Ordered records produced by one search: one per source, then the
/// additional-sources record.
pub type SearchResult = Vec<SourceRecord>;
