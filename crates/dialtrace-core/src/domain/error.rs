use thiserror::Error;

use super::SearchResult;

/// Failures that stop a search before any source is queried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("Phone number must start with '+' and contain only digits!")]
    InvalidPhoneNumber,

    #[error("No internet connection!")]
    NoConnectivity,

    #[error("{0} API key is required")]
    MissingCredential(String),
}

pub type SearchOutcome = Result<SearchResult, SearchError>;

impl From<dialtrace_source_api::InvalidPhoneNumber> for SearchError {
    fn from(_: dialtrace_source_api::InvalidPhoneNumber) -> Self {
        SearchError::InvalidPhoneNumber
    }
}
