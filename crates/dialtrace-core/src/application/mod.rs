pub mod credentials;
pub mod search_service;

pub use credentials::CredentialPolicy;
pub use search_service::SearchService;
