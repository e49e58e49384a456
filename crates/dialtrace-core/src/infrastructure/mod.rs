pub mod config;
pub mod connectivity;
pub mod http_client;

pub use config::{
    ConfigLoader,
    CredentialMode,
    DialtraceConfig,
    LookupConfig,
    ServerConfig,
};
pub use connectivity::ConnectivityProbe;
pub use http_client::ReqwestTransport;
