pub mod interpolation;
pub mod loader;
pub mod schema;

pub use interpolation::interpolate;
pub use loader::{
    ConfigLoadError,
    ConfigLoadResult,
    ConfigLoader,
};
pub use schema::{
    ConfigKey,
    CredentialMode,
    DialtraceConfig,
    LookupConfig,
    ServerConfig,
};
