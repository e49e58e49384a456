//! Odnoklassniki source for Dialtrace
//!
//! Checks whether a number is tied to an Odnoklassniki account by walking
//! the site's anonymous password-recovery flow and reading which recovery
//! page the site serves back.
//!
//! - `client` - the two-step recovery flow over one cookie session
//! - `markup` - recovery page parsing
//! - `source` - [`Source`](dialtrace_source_api::Source) implementation

mod client;
pub mod markup;
mod metadata;
mod source;

pub use markup::{
    AccountInfo,
    RecoveryPage,
};
pub use source::OdnoklassnikiSource;

dialtrace_source_api::register_source!(OdnoklassnikiSource);
