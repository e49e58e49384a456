//! Numverify source for Dialtrace
//!
//! Validates a number against the apilayer Numverify API and reports its
//! international format, country, carrier and line type. Requires an API
//! access key, passed per lookup.

mod client;
mod mapper;
mod metadata;
mod source;

pub use source::NumverifySource;

dialtrace_source_api::register_source!(NumverifySource);
