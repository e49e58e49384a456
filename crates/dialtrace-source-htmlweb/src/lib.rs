//! HTMLWEB source for Dialtrace
//!
//! Resolves the dialing code of a number to its country, region, city,
//! time zone and carrier. When the city comes with coordinates, the record is
//! enriched with a street-level address from a reverse geocoding service.
//!
//! # Architecture
//!
//! - `source` - [`Source`](dialtrace_source_api::Source) implementation
//! - `client` - HTTP calls against the HTMLWEB API
//! - `mapper` - JSON to record mapping
//! - `geocoding` - reverse geocoding enrichment
//! - `metadata` - source metadata

mod client;
pub mod geocoding;
mod mapper;
mod metadata;
mod source;

pub use geocoding::{
    AddressInfo,
    ReverseGeocoder,
};
pub use source::HtmlwebSource;

dialtrace_source_api::register_source!(HtmlwebSource);
