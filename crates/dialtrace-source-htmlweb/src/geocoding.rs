//! Reverse geocoding enrichment
//!
//! Turns a coordinate pair into a short, human-readable street address using
//! the public Nominatim API. Only a fixed subset of the address fields is
//! kept, in a fixed order, under display labels.

use dialtrace_source_api::json::as_text;
use dialtrace_source_api::{
    LookupContext,
    SourceError,
    SourceResult,
};
use indexmap::IndexMap;
use serde_json::{
    Map,
    Value,
};

pub const NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org/reverse";

/// Address fields kept from the geocoder, in display order.
pub const ADDRESS_ORDER: [&str; 6] = ["road", "house_number", "village", "town", "suburb", "postcode"];

/// Display label keyed by the relabeled field, in display order.
pub type AddressInfo = IndexMap<String, String>;

pub struct ReverseGeocoder {
    base_url: String,
}

impl Default for ReverseGeocoder {
    fn default() -> Self {
        Self::new(NOMINATIM_URL)
    }
}

impl ReverseGeocoder {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn reverse_url(&self, latitude: &str, longitude: &str) -> String {
        format!(
            "{}?format=json&lat={}&lon={}",
            self.base_url,
            urlencoding::encode(latitude),
            urlencoding::encode(longitude)
        )
    }

    /// Looks up the address at the given coordinates.
    ///
    /// Fails with `Address not found` when the geocoder has no `address`
    /// object, and with `Error getting address: ...` on any transport or
    /// parse failure.
    pub async fn address(
        &self, ctx: &LookupContext<'_>, latitude: &str, longitude: &str,
    ) -> SourceResult<AddressInfo> {
        let data = self
            .fetch(ctx, latitude, longitude)
            .await
            .map_err(|e| SourceError::Unavailable(format!("Error getting address: {e}")))?;

        match data.get("address").and_then(Value::as_object) {
            Some(address) => Ok(translate_address(sort_address(address))),
            None => Err(SourceError::Unavailable("Address not found".to_string())),
        }
    }

    async fn fetch(
        &self, ctx: &LookupContext<'_>, latitude: &str, longitude: &str,
    ) -> SourceResult<Value> {
        let url = self.reverse_url(latitude, longitude);
        let response = ctx
            .transport
            .get(ctx.request(url))
            .await?
            .error_for_status()?;
        response.json()
    }
}

/// Keeps the fields listed in [`ADDRESS_ORDER`], in that order.
pub fn sort_address(address: &Map<String, Value>) -> IndexMap<String, String> {
    ADDRESS_ORDER
        .iter()
        .filter_map(|key| {
            let value = address.get(*key).and_then(as_text)?;
            Some((key.to_string(), value))
        })
        .collect()
}

/// Replaces each raw key with its display label.
pub fn translate_address(address: IndexMap<String, String>) -> AddressInfo {
    address
        .into_iter()
        .map(|(key, value)| (display_label(&key), value))
        .collect()
}

pub fn display_label(key: &str) -> String {
    match key {
        "road" => "Street".to_string(),
        "house_number" => "House Number".to_string(),
        "village" => "Village".to_string(),
        "town" => "Town".to_string(),
        "suburb" => "District".to_string(),
        "postcode" => "Postal Code".to_string(),
        other => capitalize(other),
    }
}

fn capitalize(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
