use dialtrace_source_api::json::{
    lookup,
    text_or_unknown,
};
use dialtrace_source_api::{
    SourceError,
    SourceRecord,
    SourceResult,
};
use serde_json::Value;

pub(crate) const INVALID_MESSAGE: &str = "Number invalid or information unavailable";

/// Numverify answers bad keys and exhausted quotas with an error object on
/// the same 200 response; anything without `valid: true` counts as invalid.
pub(crate) fn map_validation(label: &str, data: &Value) -> SourceResult<SourceRecord> {
    let valid = lookup(data, &["valid"])
        .and_then(Value::as_bool)
        .unwrap_or(false);
    if !valid {
        return Err(SourceError::Unavailable(INVALID_MESSAGE.to_string()));
    }

    Ok(SourceRecord::new(label)
        .with("number", text_or_unknown(data, &["international_format"]))
        .with("country", text_or_unknown(data, &["country_name"]))
        .with("operator", text_or_unknown(data, &["carrier"]))
        .with("type", text_or_unknown(data, &["line_type"])))
}
