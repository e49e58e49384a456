use dialtrace_source_api::json::{
    text_at,
    text_or_unknown,
};
use dialtrace_source_api::{
    SourceRecord,
    UNKNOWN,
};
use serde_json::Value;

/// Key under which HTMLWEB nests the city-level entry.
const CITY: &str = "0";

pub(crate) fn map_telcod(label: &str, data: &Value) -> SourceRecord {
    let time_zone = text_at(data, &[CITY, "time_zone"])
        .or_else(|| text_at(data, &["time_zone"]))
        .unwrap_or_else(|| UNKNOWN.to_string());

    SourceRecord::new(label)
        .with(
            "phone_code",
            format!("+{}", text_or_unknown(data, &["country", "telcod"])),
        )
        .with("country", text_or_unknown(data, &["country", "fullname"]))
        .with("district", text_or_unknown(data, &["okrug"]))
        .with("region", text_or_unknown(data, &["region", "name"]))
        .with("city", text_or_unknown(data, &[CITY, "name"]))
        .with("latitude", text_or_unknown(data, &[CITY, "latitude"]))
        .with("longitude", text_or_unknown(data, &[CITY, "longitude"]))
        .with("timezone", format!("+{time_zone} UTC"))
        .with("operator", text_or_unknown(data, &[CITY, "oper"]))
}

/// Latitude and longitude of a mapped record, when both were resolved.
pub(crate) fn coordinates(record: &SourceRecord) -> Option<(String, String)> {
    let resolved = |key| record.get_str(key).filter(|v| *v != UNKNOWN);

    Some((
        resolved("latitude")?.to_string(),
        resolved("longitude")?.to_string(),
    ))
}
