use dialtrace_source_api::{
    PhoneNumber,
    SourceRecord,
};
use serde_json::json;

pub const ADDITIONAL_SOURCES_LABEL: &str = "Additional sources";

const VALIDITY_CHECK_URL: &str = "https://smsc.ru/testhlr/?phone=";
const EXTENDED_SEARCH_URL: &str = "https://reveng.ee/search?q=";

/// Manual follow-up links for the number, appended to every search result.
pub fn additional_sources(phone: &PhoneNumber) -> SourceRecord {
    let digits = phone.digits();

    SourceRecord::new(ADDITIONAL_SOURCES_LABEL).with(
        "additional_sources",
        json!({
            "validity_check": format!("{VALIDITY_CHECK_URL}{digits}"),
            "extended_search": format!("{EXTENDED_SEARCH_URL}{digits}"),
        }),
    )
}
