use dialtrace_source_api::SourceMetadata;

pub const LABEL: &str = "Numverify";

pub fn create_metadata() -> SourceMetadata {
    SourceMetadata {
        name: "Numverify".to_string(),
        label: LABEL.to_string(),
        source_type: "numverify".to_string(),
        version: "0.1.0".to_string(),
        description: "Number validity, international format, carrier and line type".to_string(),
        homepage: Some("https://numverify.com".to_string()),
        requires_credential: true,
    }
}
