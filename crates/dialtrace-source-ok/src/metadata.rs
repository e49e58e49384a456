use dialtrace_source_api::SourceMetadata;

pub const LABEL: &str = "Odnoklassniki";

pub fn create_metadata() -> SourceMetadata {
    SourceMetadata {
        name: "Odnoklassniki".to_string(),
        label: LABEL.to_string(),
        source_type: "odnoklassniki".to_string(),
        version: "0.1.0".to_string(),
        description: "Account linked to the number, from the password recovery flow".to_string(),
        homepage: Some("https://ok.ru".to_string()),
        requires_credential: false,
    }
}
