use dialtrace_source_api::SourceMetadata;

pub const LABEL: &str = "HTMLWEB";

pub fn create_metadata() -> SourceMetadata {
    SourceMetadata {
        name: "HTMLWEB".to_string(),
        label: LABEL.to_string(),
        source_type: "htmlweb".to_string(),
        version: "0.1.0".to_string(),
        description: "Country, region, city, time zone and carrier by dialing code".to_string(),
        homepage: Some("https://htmlweb.ru".to_string()),
        requires_credential: false,
    }
}
