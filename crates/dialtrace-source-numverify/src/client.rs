//! HTTP calls against the Numverify API

use dialtrace_source_api::{
    LookupContext,
    SourceResult,
};
use serde_json::Value;

pub(crate) const BASE_URL: &str = "http://apilayer.net/api/validate";

pub(crate) fn validate_url(access_key: &str, phone: &str) -> String {
    format!(
        "{BASE_URL}?access_key={}&number={}",
        urlencoding::encode(access_key),
        urlencoding::encode(phone)
    )
}

pub(crate) async fn validate(
    ctx: &LookupContext<'_>, access_key: &str,
) -> SourceResult<Value> {
    let url = validate_url(access_key, ctx.phone.as_str());

    let response = ctx
        .transport
        .get(ctx.request(url))
        .await?
        .error_for_status()?;

    response.json()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert_eq!(
            validate_url("k3y", "+15555555555"),
            "http://apilayer.net/api/validate?access_key=k3y&number=%2B15555555555"
        );
    }
}
