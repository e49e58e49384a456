//! HTTP calls against the HTMLWEB geo API

use dialtrace_source_api::{
    LookupContext,
    SourceResult,
};
use serde_json::Value;

pub(crate) const BASE_URL: &str = "https://htmlweb.ru/geo/api.php";

pub(crate) fn lookup_url(phone: &str) -> String {
    format!("{BASE_URL}?json&telcod={}", urlencoding::encode(phone))
}

/// Fetches the raw dialing-code payload for the number in `ctx`.
pub(crate) async fn fetch_telcod(ctx: &LookupContext<'_>) -> SourceResult<Value> {
    let url = lookup_url(ctx.phone.as_str());

    let response = ctx
        .transport
        .get(ctx.request(url))
        .await?
        .error_for_status()?;

    response.json()
}
