use axum::{
    extract::State,
    response::Html,
    Form,
};
use serde::Deserialize;

use crate::error::ApiResult;
use crate::page::ReportView;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub phone_number: String,
    pub api_key: Option<String>,
}

pub async fn index(State(state): State<AppState>) -> ApiResult<Html<String>> {
    let view = ReportView::new("", state.core.credential_policy.accepts_request_key());
    Ok(Html(state.report.render(&view)?))
}

pub async fn submit(
    State(state): State<AppState>, Form(form): Form<SearchForm>,
) -> ApiResult<Html<String>> {
    let mut view = ReportView::new(
        form.phone_number.clone(),
        state.core.credential_policy.accepts_request_key(),
    );

    if !form.phone_number.is_empty() {
        view = match state
            .core
            .search(&form.phone_number, form.api_key.as_deref())
            .await
        {
            Ok(records) => view.with_records(&records),
            Err(e) => view.with_error(e.to_string()),
        };
    }

    Ok(Html(state.report.render(&view)?))
}
