use axum::{
    extract::{
        Path,
        Query,
        State,
    },
    Json,
};
use dialtrace_core::{
    SearchError,
    SourceRecord,
};
use serde::{
    Deserialize,
    Serialize,
};

use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    pub api_key: Option<String>,
}

/// Records on success, `{"error": ...}` when the search was refused.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum SearchResponse {
    Records(Vec<SourceRecord>),
    Error { error: String },
}

impl From<Result<Vec<SourceRecord>, SearchError>> for SearchResponse {
    fn from(outcome: Result<Vec<SourceRecord>, SearchError>) -> Self {
        match outcome {
            Ok(records) => Self::Records(records),
            Err(e) => Self::Error {
                error: e.to_string(),
            },
        }
    }
}

pub async fn search(
    State(state): State<AppState>, Path(phone_number): Path<String>,
    Query(query): Query<SearchQuery>,
) -> Json<SearchResponse> {
    let outcome = state
        .core
        .search(&phone_number, query.api_key.as_deref())
        .await;

    if let Err(e) = &outcome {
        tracing::info!(error = %e, "Search refused");
    }

    Json(outcome.into())
}
