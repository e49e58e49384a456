use axum::{
    extract::State,
    Json,
};
use dialtrace_core::SourceMetadata;

use crate::state::AppState;

pub async fn list_sources(State(state): State<AppState>) -> Json<Vec<SourceMetadata>> {
    Json(state.core.search_service.sources())
}
