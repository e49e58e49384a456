use axum::{
    extract::State,
    Json,
};
use dialtrace_core::CredentialMode;
use serde::{
    Deserialize,
    Serialize,
};

use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub credential_mode: CredentialMode,
    pub source_count: usize,
}

pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        credential_mode: state.core.credential_policy.mode(),
        source_count: state.core.search_service.sources().len(),
    })
}
