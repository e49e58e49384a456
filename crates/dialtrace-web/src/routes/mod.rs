pub mod health;
mod page;
mod search;
mod sources;

use axum::{
    routing::get,
    Router,
};

use crate::error::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(page::index).post(page::submit))
        .route("/api/search/{phone_number}", get(search::search))
        .nest("/api/v1", api_router())
        .fallback(not_found)
}

pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/sources", get(sources::list_sources))
}

async fn not_found() -> AppError {
    AppError::not_found("Route not found")
}
