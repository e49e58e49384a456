mod error;
mod page;
mod routes;
mod state;

use std::net::SocketAddr;

use anyhow::Context;
use axum::Router;
use dialtrace_core::{
    ConfigLoader,
    CoreContext,
};
use tower_http::cors::{
    Any,
    CorsLayer,
};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    rustls::crypto::ring::default_provider()
        .install_default()
        .map_err(|_| anyhow::anyhow!("Failed to install rustls crypto provider"))?;

    dialtrace_core::logging::init();

    let config = ConfigLoader::load_default().context("Failed to load config")?;

    let bind_addr: SocketAddr = config
        .server
        .bind_addr
        .parse()
        .with_context(|| format!("Invalid bind address: {}", config.server.bind_addr))?;
    let cors_allow_all = config.server.cors_allow_all;

    tracing::info!("Starting Dialtrace server");
    tracing::info!("Bind address: {}", bind_addr);

    let core = CoreContext::new(config).context("Failed to initialize core")?;
    let app_state = AppState::new(core).context("Failed to load report template")?;

    let app: Router = routes::router()
        .layer(TraceLayer::new_for_http())
        .layer(if cors_allow_all {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            CorsLayer::new()
        })
        .with_state(app_state);

    tracing::info!("Listening on {}", bind_addr);
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
