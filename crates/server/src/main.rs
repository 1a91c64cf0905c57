//! Local user directory serving the records the table loads.

use std::{net::SocketAddr, sync::Arc};

use axum::{
    extract::State,
    http::{StatusCode, Uri},
    routing::get,
    Json, Router,
};
use shared::{
    domain::User,
    error::{ApiError, ErrorCode},
};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

mod app_state;
mod config;
mod directory;

use app_state::AppState;
use config::load_settings;
use directory::UserDirectory;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let settings = load_settings();
    let directory = UserDirectory::load(settings.dataset_path.as_deref()).map_err(|error| {
        error!(
            dataset = ?settings.dataset_path,
            %error,
            "failed to load user directory; verify the dataset path and JSON contents"
        );
        error
    })?;
    info!(users = directory.len(), "user directory ready");

    let app = build_router(Arc::new(AppState { directory }));

    let addr: SocketAddr = settings.server_bind.parse()?;
    info!(%addr, "server listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/users", get(list_users))
        .fallback(not_found)
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

async fn list_users(State(state): State<Arc<AppState>>) -> Json<Vec<User>> {
    debug!(count = state.directory.len(), "serving user directory");
    Json(state.directory.users().to_vec())
}

async fn not_found(uri: Uri) -> (StatusCode, Json<ApiError>) {
    (
        StatusCode::NOT_FOUND,
        Json(ApiError::new(
            ErrorCode::NotFound,
            format!("no route for {}", uri.path()),
        )),
    )
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
