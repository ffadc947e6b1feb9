use crate::config::JokesConfig;
use crate::database::JokeRepository;
use axum::Router;
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};

pub mod config;
pub mod database;
pub mod db;
pub mod domain;
pub mod errors;
pub mod features;
pub mod seed;
pub mod telemetry;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn JokeRepository>,
    pub config: Arc<JokesConfig>,
}

/// Composes every page and the JSON api into one router. Anything unmatched is
/// looked up in the static directory (stylesheets).
pub fn app(state: AppState) -> Router {
    let api_router = features::jokes::jokes_api_router();

    Router::new()
        .merge(features::home::home_router())
        .merge(features::jokes::jokes_router())
        .nest("/api", api_router)
        .fallback_service(ServeDir::new(&state.config.static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
