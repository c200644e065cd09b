pub mod handlers;
pub mod identity;
pub mod types;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::shared::AppState;

/// Builds the HTTP API around the game service
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/games", post(handlers::create_game))
        .route("/games/:game_id", get(handlers::get_game))
        .route("/games/:game_id/answer", post(handlers::submit_answer))
        .route("/games/:game_id/next", post(handlers::next_round))
        .route("/games/:game_id/restart", post(handlers::restart_game))
        .route("/leaderboard", get(handlers::leaderboard))
        .layer(middleware::from_fn(identity::resolve_identity))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
