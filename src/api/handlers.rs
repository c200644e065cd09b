use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use tracing::{info, instrument};
use uuid::Uuid;

use super::types::{AnswerRequest, CreateGameResponse, GameView, LeaderboardQuery};
use crate::scores::{LeaderboardEntry, PlayerIdentity};
use crate::shared::{AppError, AppState};

/// GET /health
pub async fn health() -> &'static str {
    "ok"
}

/// HTTP handler for starting a new game
///
/// POST /games
/// Signed-in players get their best score loaded and their result saved
#[instrument(name = "create_game", skip(state, identity))]
pub async fn create_game(
    State(state): State<AppState>,
    identity: Option<Extension<PlayerIdentity>>,
) -> Result<Json<CreateGameResponse>, AppError> {
    let identity = identity.map(|Extension(identity)| identity);
    info!(signed_in = identity.is_some(), "Creating new game");

    let (game_id, session) = state.game_service.create_game(identity).await?;

    info!(%game_id, "Game created successfully");

    Ok(Json(CreateGameResponse {
        game_id,
        game: GameView::from(&session),
    }))
}

/// GET /games/:game_id
#[instrument(name = "get_game", skip(state))]
pub async fn get_game(
    State(state): State<AppState>,
    Path(game_id): Path<Uuid>,
) -> Result<Json<GameView>, AppError> {
    let session = state.game_service.get_game(game_id).await?;
    Ok(Json(GameView::from(&session)))
}

/// POST /games/:game_id/answer
///
/// Repeated answers for the same round leave the game unchanged
#[instrument(name = "submit_answer", skip(state))]
pub async fn submit_answer(
    State(state): State<AppState>,
    Path(game_id): Path<Uuid>,
    Json(request): Json<AnswerRequest>,
) -> Result<Json<GameView>, AppError> {
    if request.item_id.trim().is_empty() {
        return Err(AppError::BadRequest("item_id cannot be empty".to_string()));
    }

    let session = state
        .game_service
        .submit_answer(game_id, &request.item_id)
        .await?;
    Ok(Json(GameView::from(&session)))
}

/// POST /games/:game_id/next
#[instrument(name = "next_round", skip(state))]
pub async fn next_round(
    State(state): State<AppState>,
    Path(game_id): Path<Uuid>,
) -> Result<Json<GameView>, AppError> {
    let session = state.game_service.advance(game_id).await?;
    Ok(Json(GameView::from(&session)))
}

/// POST /games/:game_id/restart
#[instrument(name = "restart_game", skip(state))]
pub async fn restart_game(
    State(state): State<AppState>,
    Path(game_id): Path<Uuid>,
) -> Result<Json<GameView>, AppError> {
    let session = state.game_service.restart(game_id).await?;
    info!(%game_id, "Game restarted");
    Ok(Json(GameView::from(&session)))
}

/// GET /leaderboard?window=all|week|month
#[instrument(name = "leaderboard", skip(state))]
pub async fn leaderboard(
    State(state): State<AppState>,
    Query(query): Query<LeaderboardQuery>,
) -> Result<Json<Vec<LeaderboardEntry>>, AppError> {
    let entries = state.game_service.leaderboard(query.window).await?;
    info!(entry_count = entries.len(), window = %query.window, "Leaderboard listed");
    Ok(Json(entries))
}
