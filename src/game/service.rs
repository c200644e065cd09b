use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use super::{
    models::GameOver,
    repository::{GameRepository, StoredGame},
    session::GameSession,
};
use crate::{
    catalog::Catalog,
    scores::{LeaderboardEntry, PlayerIdentity, ScoreRecord, ScoreRepository, TimeWindow},
    shared::AppError,
};

/// Drives game sessions against the catalog and the score gateway
pub struct GameService {
    catalog: Arc<Catalog>,
    game_repository: GameRepository,
    score_repository: Arc<dyn ScoreRepository>,
}

impl GameService {
    pub fn new(catalog: Arc<Catalog>, score_repository: Arc<dyn ScoreRepository>) -> Self {
        Self {
            catalog,
            game_repository: GameRepository::new(),
            score_repository,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Create and start a new session for an optional signed-in player
    #[instrument(skip(self, identity))]
    pub async fn create_game(
        &self,
        identity: Option<PlayerIdentity>,
    ) -> Result<(Uuid, GameSession), AppError> {
        let best_score = match &identity {
            Some(identity) => self.load_best_score(identity).await,
            None => None,
        };

        let session = {
            let mut rng = rand::rng();
            GameSession::default()
                .with_best_score(best_score)
                .start(&self.catalog, &mut rng)
        };

        let game_id = Uuid::new_v4();
        self.game_repository
            .insert_game(game_id, StoredGame::new(session.clone(), identity))
            .await;

        info!(%game_id, ?best_score, "Game created");
        Ok((game_id, session))
    }

    /// Get the current session state (read-only access)
    pub async fn get_game(&self, game_id: Uuid) -> Result<GameSession, AppError> {
        self.game_repository
            .get_game(game_id)
            .await
            .map(|game| game.session)
            .ok_or_else(|| not_found(game_id))
    }

    #[instrument(skip(self))]
    pub async fn submit_answer(
        &self,
        game_id: Uuid,
        item_id: &str,
    ) -> Result<GameSession, AppError> {
        self.game_repository
            .update_game(game_id, |game| {
                game.session = std::mem::take(&mut game.session).submit_answer(item_id);
                game.session.clone()
            })
            .await
            .ok_or_else(|| not_found(game_id))
    }

    /// Move to the next round. Entering the result phase saves the score for
    /// signed-in players; the new phase is committed before the save runs.
    #[instrument(skip(self))]
    pub async fn advance(&self, game_id: Uuid) -> Result<GameSession, AppError> {
        let catalog = Arc::clone(&self.catalog);
        let (game, game_over) = self
            .game_repository
            .update_game(game_id, |game| {
                let mut rng = rand::rng();
                let (session, game_over) =
                    std::mem::take(&mut game.session).advance(&catalog, &mut rng);
                game.session = session;
                (game.clone(), game_over)
            })
            .await
            .ok_or_else(|| not_found(game_id))?;

        match game_over {
            Some(game_over) => {
                self.finish_game(game_id, game.identity.as_ref(), game_over)
                    .await;
                self.get_game(game_id).await
            }
            None => Ok(game.session),
        }
    }

    #[instrument(skip(self))]
    pub async fn restart(&self, game_id: Uuid) -> Result<GameSession, AppError> {
        let catalog = Arc::clone(&self.catalog);
        self.game_repository
            .update_game(game_id, |game| {
                let mut rng = rand::rng();
                game.session = std::mem::take(&mut game.session).restart(&catalog, &mut rng);
                game.session.clone()
            })
            .await
            .ok_or_else(|| not_found(game_id))
    }

    #[instrument(skip(self))]
    pub async fn leaderboard(
        &self,
        window: TimeWindow,
    ) -> Result<Vec<LeaderboardEntry>, AppError> {
        let entries = self.score_repository.list_leaderboard(window).await?;
        debug!(entry_count = entries.len(), "Leaderboard listed");
        Ok(entries)
    }

    /// Evicts idle sessions, and finished ones sooner. Returns the number removed.
    #[instrument(skip(self))]
    pub async fn remove_stale_games(&self, inactivity: Duration, finished_ttl: Duration) -> usize {
        let removed = self
            .game_repository
            .remove_stale_games(inactivity, finished_ttl)
            .await;
        debug!(removed, "Stale games removed");
        removed
    }

    pub async fn live_game_count(&self) -> usize {
        self.game_repository.game_count().await
    }

    /// Best-effort lookup: any gateway failure means "no known best"
    async fn load_best_score(&self, identity: &PlayerIdentity) -> Option<u32> {
        match self.score_repository.get_best_score(&identity.id).await {
            Ok(best) => best,
            Err(err) => {
                warn!(?err, player_id = %identity.id, "Failed to load best score");
                None
            }
        }
    }

    async fn finish_game(
        &self,
        game_id: Uuid,
        identity: Option<&PlayerIdentity>,
        game_over: GameOver,
    ) {
        let Some(identity) = identity else {
            debug!(%game_id, "Anonymous game finished, nothing to save");
            return;
        };
        if game_over.score == 0 {
            debug!(%game_id, "Game finished without points, nothing to save");
            return;
        }

        let record = ScoreRecord::new(identity, game_over.score, game_over.rounds_played);
        if let Err(err) = self.score_repository.submit_score(&record).await {
            warn!(?err, %game_id, player_id = %identity.id, "Failed to save game result");
            return;
        }

        self.game_repository
            .update_game(game_id, |game| {
                game.session =
                    std::mem::take(&mut game.session).record_best_score(game_over.score);
            })
            .await;

        info!(
            %game_id,
            player_id = %identity.id,
            score = game_over.score,
            "Game result saved"
        );
    }
}

fn not_found(game_id: Uuid) -> AppError {
    AppError::NotFound(format!("Game not found: {}", game_id))
}
