use async_trait::async_trait;
use chrono::Utc;
use sqlx::{PgPool, Row};
use tokio::sync::RwLock;
use tracing::{debug, instrument, warn};

use super::leaderboard::{aggregate_leaderboard, LEADERBOARD_SIZE};
use super::models::{LeaderboardEntry, ScoreRecord, TimeWindow};
use super::ScoreError;

/// Persistence gateway for finished games
#[async_trait]
pub trait ScoreRepository: Send + Sync {
    async fn get_best_score(&self, player_id: &str) -> Result<Option<u32>, ScoreError>;
    async fn submit_score(&self, record: &ScoreRecord) -> Result<(), ScoreError>;
    async fn list_leaderboard(
        &self,
        window: TimeWindow,
    ) -> Result<Vec<LeaderboardEntry>, ScoreError>;
}

fn validate(record: &ScoreRecord) -> Result<(), ScoreError> {
    if record.player_id.trim().is_empty() {
        return Err(ScoreError::Validation(
            "Score record requires a player id".to_string(),
        ));
    }
    if record.correct_answers > record.total_rounds || record.score > record.total_rounds {
        return Err(ScoreError::Validation(format!(
            "Score {} exceeds {} rounds",
            record.score, record.total_rounds
        )));
    }
    Ok(())
}

/// In-memory implementation of ScoreRepository for development and testing
#[derive(Debug, Default)]
pub struct InMemoryScoreRepository {
    records: RwLock<Vec<ScoreRecord>>,
}

impl InMemoryScoreRepository {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    /// Creates an in-memory repository with pre-populated results
    pub fn with_records(records: Vec<ScoreRecord>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    pub async fn record_count(&self) -> usize {
        self.records.read().await.len()
    }
}

#[async_trait]
impl ScoreRepository for InMemoryScoreRepository {
    #[instrument(skip(self))]
    async fn get_best_score(&self, player_id: &str) -> Result<Option<u32>, ScoreError> {
        let records = self.records.read().await;
        let best = records
            .iter()
            .filter(|record| record.player_id == player_id)
            .map(|record| record.score)
            .max();

        debug!(player_id, ?best, "Best score looked up in memory");
        Ok(best)
    }

    #[instrument(skip(self, record), fields(player_id = %record.player_id, score = record.score))]
    async fn submit_score(&self, record: &ScoreRecord) -> Result<(), ScoreError> {
        validate(record)?;
        self.records.write().await.push(record.clone());
        debug!("Score stored in memory");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_leaderboard(
        &self,
        window: TimeWindow,
    ) -> Result<Vec<LeaderboardEntry>, ScoreError> {
        let records = self.records.read().await;
        Ok(aggregate_leaderboard(&records, window, Utc::now()))
    }
}

/// Best score per player within the window. The display name is the one
/// from the player's most recent game, as in `aggregate_leaderboard`.
const LEADERBOARD_QUERY: &str = "\
    SELECT user_id, \
           (ARRAY_AGG(display_name ORDER BY created_at DESC))[1] AS display_name, \
           MAX(score) AS best_score, \
           COUNT(*) AS games_played \
    FROM game_results \
    WHERE $1::timestamptz IS NULL OR created_at >= $1 \
    GROUP BY user_id \
    ORDER BY best_score DESC, games_played ASC, display_name ASC, user_id ASC \
    LIMIT $2";

/// PostgreSQL implementation of the score repository.
///
/// Expects a `game_results` table with columns
/// `user_id TEXT, display_name TEXT, score INTEGER, total_rounds INTEGER,
/// correct_answers INTEGER, created_at TIMESTAMPTZ`.
pub struct PostgresScoreRepository {
    pool: PgPool,
}

impl PostgresScoreRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ScoreRepository for PostgresScoreRepository {
    #[instrument(skip(self))]
    async fn get_best_score(&self, player_id: &str) -> Result<Option<u32>, ScoreError> {
        let row = sqlx::query("SELECT MAX(score) AS best FROM game_results WHERE user_id = $1")
            .bind(player_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                warn!(error = %e, player_id, "Failed to fetch best score from database");
                ScoreError::from(e)
            })?;

        let best: Option<i32> = row.get("best");
        Ok(best.map(|score| score.max(0) as u32))
    }

    #[instrument(skip(self, record), fields(player_id = %record.player_id, score = record.score))]
    async fn submit_score(&self, record: &ScoreRecord) -> Result<(), ScoreError> {
        validate(record)?;

        sqlx::query(
            "INSERT INTO game_results (user_id, display_name, score, total_rounds, correct_answers, created_at) VALUES ($1, $2, $3, $4, $5, $6)"
        )
        .bind(&record.player_id)
        .bind(&record.display_name)
        .bind(record.score as i32)
        .bind(record.total_rounds as i32)
        .bind(record.correct_answers as i32)
        .bind(record.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            warn!(error = %e, "Failed to insert game result");
            ScoreError::from(e)
        })?;

        debug!("Game result stored in database");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_leaderboard(
        &self,
        window: TimeWindow,
    ) -> Result<Vec<LeaderboardEntry>, ScoreError> {
        let since = window.since(Utc::now());

        let rows = sqlx::query(LEADERBOARD_QUERY)
            .bind(since)
            .bind(LEADERBOARD_SIZE as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                warn!(error = %e, %window, "Failed to load leaderboard");
                ScoreError::from(e)
            })?;

        let entries = rows
            .into_iter()
            .map(|row| {
                let best_score: i32 = row.get("best_score");
                let games_played: i64 = row.get("games_played");
                LeaderboardEntry {
                    player_id: row.get("user_id"),
                    display_name: row.get("display_name"),
                    best_score: best_score.max(0) as u32,
                    games_played: games_played.max(0) as u32,
                }
            })
            .collect::<Vec<_>>();

        debug!(entry_count = entries.len(), "Leaderboard loaded from database");
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scores::PlayerIdentity;
    use chrono::Duration;

    fn result_for(player: &str, score: u32) -> ScoreRecord {
        ScoreRecord::new(&PlayerIdentity::new(player).with_username(player), score, 20)
    }

    #[tokio::test]
    async fn best_score_is_max_of_player_results() {
        let repo = InMemoryScoreRepository::new();
        repo.submit_score(&result_for("alice", 11)).await.unwrap();
        repo.submit_score(&result_for("alice", 16)).await.unwrap();
        repo.submit_score(&result_for("bob", 19)).await.unwrap();

        assert_eq!(repo.get_best_score("alice").await.unwrap(), Some(16));
        assert_eq!(repo.get_best_score("carol").await.unwrap(), None);
        assert_eq!(repo.record_count().await, 3);
    }

    #[tokio::test]
    async fn rejects_invalid_records() {
        let repo = InMemoryScoreRepository::new();

        let result = repo.submit_score(&result_for("", 5)).await;
        assert!(matches!(result, Err(ScoreError::Validation(_))));

        let result = repo.submit_score(&result_for("alice", 21)).await;
        assert!(matches!(result, Err(ScoreError::Validation(_))));

        assert_eq!(repo.record_count().await, 0);
    }

    #[tokio::test]
    async fn leaderboard_respects_window() {
        let mut old = result_for("alice", 20);
        old.created_at = Utc::now() - Duration::days(45);
        let repo = InMemoryScoreRepository::with_records(vec![old, result_for("bob", 12)]);

        let all = repo.list_leaderboard(TimeWindow::All).await.unwrap();
        assert_eq!(all[0].player_id, "alice");

        let month = repo.list_leaderboard(TimeWindow::Month).await.unwrap();
        assert_eq!(month.len(), 1);
        assert_eq!(month[0].display_name, "bob");
    }

    #[tokio::test]
    async fn leaderboard_shows_most_recent_display_name() {
        let mut first = ScoreRecord::new(&PlayerIdentity::new("p-1").with_username("zed"), 9, 20);
        first.created_at = Utc::now() - Duration::days(2);
        let renamed = ScoreRecord::new(&PlayerIdentity::new("p-1").with_username("amy"), 4, 20);
        let repo = InMemoryScoreRepository::with_records(vec![first, renamed]);

        let board = repo.list_leaderboard(TimeWindow::All).await.unwrap();

        assert_eq!(board.len(), 1);
        assert_eq!(board[0].display_name, "amy");
        assert_eq!(board[0].best_score, 9);
    }

    #[test]
    fn postgres_leaderboard_takes_latest_display_name() {
        assert!(LEADERBOARD_QUERY
            .contains("(ARRAY_AGG(display_name ORDER BY created_at DESC))[1] AS display_name"));
        assert!(!LEADERBOARD_QUERY.contains("MAX(display_name)"));
    }
}
