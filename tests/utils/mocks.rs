#![allow(dead_code)] // Test utilities may not all be used in every test

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use fontgame::scores::{LeaderboardEntry, ScoreError, ScoreRecord, ScoreRepository, TimeWindow};

// ============================================================================
// Mock Infrastructure
// ============================================================================

fn unavailable() -> ScoreError {
    ScoreError::Repository("database unavailable".to_string())
}

/// Score gateway whose writes and leaderboard reads always fail.
/// Best-score lookups fail too unless a stored best is configured.
#[derive(Default)]
pub struct FailingScoreRepository {
    stored_best: Option<u32>,
    submit_attempts: AtomicUsize,
}

impl FailingScoreRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lookups succeed with `best`; saving still fails
    pub fn with_stored_best(best: u32) -> Self {
        Self {
            stored_best: Some(best),
            ..Self::default()
        }
    }

    pub fn submit_attempts(&self) -> usize {
        self.submit_attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ScoreRepository for FailingScoreRepository {
    async fn get_best_score(&self, _player_id: &str) -> Result<Option<u32>, ScoreError> {
        match self.stored_best {
            Some(best) => Ok(Some(best)),
            None => Err(unavailable()),
        }
    }

    async fn submit_score(&self, _record: &ScoreRecord) -> Result<(), ScoreError> {
        self.submit_attempts.fetch_add(1, Ordering::SeqCst);
        Err(unavailable())
    }

    async fn list_leaderboard(
        &self,
        _window: TimeWindow,
    ) -> Result<Vec<LeaderboardEntry>, ScoreError> {
        Err(unavailable())
    }
}
