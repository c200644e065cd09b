use std::sync::Arc;
use std::time::Duration;
use tokio::time::interval;
use tracing::{debug, info, instrument};

use super::service::GameService;

/// Configuration for the session cleanup task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanupConfig {
    /// How often the task runs
    pub cleanup_interval: Duration,
    /// How long any session may sit untouched before it is dropped
    pub inactivity_threshold: Duration,
    /// How long a finished session is kept for its results screen
    pub finished_threshold: Duration,
}

impl Default for CleanupConfig {
    fn default() -> Self {
        Self {
            cleanup_interval: Duration::from_secs(5 * 60), // 5 minutes
            inactivity_threshold: Duration::from_secs(2 * 60 * 60), // 2 hours
            finished_threshold: Duration::from_secs(30 * 60), // 30 minutes
        }
    }
}

/// Starts the background task that periodically evicts stale sessions.
/// Runs until the runtime shuts down.
#[instrument(skip(game_service))]
pub async fn start_cleanup_task(game_service: Arc<GameService>, config: CleanupConfig) {
    info!(
        cleanup_interval_secs = config.cleanup_interval.as_secs(),
        inactivity_threshold_secs = config.inactivity_threshold.as_secs(),
        finished_threshold_secs = config.finished_threshold.as_secs(),
        "Starting session cleanup background task"
    );

    let mut cleanup_interval = interval(config.cleanup_interval);

    loop {
        cleanup_interval.tick().await;
        run_cleanup(&game_service, &config).await;
    }
}

/// One cleanup pass
async fn run_cleanup(game_service: &GameService, config: &CleanupConfig) -> usize {
    let removed = game_service
        .remove_stale_games(config.inactivity_threshold, config.finished_threshold)
        .await;

    if removed > 0 {
        let remaining = game_service.live_game_count().await;
        info!(
            removed,
            remaining,
            "Session cleanup completed"
        );
    } else {
        debug!("No stale sessions to clean up");
    }

    removed
}
