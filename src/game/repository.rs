use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use uuid::Uuid;

use super::models::GamePhase;
use super::session::GameSession;
use crate::scores::PlayerIdentity;

/// A live session together with the player who owns it
#[derive(Debug, Clone)]
pub struct StoredGame {
    pub session: GameSession,
    pub identity: Option<PlayerIdentity>,
    /// Refreshed on every state change
    pub last_activity: Instant,
}

impl StoredGame {
    pub fn new(session: GameSession, identity: Option<PlayerIdentity>) -> Self {
        Self {
            session,
            identity,
            last_activity: Instant::now(),
        }
    }

    /// Idle past `inactivity`, or finished and idle past `finished_ttl`
    pub fn is_stale(&self, inactivity: Duration, finished_ttl: Duration) -> bool {
        let idle = self.last_activity.elapsed();
        idle > inactivity || (self.session.phase() == GamePhase::Result && idle > finished_ttl)
    }
}

pub struct GameRepository {
    /// A mapping from game ID to live session
    games: Arc<RwLock<HashMap<Uuid, StoredGame>>>,
}

impl Default for GameRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl GameRepository {
    pub fn new() -> Self {
        Self {
            games: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn insert_game(&self, game_id: Uuid, game: StoredGame) {
        let mut games = self.games.write().await;
        games.insert(game_id, game);
    }

    pub async fn get_game(&self, game_id: Uuid) -> Option<StoredGame> {
        let games = self.games.read().await;
        games.get(&game_id).cloned()
    }

    /// Applies `update` to the stored game under the write lock and marks
    /// it active. Returns `None` when the game does not exist.
    pub async fn update_game<T, F>(&self, game_id: Uuid, update: F) -> Option<T>
    where
        F: FnOnce(&mut StoredGame) -> T,
    {
        let mut games = self.games.write().await;
        games.get_mut(&game_id).map(|game| {
            game.last_activity = Instant::now();
            update(game)
        })
    }

    /// Drops every stale game in one pass and returns how many were removed
    pub async fn remove_stale_games(&self, inactivity: Duration, finished_ttl: Duration) -> usize {
        let mut games = self.games.write().await;
        let before = games.len();
        games.retain(|_, game| !game.is_stale(inactivity, finished_ttl));
        before - games.len()
    }

    pub async fn game_count(&self) -> usize {
        self.games.read().await.len()
    }
}
