mod errors;
pub mod leaderboard;
pub mod models;
pub mod repository;

pub use errors::ScoreError;
pub use leaderboard::{aggregate_leaderboard, LEADERBOARD_SIZE};
pub use models::*;
pub use repository::{InMemoryScoreRepository, PostgresScoreRepository, ScoreRepository};
