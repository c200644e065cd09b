// Public API
pub use models::{
    AnswerRecord, DifficultyTier, GameOver, GamePhase, Round, CANDIDATES_PER_ROUND, TOTAL_ROUNDS,
};
pub use cleanup_task::{start_cleanup_task, CleanupConfig};
pub use repository::{GameRepository, StoredGame};
pub use selector::{next_round, pick_target, select_candidates};
pub use service::GameService;
pub use session::GameSession;

// Internal modules
mod cleanup_task;
mod models;
mod repository;
pub mod selector;
mod service;
mod session;
