// Library crate for the font recognition game server
// This file exposes the public API for integration tests

pub mod api;
pub mod catalog;
pub mod config;
pub mod game;
pub mod scores;
pub mod shared;
pub mod stats;

// Re-export commonly used types for easier access in tests
pub use api::router;
pub use catalog::{Catalog, CatalogError, Item};
pub use config::{AppConfig, ConfigError};
pub use game::{GamePhase, GameService, GameSession};
pub use scores::{InMemoryScoreRepository, PlayerIdentity, ScoreRepository};
pub use shared::{AppError, AppState};
pub use stats::GameReport;
