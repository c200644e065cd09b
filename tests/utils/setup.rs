#![allow(dead_code)] // Test utilities may not all be used in every test

use std::sync::Arc;

use fontgame::{
    catalog::Catalog,
    scores::{InMemoryScoreRepository, ScoreRepository},
    AppState, GameService,
};

use super::CatalogBuilder;

// ============================================================================
// Test Setup Infrastructure
// ============================================================================

pub struct TestSetup {
    pub game_service: Arc<GameService>,
}

impl TestSetup {
    pub fn app_state(&self) -> AppState {
        AppState::new(Arc::clone(&self.game_service))
    }
}

pub struct TestSetupBuilder {
    catalog: Option<Catalog>,
    score_repository: Option<Arc<dyn ScoreRepository>>,
}

impl TestSetupBuilder {
    pub fn new() -> Self {
        Self {
            catalog: None,
            score_repository: None,
        }
    }

    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn with_score_repository(mut self, repo: Arc<dyn ScoreRepository>) -> Self {
        self.score_repository = Some(repo);
        self
    }

    /// Defaults: 24 numbered fonts and an in-memory score gateway
    pub fn build(self) -> TestSetup {
        let catalog = self
            .catalog
            .unwrap_or_else(|| CatalogBuilder::new().with_numbered_items(24).build());
        let score_repository = self
            .score_repository
            .unwrap_or_else(|| Arc::new(InMemoryScoreRepository::new()));

        TestSetup {
            game_service: Arc::new(GameService::new(Arc::new(catalog), score_repository)),
        }
    }
}
