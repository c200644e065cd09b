pub mod actions;
pub mod catalog_builders;
pub mod mocks;
pub mod setup;

// Re-export main utilities for use by test files
#[allow(unused_imports)]
pub use actions::{answer_correctly, answer_wrong};
pub use catalog_builders::CatalogBuilder;
#[allow(unused_imports)]
pub use mocks::FailingScoreRepository;
#[allow(unused_imports)]
pub use setup::{TestSetup, TestSetupBuilder};
