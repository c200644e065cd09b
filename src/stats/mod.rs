pub mod aggregator;
pub mod models;

pub use aggregator::{aggregate, breakdown, percentage};
pub use models::*;
