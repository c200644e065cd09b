use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Item at position {index} has an empty id")]
    EmptyId { index: usize },

    #[error("Duplicate item id: {0}")]
    DuplicateId(String),
}
