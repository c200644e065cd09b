use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<sqlx::Error> for ScoreError {
    fn from(err: sqlx::Error) -> Self {
        ScoreError::Repository(err.to_string())
    }
}
