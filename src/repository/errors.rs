use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("backend returned status {status}")]
    Status { status: u16 },

    #[error("failed to decode backend response: {0}")]
    Deserialization(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
