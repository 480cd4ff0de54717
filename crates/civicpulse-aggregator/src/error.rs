use thiserror::Error;

#[derive(Debug, Error)]
pub enum AggregatorError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("all platform adapters failed for query \"{0}\"")]
    AllSourcesFailed(String),
}
