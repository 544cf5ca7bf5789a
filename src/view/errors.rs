use thiserror::Error;

#[derive(Debug, Error)]
pub enum ViewError {
    #[error("View error: {0}")]
    Io(#[from] std::io::Error),
    #[error("View error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("View error: {0}")]
    Csv(#[from] csv::Error)
}
