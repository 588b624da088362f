use thiserror::Error;

/// Boundary errors only: the geometric core itself never fails, it skips
/// degenerate candidates.
#[derive(Error, Debug)]
pub enum TeardropError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
