use thiserror::Error;

pub type Result<T> = std::result::Result<T, AnalyticsError>;

#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// Rejected before any storage access: bad period, bad mode, out-of-range level.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The lookup key was valid but the backing table has no row for it.
    #[error("not found: {0}")]
    NotFound(String),

    /// Any fault from the external store; never retried here.
    #[error("storage failure: {0}")]
    Storage(#[from] sqlx::Error),
}
