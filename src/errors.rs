use thiserror::Error;

/// Error type for report configuration failures. The aggregation services
/// themselves are total over well-formed input; only filter construction
/// can fail.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Invalid date range: {0}")]
    InvalidRange(String),
}

pub type Result<T> = std::result::Result<T, ReportError>;
