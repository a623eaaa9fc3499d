// Domain layer - validation and scoring with no HTTP concerns

pub mod amount;
pub mod scoring;
pub mod validation;

/// Why a receipt was rejected. Only the first failing rule is reported.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Missing required fields")]
    MissingFields,

    #[error("Invalid date format: '{0}'")]
    InvalidDate(String),

    #[error("Invalid time format: '{0}'")]
    InvalidTime(String),

    #[error("Invalid total format: '{0}'")]
    InvalidTotal(String),

    #[error("Invalid item at index {index}: {reason}")]
    InvalidItem { index: usize, reason: String },
}

pub use scoring::{score, score_breakdown, PointsBreakdown};
pub use validation::validate;
