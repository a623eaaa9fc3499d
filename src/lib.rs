pub mod api;
pub mod config;
pub mod domain;
pub mod models;
pub mod store;

// Re-export commonly used types
pub use models::{Item, PointsResponse, ProcessReceiptResponse, Receipt};

pub use domain::{score, score_breakdown, validate, PointsBreakdown, ValidationError};

pub use store::{ReceiptId, ReceiptStore};

pub use config::{ConfigError, LogFormat, ServerConfig};
