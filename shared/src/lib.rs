//! Shared types for the loyalty platform
//!
//! Models, error types, navigation descriptors and loyalty calculations
//! used by the server and any client rendering its screens.

pub mod error;
pub mod loyalty;
pub mod models;
pub mod navigation;
pub mod util;

// Re-exports
pub use axum::{Json, body};
pub use error::{ApiResponse, AppError, AppResult, ErrorCode};
pub use http;
pub use serde::{Deserialize, Serialize};
