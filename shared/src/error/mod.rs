//! Unified error system for the loyalty service
//!
//! This module provides:
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Rich error type with codes, messages, and details
//! - [`ApiResponse`]: Unified API response format
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Authentication / session errors
//! - 2xxx: Permission errors
//! - 3xxx: Brand (tenant) errors
//! - 4xxx: Wallet errors
//! - 5xxx: Voucher / rewards errors
//! - 6xxx: Campaign errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ApiResponse};
//!
//! let err = AppError::new(ErrorCode::BrandNotFound);
//!
//! let err = AppError::validation("Enter a valid 10-digit mobile number.")
//!     .with_detail("field", "phone");
//!
//! let response = ApiResponse::<()>::error(&err);
//! assert_eq!(response.code, Some(2));
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError, AppResult};
