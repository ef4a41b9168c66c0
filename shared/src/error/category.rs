//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the leading digit of the error code:
/// - 0xxx: General errors
/// - 1xxx: Authentication / session errors
/// - 2xxx: Permission errors
/// - 3xxx: Brand errors
/// - 4xxx: Wallet errors
/// - 5xxx: Rewards errors
/// - 6xxx: Campaign errors
/// - 7xxx and above: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Authentication errors (1xxx)
    Auth,
    /// Permission errors (2xxx)
    Permission,
    /// Brand errors (3xxx)
    Brand,
    /// Wallet errors (4xxx)
    Wallet,
    /// Rewards errors (5xxx)
    Rewards,
    /// Campaign errors (6xxx)
    Campaign,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Auth,
            2000..3000 => Self::Permission,
            3000..4000 => Self::Brand,
            4000..5000 => Self::Wallet,
            5000..6000 => Self::Rewards,
            6000..7000 => Self::Campaign,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Auth => "auth",
            Self::Permission => "permission",
            Self::Brand => "brand",
            Self::Wallet => "wallet",
            Self::Rewards => "rewards",
            Self::Campaign => "campaign",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_code() {
        assert_eq!(ErrorCategory::from_code(0), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(999), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(1001), ErrorCategory::Auth);
        assert_eq!(ErrorCategory::from_code(2001), ErrorCategory::Permission);
        assert_eq!(ErrorCategory::from_code(3101), ErrorCategory::Brand);
        assert_eq!(ErrorCategory::from_code(4001), ErrorCategory::Wallet);
        assert_eq!(ErrorCategory::from_code(5001), ErrorCategory::Rewards);
        assert_eq!(ErrorCategory::from_code(6001), ErrorCategory::Campaign);
        assert_eq!(ErrorCategory::from_code(9001), ErrorCategory::System);
        assert_eq!(ErrorCategory::from_code(10000), ErrorCategory::System);
    }

    #[test]
    fn test_error_code_category() {
        assert_eq!(ErrorCode::Success.category(), ErrorCategory::General);
        assert_eq!(ErrorCode::InvalidCredentials.category(), ErrorCategory::Auth);
        assert_eq!(
            ErrorCode::BrandScopeDenied.category(),
            ErrorCategory::Permission
        );
        assert_eq!(ErrorCode::BrandNotFound.category(), ErrorCategory::Brand);
        assert_eq!(ErrorCode::NothingToSettle.category(), ErrorCategory::Wallet);
        assert_eq!(ErrorCode::VoucherExpired.category(), ErrorCategory::Rewards);
        assert_eq!(
            ErrorCode::OperationCancelled.category(),
            ErrorCategory::System
        );
    }

    #[test]
    fn test_category_serde() {
        let json = serde_json::to_string(&ErrorCategory::Brand).unwrap();
        assert_eq!(json, "\"brand\"");

        let category: ErrorCategory = serde_json::from_str("\"rewards\"").unwrap();
        assert_eq!(category, ErrorCategory::Rewards);
    }
}
