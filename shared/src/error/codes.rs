//! Unified error codes
//!
//! Error codes are shared by the server and any client rendering the
//! screens. They are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication / session errors
//! - 2xxx: Permission errors
//! - 3xxx: Brand (tenant) errors
//! - 4xxx: Wallet errors
//! - 5xxx: Voucher / rewards errors
//! - 6xxx: Campaign errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Auth ====================
    /// No identity attached to the session
    NotAuthenticated = 1001,
    /// Invalid login id or password
    InvalidCredentials = 1002,
    /// Session has expired (idle sweep)
    SessionExpired = 1005,
    /// Session id unknown or malformed
    SessionNotFound = 1008,
    /// Phone number is not a valid mobile number
    PhoneInvalid = 1009,
    /// One-time code was not requested for this session
    OtpNotRequested = 1010,
    /// One-time code mismatch
    VerificationCodeInvalid = 1011,
    /// Already logged in
    AlreadyAuthenticated = 1012,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,
    /// Specific role required
    RoleRequired = 2002,
    /// Super admin role required
    AdminRequired = 2003,
    /// Brand admin acting outside their own brand
    BrandScopeDenied = 2004,

    // ==================== 3xxx: Brand ====================
    /// Brand not found
    BrandNotFound = 3001,
    /// Brand id already exists
    BrandAlreadyExists = 3002,
    /// Unknown brand template
    BrandTemplateNotFound = 3003,
    /// Feature disabled for this brand
    FeatureNotAvailable = 3004,
    /// Landing page entry (offer, product, step, image) not found
    LandingPageItemNotFound = 3101,
    /// Landing page field out of allowed range
    LandingPageInvalid = 3102,

    // ==================== 4xxx: Wallet ====================
    /// Top-up amount must be positive
    TopUpAmountInvalid = 4001,
    /// Settlement row not found
    SettlementNotFound = 4002,
    /// Nothing pending to pay out
    NothingToSettle = 4003,
    /// Not enough wallet balance
    InsufficientBalance = 4004,

    // ==================== 5xxx: Rewards ====================
    /// Voucher not found
    VoucherNotFound = 5001,
    /// Voucher has expired
    VoucherExpired = 5002,
    /// Voucher was already redeemed
    VoucherAlreadyRedeemed = 5003,
    /// Redemption code does not match any active voucher
    RedemptionCodeInvalid = 5004,
    /// Not enough points for the reward
    InsufficientPoints = 5005,

    // ==================== 6xxx: Campaign ====================
    /// Campaign message is empty
    CampaignMessageEmpty = 6001,
    /// Campaign targets nobody
    CampaignAudienceEmpty = 6002,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Operation timeout
    TimeoutError = 9004,
    /// Configuration error
    ConfigError = 9005,
    /// Pending operation cancelled (logout or shutdown)
    OperationCancelled = 9006,
    /// Routing table failed validation
    RouteTableInvalid = 9007,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Auth
            ErrorCode::NotAuthenticated => "Please log in first",
            ErrorCode::InvalidCredentials => "Invalid ID or Password. Try super/123.",
            ErrorCode::SessionExpired => "Session has expired",
            ErrorCode::SessionNotFound => "Session not found",
            ErrorCode::PhoneInvalid => "Enter a valid 10-digit mobile number.",
            ErrorCode::OtpNotRequested => "Request an OTP first",
            ErrorCode::VerificationCodeInvalid => "Invalid OTP. Use 1234.",
            ErrorCode::AlreadyAuthenticated => "Already logged in",

            // Permission
            ErrorCode::PermissionDenied => "Permission denied",
            ErrorCode::RoleRequired => "Specific role is required",
            ErrorCode::AdminRequired => "Super admin role is required",
            ErrorCode::BrandScopeDenied => "Brand admins can only manage their own brand",

            // Brand
            ErrorCode::BrandNotFound => "Brand not found",
            ErrorCode::BrandAlreadyExists => "Brand already exists",
            ErrorCode::BrandTemplateNotFound => "Brand template not found",
            ErrorCode::FeatureNotAvailable => "Feature is not enabled for this brand",
            ErrorCode::LandingPageItemNotFound => "Landing page item not found",
            ErrorCode::LandingPageInvalid => "Landing page value is invalid",

            // Wallet
            ErrorCode::TopUpAmountInvalid => "Top-up amount must be greater than zero",
            ErrorCode::SettlementNotFound => "Settlement not found",
            ErrorCode::NothingToSettle => "No pending settlements",
            ErrorCode::InsufficientBalance => "Insufficient wallet balance",

            // Rewards
            ErrorCode::VoucherNotFound => "Voucher not found",
            ErrorCode::VoucherExpired => "Voucher has expired",
            ErrorCode::VoucherAlreadyRedeemed => "Voucher has already been redeemed",
            ErrorCode::RedemptionCodeInvalid => "Invalid or expired code",
            ErrorCode::InsufficientPoints => "Not enough points",

            // Campaign
            ErrorCode::CampaignMessageEmpty => "Campaign message is empty",
            ErrorCode::CampaignAudienceEmpty => "Campaign audience is empty",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::TimeoutError => "Operation timed out",
            ErrorCode::ConfigError => "Configuration error",
            ErrorCode::OperationCancelled => "Operation was cancelled",
            ErrorCode::RouteTableInvalid => "Routing table is invalid",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Auth
            1001 => Ok(ErrorCode::NotAuthenticated),
            1002 => Ok(ErrorCode::InvalidCredentials),
            1005 => Ok(ErrorCode::SessionExpired),
            1008 => Ok(ErrorCode::SessionNotFound),
            1009 => Ok(ErrorCode::PhoneInvalid),
            1010 => Ok(ErrorCode::OtpNotRequested),
            1011 => Ok(ErrorCode::VerificationCodeInvalid),
            1012 => Ok(ErrorCode::AlreadyAuthenticated),

            // Permission
            2001 => Ok(ErrorCode::PermissionDenied),
            2002 => Ok(ErrorCode::RoleRequired),
            2003 => Ok(ErrorCode::AdminRequired),
            2004 => Ok(ErrorCode::BrandScopeDenied),

            // Brand
            3001 => Ok(ErrorCode::BrandNotFound),
            3002 => Ok(ErrorCode::BrandAlreadyExists),
            3003 => Ok(ErrorCode::BrandTemplateNotFound),
            3004 => Ok(ErrorCode::FeatureNotAvailable),
            3101 => Ok(ErrorCode::LandingPageItemNotFound),
            3102 => Ok(ErrorCode::LandingPageInvalid),

            // Wallet
            4001 => Ok(ErrorCode::TopUpAmountInvalid),
            4002 => Ok(ErrorCode::SettlementNotFound),
            4003 => Ok(ErrorCode::NothingToSettle),
            4004 => Ok(ErrorCode::InsufficientBalance),

            // Rewards
            5001 => Ok(ErrorCode::VoucherNotFound),
            5002 => Ok(ErrorCode::VoucherExpired),
            5003 => Ok(ErrorCode::VoucherAlreadyRedeemed),
            5004 => Ok(ErrorCode::RedemptionCodeInvalid),
            5005 => Ok(ErrorCode::InsufficientPoints),

            // Campaign
            6001 => Ok(ErrorCode::CampaignMessageEmpty),
            6002 => Ok(ErrorCode::CampaignAudienceEmpty),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9004 => Ok(ErrorCode::TimeoutError),
            9005 => Ok(ErrorCode::ConfigError),
            9006 => Ok(ErrorCode::OperationCancelled),
            9007 => Ok(ErrorCode::RouteTableInvalid),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
