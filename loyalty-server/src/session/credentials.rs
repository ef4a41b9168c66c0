//! Demo credential checks
//!
//! Acceptance is a fixed table. Nothing here is real authentication.

use serde::Deserialize;
use shared::models::{
    Child, Dietary, MaritalStatus, Preferences, Role, Tier, User,
};
use shared::util::snowflake_id;
use shared::{AppError, AppResult, ErrorCode};
use validator::Validate;

use crate::utils::validation::{
    MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_required_text,
};

/// (role, login id, password)
const PASSWORD_TABLE: &[(Role, &str, &str)] = &[
    (Role::SuperAdmin, "super", "123"),
    (Role::BrandAdmin, "admin", "123"),
    (Role::Customer, "customer", "123"),
];

/// The only code OTP verification accepts
pub const DEMO_OTP: &str = "1234";

pub const MIN_PHONE_DIGITS: usize = 10;

/// Check a password login for the selected role. Login ids are case-insensitive.
pub fn check_password(role: Role, login_id: &str, password: &str) -> AppResult<()> {
    let accepted = PASSWORD_TABLE.iter().any(|(r, id, pwd)| {
        *r == role && login_id.trim().eq_ignore_ascii_case(id) && password == *pwd
    });
    if accepted {
        Ok(())
    } else {
        Err(AppError::invalid_credentials())
    }
}

/// Phone accepted for OTP: at least ten digits once separators are dropped
pub fn normalize_phone(phone: &str) -> AppResult<String> {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    let only_separators = phone
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '+' | '(' | ')'));
    if digits.len() < MIN_PHONE_DIGITS || !only_separators {
        return Err(AppError::new(ErrorCode::PhoneInvalid).with_detail("phone", phone));
    }
    Ok(digits)
}

pub fn check_otp(code: &str) -> AppResult<()> {
    if code.trim() == DEMO_OTP {
        Ok(())
    } else {
        Err(AppError::new(ErrorCode::VerificationCodeInvalid))
    }
}

// =============================================================================
// Signup
// =============================================================================

/// Three-step signup form (basics, family, lifestyle)
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    #[validate(length(min = 1, max = 200, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Enter a valid email"), length(max = 254))]
    pub email: String,
    #[validate(length(min = 10, max = 100, message = "Enter a valid 10-digit mobile number."))]
    pub mobile: String,
    #[validate(length(min = 1, message = "Birthday is required"))]
    pub birthday: String,

    #[serde(default)]
    pub marital_status: Option<MaritalStatus>,
    #[serde(default)]
    pub anniversary: Option<String>,
    #[serde(default)]
    pub spouse_birthday: Option<String>,
    #[serde(default)]
    pub children_dobs: Vec<String>,

    #[serde(default)]
    pub dietary: Dietary,
    #[serde(default)]
    pub interests: Vec<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl SignupRequest {
    /// Shared length limits and the phone rule
    pub fn check_limits(&self) -> AppResult<()> {
        validate_required_text(&self.name, "name", MAX_NAME_LEN)?;
        validate_required_text(&self.email, "email", MAX_EMAIL_LEN)?;
        validate_required_text(&self.birthday, "birthday", MAX_SHORT_TEXT_LEN)?;
        normalize_phone(&self.mobile)?;
        Ok(())
    }

    /// New customer identity. Family fields are kept only when married.
    pub fn into_user(self) -> User {
        let married = self.marital_status == Some(MaritalStatus::Married);
        let children = self
            .children_dobs
            .into_iter()
            .filter(|dob| !dob.trim().is_empty())
            .enumerate()
            .map(|(i, dob)| Child {
                id: format!("c{}", i + 1),
                dob,
            })
            .collect();

        User {
            id: format!("u{}", snowflake_id()),
            name: self.name.trim().to_string(),
            username: None,
            email: self.email.trim().to_string(),
            mobile: self.mobile,
            role: Role::Customer,
            brand_id: None,
            birthday: Some(self.birthday),
            anniversary: if married { non_empty(self.anniversary) } else { None },
            marital_status: self.marital_status,
            spouse_birthday: if married {
                non_empty(self.spouse_birthday)
            } else {
                None
            },
            children,
            preferences: Some(Preferences {
                dietary: self.dietary,
                interests: self.interests,
            }),
            tier: Tier::Silver,
            profile_image: None,
            profile_complete: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_table() {
        check_password(Role::SuperAdmin, "super", "123").unwrap();
        check_password(Role::SuperAdmin, "SUPER", "123").unwrap();
        check_password(Role::BrandAdmin, "admin", "123").unwrap();
        check_password(Role::Customer, " customer ", "123").unwrap();

        let err = check_password(Role::Customer, "super", "123").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidCredentials);
        assert_eq!(err.message, "Invalid ID or Password. Try super/123.");
        assert!(check_password(Role::SuperAdmin, "super", "1234").is_err());
    }

    #[test]
    fn test_phone_rules() {
        assert_eq!(normalize_phone("98765 43210").unwrap(), "9876543210");
        assert_eq!(normalize_phone("+91-9876543210").unwrap(), "919876543210");
        let err = normalize_phone("12345").unwrap_err();
        assert_eq!(err.code, ErrorCode::PhoneInvalid);
        assert!(normalize_phone("98765abc43210").is_err());
    }

    #[test]
    fn test_otp() {
        check_otp("1234").unwrap();
        let err = check_otp("0000").unwrap_err();
        assert_eq!(err.code, ErrorCode::VerificationCodeInvalid);
        assert_eq!(err.message, "Invalid OTP. Use 1234.");
    }

    fn signup(json: &str) -> SignupRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_signup_builds_customer() {
        let req = signup(
            r#"{"name":"Asha","email":"asha@example.com","mobile":"9123456780","birthday":"1994-02-01",
                "maritalStatus":"MARRIED","anniversary":"2019-11-30","childrenDobs":["2021-05-05",""],
                "dietary":"NON_VEG","interests":["seafood","wine"]}"#,
        );
        assert!(req.validate().is_ok());
        req.check_limits().unwrap();
        let user = req.into_user();
        assert_eq!(user.role, Role::Customer);
        assert_eq!(user.anniversary.as_deref(), Some("2019-11-30"));
        assert_eq!(user.children.len(), 1);
        assert_eq!(user.preferences.unwrap().dietary, Dietary::NonVeg);
        assert!(user.profile_complete);
    }

    #[test]
    fn test_single_signup_drops_family_dates() {
        let user = signup(
            r#"{"name":"Ravi","email":"ravi@example.com","mobile":"9123456780","birthday":"1990-01-01",
                "maritalStatus":"SINGLE","anniversary":"2019-11-30"}"#,
        )
        .into_user();
        assert!(user.anniversary.is_none());
    }

    #[test]
    fn test_signup_requires_basics() {
        let req = signup(r#"{"name":"","email":"nope","mobile":"123","birthday":""}"#);
        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("mobile"));
        assert!(fields.contains_key("birthday"));
    }
}
