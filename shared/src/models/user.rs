//! User Model
//!
//! Identity attached to a session after a (mocked) login or signup.

use serde::{Deserialize, Serialize};

/// Platform role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    SuperAdmin,
    BrandAdmin,
    Customer,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::SuperAdmin, Role::BrandAdmin, Role::Customer];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SuperAdmin => "SUPER_ADMIN",
            Self::BrandAdmin => "BRAND_ADMIN",
            Self::Customer => "CUSTOMER",
        }
    }

    /// Sidebar caption, e.g. `SUPER ADMIN`
    pub fn label(&self) -> &'static str {
        match self {
            Self::SuperAdmin => "SUPER ADMIN",
            Self::BrandAdmin => "BRAND ADMIN",
            Self::Customer => "CUSTOMER",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Membership tier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Tier {
    #[default]
    Silver,
    Gold,
    Platinum,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Silver, Tier::Gold, Tier::Platinum];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MaritalStatus {
    Single,
    Married,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Dietary {
    #[default]
    Veg,
    NonVeg,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Child {
    pub id: String,
    /// ISO date (YYYY-MM-DD)
    pub dob: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub dietary: Dietary,
    #[serde(default)]
    pub interests: Vec<String>,
}

/// User entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    pub email: String,
    pub mobile: String,
    pub role: Role,
    /// Required for brand admins
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anniversary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marital_status: Option<MaritalStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spouse_birthday: Option<String>,
    #[serde(default)]
    pub children: Vec<Child>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferences: Option<Preferences>,
    pub tier: Tier,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    #[serde(default)]
    pub profile_complete: bool,
}

impl User {
    /// Brand admins must carry the brand they administer
    pub fn has_valid_scope(&self) -> bool {
        self.role != Role::BrandAdmin || self.brand_id.is_some()
    }

    /// Avatar URL, generated from the id when no image was uploaded
    pub fn avatar_url(&self) -> String {
        self.profile_image
            .clone()
            .unwrap_or_else(|| format!("https://picsum.photos/seed/{}/100/100", self.id))
    }

    /// Apply a profile edit. Saving a profile marks it complete.
    pub fn apply(&mut self, update: UserProfileUpdate) {
        if let Some(v) = update.name {
            self.name = v;
        }
        if let Some(v) = update.username {
            self.username = Some(v);
        }
        if let Some(v) = update.email {
            self.email = v;
        }
        if let Some(v) = update.mobile {
            self.mobile = v;
        }
        if let Some(v) = update.birthday {
            self.birthday = Some(v);
        }
        if let Some(v) = update.anniversary {
            self.anniversary = Some(v);
        }
        if let Some(v) = update.marital_status {
            self.marital_status = Some(v);
        }
        if let Some(v) = update.spouse_birthday {
            self.spouse_birthday = Some(v);
        }
        if let Some(v) = update.children {
            self.children = v;
        }
        if let Some(v) = update.preferences {
            self.preferences = Some(v);
        }
        if let Some(v) = update.profile_image {
            self.profile_image = Some(v);
        }
        self.profile_complete = true;
    }
}

/// Profile edit payload
///
/// Role, tier and brand scope are not editable from the profile screen.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfileUpdate {
    pub name: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub mobile: Option<String>,
    pub birthday: Option<String>,
    pub anniversary: Option<String>,
    pub marital_status: Option<MaritalStatus>,
    pub spouse_birthday: Option<String>,
    pub children: Option<Vec<Child>>,
    pub preferences: Option<Preferences>,
    pub profile_image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_user(role: Role, brand_id: Option<&str>) -> User {
        User {
            id: "u9".into(),
            name: "Test".into(),
            username: None,
            email: "t@example.com".into(),
            mobile: "7777777777".into(),
            role,
            brand_id: brand_id.map(str::to_string),
            birthday: None,
            anniversary: None,
            marital_status: None,
            spouse_birthday: None,
            children: Vec::new(),
            preferences: None,
            tier: Tier::Silver,
            profile_image: None,
            profile_complete: false,
        }
    }

    #[test]
    fn test_brand_admin_requires_brand() {
        assert!(!make_user(Role::BrandAdmin, None).has_valid_scope());
        assert!(make_user(Role::BrandAdmin, Some("b1")).has_valid_scope());
        assert!(make_user(Role::Customer, None).has_valid_scope());
    }

    #[test]
    fn test_profile_update_merges_and_completes() {
        let mut user = make_user(Role::Customer, None);
        user.apply(UserProfileUpdate {
            anniversary: Some("2020-02-14".into()),
            marital_status: Some(MaritalStatus::Married),
            ..Default::default()
        });
        assert_eq!(user.anniversary.as_deref(), Some("2020-02-14"));
        assert_eq!(user.name, "Test");
        assert!(user.profile_complete);
    }

    #[test]
    fn test_avatar_fallback() {
        let user = make_user(Role::Customer, None);
        assert_eq!(user.avatar_url(), "https://picsum.photos/seed/u9/100/100");
    }

    #[test]
    fn test_wire_format() {
        let json = serde_json::to_value(make_user(Role::BrandAdmin, Some("b1"))).unwrap();
        assert_eq!(json["role"], "BRAND_ADMIN");
        assert_eq!(json["brandId"], "b1");
        assert_eq!(json["tier"], "SILVER");
        assert!(json.get("birthday").is_none());
    }
}
