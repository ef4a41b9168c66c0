//! Navigation types
//!
//! Views are the identifiers a client navigates to; screens are what the
//! routing table resolves a (role, view) pair into.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::Role;

// =============================================================================
// View
// =============================================================================

/// Navigation target
///
/// Serialized as its kebab-case id (`landing-page-view`). Ids the table
/// does not know are kept verbatim in [`View::Other`] so they can reach the
/// under-construction fallback instead of failing to parse.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum View {
    Dashboard,
    Brands,
    LandingPage,
    LandingPageView,
    CreateBrand,
    Customers,
    Campaigns,
    Analytics,
    Settings,
    Wallet,
    Profile,
    Redemptions,
    Subscriptions,
    Vouchers,
    Rewards,
    BrandDirectory,
    Other(String),
}

impl View {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Brands => "brands",
            Self::LandingPage => "landing-page",
            Self::LandingPageView => "landing-page-view",
            Self::CreateBrand => "create-brand",
            Self::Customers => "customers",
            Self::Campaigns => "campaigns",
            Self::Analytics => "analytics",
            Self::Settings => "settings",
            Self::Wallet => "wallet",
            Self::Profile => "profile",
            Self::Redemptions => "redemptions",
            Self::Subscriptions => "subscriptions",
            Self::Vouchers => "vouchers",
            Self::Rewards => "rewards",
            Self::BrandDirectory => "brand-directory",
            Self::Other(id) => id,
        }
    }
}

impl From<String> for View {
    fn from(id: String) -> Self {
        match id.as_str() {
            "dashboard" => Self::Dashboard,
            "brands" => Self::Brands,
            "landing-page" => Self::LandingPage,
            "landing-page-view" => Self::LandingPageView,
            "create-brand" => Self::CreateBrand,
            "customers" => Self::Customers,
            "campaigns" => Self::Campaigns,
            "analytics" => Self::Analytics,
            "settings" => Self::Settings,
            "wallet" => Self::Wallet,
            "profile" => Self::Profile,
            "redemptions" => Self::Redemptions,
            "subscriptions" => Self::Subscriptions,
            "vouchers" => Self::Vouchers,
            "rewards" => Self::Rewards,
            "brand-directory" => Self::BrandDirectory,
            _ => Self::Other(id),
        }
    }
}

impl From<View> for String {
    fn from(view: View) -> Self {
        match view {
            View::Other(id) => id,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for View {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(View::from(s.to_string()))
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Screen
// =============================================================================

/// Which customer directory a screen lists
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DataScope {
    Global,
    Brand { brand_id: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OfferKind {
    Subscriptions,
    Vouchers,
}

/// Screen descriptor resolved from the session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum Screen {
    /// Anonymous visitors only ever see this
    PublicLanding { brand_id: String },

    SuperAdminDashboard,
    ManageBrands,
    CreateBrand,
    Campaigns,
    Settings,

    BrandAdminDashboard { brand_id: String },
    LandingPageEditor { brand_id: String },
    LandingPagePreview { brand_id: String },
    Redemptions { brand_id: String },

    CustomerDashboard,
    Offers { kind: OfferKind },
    Rewards,
    BrandDirectory,

    Customers { scope: DataScope },
    Analytics { scope: DataScope },
    Wallet { role: Role },
    Profile,

    /// Fallback for (role, view) pairs without a route
    UnderConstruction { view: String, message: String },
}

impl Screen {
    pub fn under_construction(view: &View) -> Self {
        Self::UnderConstruction {
            view: view.to_string(),
            message: format!("View under construction: {}", view),
        }
    }

    /// Brand the screen is bound to, if any
    pub fn brand_id(&self) -> Option<&str> {
        match self {
            Self::PublicLanding { brand_id }
            | Self::BrandAdminDashboard { brand_id }
            | Self::LandingPageEditor { brand_id }
            | Self::LandingPagePreview { brand_id }
            | Self::Redemptions { brand_id } => Some(brand_id),
            Self::Customers {
                scope: DataScope::Brand { brand_id },
            }
            | Self::Analytics {
                scope: DataScope::Brand { brand_id },
            } => Some(brand_id),
            _ => None,
        }
    }
}

/// Sidebar entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub view: View,
    pub label: String,
}
