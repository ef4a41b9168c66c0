//! Brand Model
//!
//! A brand is one tenant of the loyalty platform (restaurant, salon, hotel).

use serde::{Deserialize, Serialize};

use super::landing_page::{LandingPage, LandingPagePatch};
use crate::loyalty::BonusSlab;

/// Fallback hex when a theme colour is not in the palette
pub const DEFAULT_PRIMARY_HEX: &str = "#4f46e5";

/// Selectable theme colours: (class name, label, hex)
pub const THEME_COLORS: &[(&str, &str, &str)] = &[
    ("indigo-600", "Indigo", "#4f46e5"),
    ("emerald-600", "Emerald", "#059669"),
    ("sky-600", "Sky", "#0284c7"),
    ("amber-600", "Amber", "#d97706"),
    ("rose-600", "Rose", "#e11d48"),
    ("slate-800", "Slate", "#1e293b"),
    ("violet-600", "Violet", "#7c3aed"),
];

/// Business vertical of a brand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BrandKind {
    Restaurant,
    Salon,
    Hotel,
}

impl BrandKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Restaurant => "RESTAURANT",
            Self::Salon => "SALON",
            Self::Hotel => "HOTEL",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FontFamily {
    #[default]
    Inter,
    #[serde(rename = "Playfair Display")]
    PlayfairDisplay,
    #[serde(rename = "Roboto Mono")]
    RobotoMono,
}

/// Corner rounding used by cards and buttons
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CornerRadius {
    #[serde(rename = "none")]
    None,
    #[serde(rename = "md")]
    Md,
    #[default]
    #[serde(rename = "2xl")]
    Xl2,
    #[serde(rename = "full")]
    Full,
}

impl CornerRadius {
    /// CSS length for this radius
    pub fn css(&self) -> &'static str {
        match self {
            Self::None => "0px",
            Self::Md => "8px",
            Self::Xl2 => "16px",
            Self::Full => "9999px",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandTheme {
    /// Palette class name (e.g. `emerald-600`) or a raw hex value
    pub primary_color: String,
    pub font_family: FontFamily,
    pub border_radius: CornerRadius,
}

impl Default for BrandTheme {
    fn default() -> Self {
        Self {
            primary_color: "indigo-600".to_string(),
            font_family: FontFamily::Inter,
            border_radius: CornerRadius::Xl2,
        }
    }
}

impl BrandTheme {
    /// Resolve the primary colour to hex
    pub fn primary_hex(&self) -> &str {
        if self.primary_color.starts_with('#') {
            return &self.primary_color;
        }
        THEME_COLORS
            .iter()
            .find(|(class, _, _)| *class == self.primary_color)
            .map(|(_, _, hex)| *hex)
            .unwrap_or(DEFAULT_PRIMARY_HEX)
    }
}

/// Loyalty modules enabled for a brand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandFeatures {
    pub wallet: bool,
    pub points: bool,
    pub subscriptions: bool,
    pub vouchers: bool,
}

impl Default for BrandFeatures {
    fn default() -> Self {
        Self {
            wallet: true,
            points: true,
            subscriptions: true,
            vouchers: true,
        }
    }
}

/// Prepaid plan sold by a brand (`units` visits for `price`)
///
/// Kept as form text, like [`BonusSlab`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionPlan {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub units: String,
    pub price: String,
}

/// Brand entity (tenant)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: BrandKind,
    pub logo: String,
    #[serde(default)]
    pub theme: BrandTheme,
    /// Percentage added on top of every wallet top-up
    pub topup_bonus_percentage: f64,
    /// Points per ₹100 spent
    pub points_earning_rate: f64,
    pub points_expiry_months: u32,
    #[serde(default)]
    pub features: BrandFeatures,
    #[serde(default)]
    pub landing_page: LandingPage,
    #[serde(default)]
    pub wallet_bonus_slabs: Vec<BonusSlab>,
    #[serde(default)]
    pub subscription_plans: Vec<SubscriptionPlan>,
    #[serde(default)]
    pub target_interests: Vec<String>,
}

impl Brand {
    /// Merge a partial update: scalars shallow, nested objects field by field.
    pub fn apply(&mut self, patch: BrandPatch) {
        if let Some(v) = patch.name {
            self.name = v;
        }
        if let Some(v) = patch.kind {
            self.kind = v;
        }
        if let Some(v) = patch.logo {
            self.logo = v;
        }
        if let Some(v) = patch.topup_bonus_percentage {
            self.topup_bonus_percentage = v;
        }
        if let Some(v) = patch.points_earning_rate {
            self.points_earning_rate = v;
        }
        if let Some(v) = patch.points_expiry_months {
            self.points_expiry_months = v;
        }
        if let Some(theme) = patch.theme {
            if let Some(v) = theme.primary_color {
                self.theme.primary_color = v;
            }
            if let Some(v) = theme.font_family {
                self.theme.font_family = v;
            }
            if let Some(v) = theme.border_radius {
                self.theme.border_radius = v;
            }
        }
        if let Some(features) = patch.features {
            if let Some(v) = features.wallet {
                self.features.wallet = v;
            }
            if let Some(v) = features.points {
                self.features.points = v;
            }
            if let Some(v) = features.subscriptions {
                self.features.subscriptions = v;
            }
            if let Some(v) = features.vouchers {
                self.features.vouchers = v;
            }
        }
        if let Some(landing) = patch.landing_page {
            self.landing_page.apply(landing);
        }
    }
}

/// Partial theme update
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BrandThemePatch {
    pub primary_color: Option<String>,
    pub font_family: Option<FontFamily>,
    pub border_radius: Option<CornerRadius>,
}

/// Partial feature toggle update
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandFeaturesPatch {
    pub wallet: Option<bool>,
    pub points: Option<bool>,
    pub subscriptions: Option<bool>,
    pub vouchers: Option<bool>,
}

/// Update brand payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BrandPatch {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<BrandKind>,
    pub logo: Option<String>,
    pub theme: Option<BrandThemePatch>,
    pub topup_bonus_percentage: Option<f64>,
    pub points_earning_rate: Option<f64>,
    pub points_expiry_months: Option<u32>,
    pub features: Option<BrandFeaturesPatch>,
    pub landing_page: Option<LandingPagePatch>,
}

/// Brand contact card for the customer brand directory
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandContact {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: BrandKind,
    pub logo: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub working_hours: String,
}

impl From<&Brand> for BrandContact {
    fn from(brand: &Brand) -> Self {
        Self {
            id: brand.id.clone(),
            name: brand.name.clone(),
            kind: brand.kind,
            logo: brand.logo.clone(),
            email: brand.landing_page.brand_email.clone(),
            phone: brand.landing_page.brand_phone.clone(),
            address: brand.landing_page.brand_address.clone(),
            working_hours: brand.landing_page.brand_working_hours.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_brand() -> Brand {
        Brand {
            id: "b1".into(),
            name: "Nine Blue".into(),
            kind: BrandKind::Restaurant,
            logo: "logo.png".into(),
            theme: BrandTheme {
                primary_color: "emerald-600".into(),
                font_family: FontFamily::Inter,
                border_radius: CornerRadius::Xl2,
            },
            topup_bonus_percentage: 10.0,
            points_earning_rate: 1.0,
            points_expiry_months: 12,
            features: BrandFeatures::default(),
            landing_page: LandingPage {
                hero_title: "Dine Like Royalty".into(),
                brand_phone: "+91 8108114819".into(),
                ..Default::default()
            },
            wallet_bonus_slabs: Vec::new(),
            subscription_plans: Vec::new(),
            target_interests: Vec::new(),
        }
    }

    #[test]
    fn test_primary_hex_lookup() {
        let brand = make_brand();
        assert_eq!(brand.theme.primary_hex(), "#059669");

        let theme = BrandTheme {
            primary_color: "unknown-500".into(),
            ..Default::default()
        };
        assert_eq!(theme.primary_hex(), DEFAULT_PRIMARY_HEX);

        let theme = BrandTheme {
            primary_color: "#123456".into(),
            ..Default::default()
        };
        assert_eq!(theme.primary_hex(), "#123456");
    }

    #[test]
    fn test_apply_nested_theme_merge() {
        let mut brand = make_brand();
        brand.apply(BrandPatch {
            theme: Some(BrandThemePatch {
                font_family: Some(FontFamily::RobotoMono),
                ..Default::default()
            }),
            ..Default::default()
        });
        assert_eq!(brand.theme.font_family, FontFamily::RobotoMono);
        assert_eq!(brand.theme.primary_color, "emerald-600");
        assert_eq!(brand.theme.border_radius, CornerRadius::Xl2);
    }

    #[test]
    fn test_apply_landing_patch_keeps_siblings() {
        let mut brand = make_brand();
        brand.apply(BrandPatch {
            topup_bonus_percentage: Some(12.5),
            landing_page: Some(LandingPagePatch {
                hero_subtitle: Some("Join us".into()),
                ..Default::default()
            }),
            ..Default::default()
        });
        assert_eq!(brand.topup_bonus_percentage, 12.5);
        assert_eq!(brand.landing_page.hero_subtitle, "Join us");
        assert_eq!(brand.landing_page.hero_title, "Dine Like Royalty");
        assert_eq!(brand.landing_page.brand_phone, "+91 8108114819");
    }

    #[test]
    fn test_wire_names() {
        let json = serde_json::to_value(make_brand()).unwrap();
        assert_eq!(json["type"], "RESTAURANT");
        assert_eq!(json["theme"]["borderRadius"], "2xl");
        assert_eq!(json["topupBonusPercentage"], 10.0);

        let font: FontFamily = serde_json::from_str("\"Playfair Display\"").unwrap();
        assert_eq!(font, FontFamily::PlayfairDisplay);
    }

    #[test]
    fn test_contact_card_from_landing_page() {
        let contact = BrandContact::from(&make_brand());
        assert_eq!(contact.phone, "+91 8108114819");
        assert_eq!(contact.kind, BrandKind::Restaurant);
    }

    #[test]
    fn test_corner_radius_css() {
        assert_eq!(CornerRadius::None.css(), "0px");
        assert_eq!(CornerRadius::Full.css(), "9999px");
    }
}
