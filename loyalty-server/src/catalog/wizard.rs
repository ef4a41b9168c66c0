//! Create-brand wizard
//!
//! A draft collected over the wizard steps becomes a catalog brand. Picking a
//! template pre-fills the vertical, theme and hero copy; anything the admin
//! typed afterwards wins.

use serde::{Deserialize, Serialize};
use shared::loyalty::{BonusSlab, MAX_POINTS_EARNING_RATE, SlabPreview, parse_amount};
use shared::models::{
    Brand, BrandFeatures, BrandKind, BrandTheme, CornerRadius, FontFamily, LandingPage,
    RedemptionStep, SubscriptionPlan,
};
use shared::{AppError, AppResult, ErrorCode};
use validator::Validate;

use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, MAX_URL_LEN, validate_optional_text,
    validate_range, validate_required_text,
};

const DEFAULT_LOGO: &str = "https://picsum.photos/seed/brand/200/200";
const MAX_TARGET_INTERESTS: usize = 20;

/// Brand template offered on the first wizard step
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandTemplate {
    pub id: &'static str,
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: BrandKind,
    pub description: &'static str,
    pub primary_color: &'static str,
    pub font_family: FontFamily,
    pub border_radius: CornerRadius,
    pub hero_title: &'static str,
    pub hero_subtitle: &'static str,
    pub hero_description: &'static str,
}

pub const TEMPLATES: &[BrandTemplate] = &[
    BrandTemplate {
        id: "gourmet",
        name: "The Gourmet",
        kind: BrandKind::Restaurant,
        description: "Warm, appetizing colors and modern layouts for high-end dining.",
        primary_color: "emerald-600",
        font_family: FontFamily::Inter,
        border_radius: CornerRadius::Xl2,
        hero_title: "Dine Like Royalty",
        hero_subtitle: "Join our exclusive dining circle.",
        hero_description: "Experience the finest farm-to-table cuisine with premium rewards on every visit.",
    },
    BrandTemplate {
        id: "zen",
        name: "Zen Wellness",
        kind: BrandKind::Salon,
        description: "Soft, calming palette for spa, salon, and wellness brands.",
        primary_color: "sky-600",
        font_family: FontFamily::PlayfairDisplay,
        border_radius: CornerRadius::Full,
        hero_title: "Rejuvenate Your Senses",
        hero_subtitle: "Luxury wellness awaits you.",
        hero_description: "Bespoke spa treatments and salon services tailored to your unique lifestyle.",
    },
    BrandTemplate {
        id: "majestic",
        name: "Majestic Stay",
        kind: BrandKind::Hotel,
        description: "Elegant and classic aesthetics for premium hotels and resorts.",
        primary_color: "amber-600",
        font_family: FontFamily::PlayfairDisplay,
        border_radius: CornerRadius::None,
        hero_title: "Elegant Stays",
        hero_subtitle: "Your home away from home.",
        hero_description: "Unmatched hospitality in the heart of the city with rewards that matter.",
    },
];

pub fn find_template(id: &str) -> Option<&'static BrandTemplate> {
    TEMPLATES.iter().find(|t| t.id == id)
}

fn default_slabs() -> Vec<BonusSlab> {
    vec![BonusSlab {
        id: "1".into(),
        amount_paid: "1000".into(),
        wallet_value: "1200".into(),
    }]
}

fn default_plans() -> Vec<SubscriptionPlan> {
    vec![SubscriptionPlan {
        id: "sub-1".into(),
        name: "Starter Pass".into(),
        units: "5".into(),
        price: "450".into(),
    }]
}

fn default_true() -> bool {
    true
}

fn default_bonus() -> f64 {
    10.0
}

fn default_rate() -> f64 {
    1.0
}

fn default_expiry() -> u32 {
    12
}

/// Wizard payload
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BrandDraft {
    #[validate(length(min = 1, max = 200, message = "Brand name is required"))]
    pub name: String,
    #[serde(default, rename = "type")]
    pub kind: Option<BrandKind>,
    #[serde(default)]
    pub template_id: Option<String>,
    #[serde(default)]
    #[validate(length(max = 500))]
    pub description: Option<String>,
    #[serde(default)]
    #[validate(length(max = 2048))]
    pub logo: Option<String>,

    #[serde(default)]
    pub primary_color: Option<String>,
    #[serde(default)]
    pub font_family: Option<FontFamily>,
    #[serde(default)]
    pub border_radius: Option<CornerRadius>,

    #[serde(default = "default_true")]
    pub wallet_enabled: bool,
    #[serde(default = "default_bonus")]
    #[validate(range(min = 0.0, max = 100.0))]
    pub topup_bonus_percentage: f64,
    #[serde(default = "default_slabs")]
    pub wallet_bonus_slabs: Vec<BonusSlab>,

    #[serde(default = "default_true")]
    pub points_enabled: bool,
    #[serde(default = "default_rate")]
    pub points_earning_rate: f64,
    #[serde(default = "default_expiry")]
    pub points_expiry_months: u32,

    #[serde(default = "default_true")]
    pub subscriptions_enabled: bool,
    #[serde(default = "default_plans")]
    pub subscription_plans: Vec<SubscriptionPlan>,
    #[serde(default = "default_true")]
    pub vouchers_enabled: bool,

    #[serde(default)]
    pub target_interests: Vec<String>,

    #[serde(default)]
    pub hero_title: Option<String>,
    #[serde(default)]
    pub hero_subtitle: Option<String>,
    #[serde(default)]
    pub hero_description: Option<String>,

    /// Accepted for the demo flow, never stored
    #[serde(default)]
    pub manager_username: Option<String>,
    #[serde(default)]
    pub manager_password: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Slab echoed back by the wizard with its computed preview
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlabSummary {
    #[serde(flatten)]
    pub slab: BonusSlab,
    pub preview: SlabPreview,
}

impl BrandDraft {
    /// Check lengths, ranges and offerings the derive cannot express
    pub fn check_limits(&self) -> AppResult<()> {
        validate_required_text(&self.name, "name", MAX_NAME_LEN)?;
        validate_optional_text(&self.hero_description, "heroDescription", MAX_NOTE_LEN)?;
        validate_optional_text(&self.logo, "logo", MAX_URL_LEN)?;
        validate_range(
            self.points_earning_rate,
            "pointsEarningRate",
            0.0,
            MAX_POINTS_EARNING_RATE,
        )?;
        if let Some(id) = &self.template_id
            && find_template(id).is_none()
        {
            return Err(AppError::with_message(
                ErrorCode::BrandTemplateNotFound,
                format!("Template {} not found", id),
            ));
        }
        if self.wallet_enabled {
            for (index, slab) in self.wallet_bonus_slabs.iter().enumerate() {
                if slab.preview().is_none() {
                    return Err(AppError::validation(format!(
                        "Bonus slab {} needs a positive amount paid and a numeric wallet value",
                        index + 1
                    ))
                    .with_detail("field", "walletBonusSlabs")
                    .with_detail("index", index));
                }
            }
        }
        if self.subscriptions_enabled {
            for (index, plan) in self.subscription_plans.iter().enumerate() {
                validate_required_text(&plan.name, "subscriptionPlans.name", MAX_NAME_LEN)?;
                let priced = [&plan.units, &plan.price].into_iter().all(|raw| {
                    raw.len() <= MAX_SHORT_TEXT_LEN
                        && parse_amount(raw).is_some_and(|v| v > 0.0)
                });
                if !priced {
                    return Err(AppError::validation(format!(
                        "Plan {} needs positive units and price",
                        plan.name.trim()
                    ))
                    .with_detail("field", "subscriptionPlans")
                    .with_detail("index", index));
                }
            }
        }
        if self.target_interests.len() > MAX_TARGET_INTERESTS {
            return Err(AppError::validation("Too many target interests")
                .with_detail("field", "targetInterests"));
        }
        Ok(())
    }

    /// Build the catalog entry. `id` is assigned by the catalog.
    pub fn into_brand(self, id: String) -> Brand {
        let template = self.template_id.as_deref().and_then(find_template);

        let mut theme = BrandTheme::default();
        if let Some(t) = template {
            theme.primary_color = t.primary_color.to_string();
            theme.font_family = t.font_family;
            theme.border_radius = t.border_radius;
        }
        if let Some(v) = non_empty(self.primary_color) {
            theme.primary_color = v;
        }
        if let Some(v) = self.font_family {
            theme.font_family = v;
        }
        if let Some(v) = self.border_radius {
            theme.border_radius = v;
        }

        let kind = self
            .kind
            .or(template.map(|t| t.kind))
            .unwrap_or(BrandKind::Restaurant);

        let hero_title = non_empty(self.hero_title)
            .or_else(|| template.map(|t| t.hero_title.to_string()))
            .unwrap_or_else(|| self.name.clone());
        let hero_subtitle = non_empty(self.hero_subtitle)
            .or_else(|| template.map(|t| t.hero_subtitle.to_string()))
            .unwrap_or_default();
        let hero_description = non_empty(self.hero_description)
            .or_else(|| non_empty(self.description.clone()))
            .or_else(|| template.map(|t| t.hero_description.to_string()))
            .unwrap_or_default();

        let wallet_bonus_slabs = if self.wallet_enabled {
            self.wallet_bonus_slabs
                .into_iter()
                .enumerate()
                .map(|(i, slab)| BonusSlab {
                    id: non_empty(Some(slab.id)).unwrap_or_else(|| (i + 1).to_string()),
                    amount_paid: slab.amount_paid.trim().to_string(),
                    wallet_value: slab.wallet_value.trim().to_string(),
                })
                .collect()
        } else {
            Vec::new()
        };
        let subscription_plans = if self.subscriptions_enabled {
            self.subscription_plans
                .into_iter()
                .enumerate()
                .map(|(i, plan)| SubscriptionPlan {
                    id: non_empty(Some(plan.id)).unwrap_or_else(|| format!("sub-{}", i + 1)),
                    name: plan.name.trim().to_string(),
                    units: plan.units.trim().to_string(),
                    price: plan.price.trim().to_string(),
                })
                .collect()
        } else {
            Vec::new()
        };
        let mut target_interests: Vec<String> = Vec::new();
        for interest in self.target_interests {
            let interest = interest.trim();
            if !interest.is_empty() && !target_interests.iter().any(|t| t == interest) {
                target_interests.push(interest.to_string());
            }
        }

        let accent = theme.primary_hex().to_string();
        let landing_page = LandingPage {
            hero_title,
            hero_subtitle,
            hero_description,
            hero_image_url: shared::models::PLACEHOLDER_HERO_IMAGE.to_string(),
            cta_background_color: Some(accent.clone()),
            cta_text_color: Some("#ffffff".to_string()),
            cta_border_radius: Some(theme.border_radius),
            accent_color: Some(accent),
            redemption_steps: default_redemption_steps(),
            ..Default::default()
        };

        Brand {
            id,
            name: self.name,
            kind,
            logo: non_empty(self.logo).unwrap_or_else(|| DEFAULT_LOGO.to_string()),
            theme,
            topup_bonus_percentage: if self.wallet_enabled {
                self.topup_bonus_percentage.max(0.0)
            } else {
                0.0
            },
            points_earning_rate: self.points_earning_rate.max(0.0),
            points_expiry_months: self.points_expiry_months,
            features: BrandFeatures {
                wallet: self.wallet_enabled,
                points: self.points_enabled,
                subscriptions: self.subscriptions_enabled,
                vouchers: self.vouchers_enabled,
            },
            landing_page,
            wallet_bonus_slabs,
            subscription_plans,
            target_interests,
        }
    }
}

/// Previews for the slabs a brand stores
pub fn slab_summaries(brand: &Brand) -> Vec<SlabSummary> {
    brand
        .wallet_bonus_slabs
        .iter()
        .filter_map(|slab| {
            slab.preview().map(|preview| SlabSummary {
                slab: slab.clone(),
                preview,
            })
        })
        .collect()
}

fn default_redemption_steps() -> Vec<RedemptionStep> {
    [
        ("r1", "Scan QR", "Show your wallet QR at the billing counter"),
        ("r2", "Pick Offer", "Select the available voucher from your list"),
        ("r3", "Get Discount", "Amount is automatically deducted from bill"),
    ]
    .into_iter()
    .map(|(id, title, description)| RedemptionStep {
        id: id.into(),
        title: title.into(),
        description: description.into(),
    })
    .collect()
}
