//! Landing Page Model
//!
//! Every brand owns exactly one public landing page. The schema is explicit
//! and default-filled: a partial JSON document deserializes into a complete
//! page, and [`LandingPagePatch`] merges field by field without dropping
//! siblings.

use serde::{Deserialize, Serialize};

use super::brand::CornerRadius;

/// Placeholder image used when the editor adds a slideshow image
pub const PLACEHOLDER_HERO_IMAGE: &str =
    "https://images.unsplash.com/photo-1514362545857-3bc16c4c7d1b?auto=format&fit=crop&w=800&q=80";
/// Placeholder image used when the editor adds a gallery image
pub const PLACEHOLDER_GALLERY_IMAGE: &str =
    "https://images.unsplash.com/photo-1504674900247-0877df9cc836?auto=format&fit=crop&w=800&q=80";
/// Placeholder image used for new featured offers
pub const PLACEHOLDER_OFFER_IMAGE: &str =
    "https://images.unsplash.com/photo-1550966841-3ee7ad6d1b82?auto=format&fit=crop&w=800&q=80";
/// Placeholder image used for new products
pub const PLACEHOLDER_PRODUCT_IMAGE: &str =
    "https://images.unsplash.com/photo-1514362545857-3bc16c4c7d1b?auto=format&fit=crop&w=400&q=80";

/// Upper bound for the 0..=100 opacity sliders
pub const MAX_OPACITY: u8 = 100;

/// Hero slideshow transition
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeroTransition {
    #[default]
    Fade,
    Slide,
    Zoom,
}

/// Promotional card shown under the hero
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedOffer {
    pub id: String,
    pub title: String,
    pub description: String,
    pub cta_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Full-width image banner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    pub id: String,
    pub image_url: String,
    pub title: String,
    pub subtitle: String,
}

/// Menu item / service showcased on the page
///
/// `price` is display text (e.g. `₹2,400`), never used in calculations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: String,
    pub image_url: String,
}

/// One step of the "how to redeem" strip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedemptionStep {
    pub id: String,
    pub title: String,
    pub description: String,
}

/// Public landing page of a brand
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LandingPage {
    pub hero_title: String,
    pub hero_subtitle: String,
    pub hero_description: String,
    /// Fallback when the slideshow is empty
    pub hero_image_url: String,
    pub hero_slideshow_images: Vec<String>,
    pub hero_transition_effect: HeroTransition,

    pub cta_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta_background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta_text_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta_border_radius: Option<CornerRadius>,

    // Contact
    pub brand_email: String,
    pub brand_phone: String,
    pub brand_address: String,
    pub brand_working_hours: String,

    // Styling
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<String>,
    pub hero_image_opacity: u8,
    pub hero_overlay_color: String,
    pub hero_overlay_opacity: u8,

    // Sections
    pub featured_offers: Vec<FeaturedOffer>,
    pub banners: Vec<Banner>,
    pub products: Vec<Product>,
    pub redemption_steps: Vec<RedemptionStep>,
    pub menu_gallery: Vec<String>,
    pub show_auth_buttons: bool,
}

impl Default for LandingPage {
    fn default() -> Self {
        Self {
            hero_title: String::new(),
            hero_subtitle: String::new(),
            hero_description: String::new(),
            hero_image_url: String::new(),
            hero_slideshow_images: Vec::new(),
            hero_transition_effect: HeroTransition::Fade,
            cta_text: "Join Now".to_string(),
            cta_background_color: None,
            cta_text_color: None,
            cta_border_radius: None,
            brand_email: String::new(),
            brand_phone: String::new(),
            brand_address: String::new(),
            brand_working_hours: String::new(),
            page_background_color: None,
            accent_color: None,
            hero_image_opacity: MAX_OPACITY,
            hero_overlay_color: "#000000".to_string(),
            hero_overlay_opacity: 40,
            featured_offers: Vec::new(),
            banners: Vec::new(),
            products: Vec::new(),
            redemption_steps: Vec::new(),
            menu_gallery: Vec::new(),
            show_auth_buttons: true,
        }
    }
}

impl LandingPage {
    /// Image shown first in the hero: first slideshow image, else the fallback
    pub fn primary_hero_image(&self) -> &str {
        self.hero_slideshow_images
            .first()
            .map(String::as_str)
            .unwrap_or(&self.hero_image_url)
    }

    /// Merge a partial update. Absent fields keep their current value;
    /// list fields are replaced wholesale when present.
    pub fn apply(&mut self, patch: LandingPagePatch) {
        macro_rules! merge {
            ($($field:ident),* $(,)?) => {
                $(if let Some(v) = patch.$field { self.$field = v; })*
            };
        }
        macro_rules! merge_opt {
            ($($field:ident),* $(,)?) => {
                $(if let Some(v) = patch.$field { self.$field = Some(v); })*
            };
        }

        merge!(
            hero_title,
            hero_subtitle,
            hero_description,
            hero_image_url,
            hero_slideshow_images,
            hero_transition_effect,
            cta_text,
            brand_email,
            brand_phone,
            brand_address,
            brand_working_hours,
            hero_overlay_color,
            featured_offers,
            banners,
            products,
            redemption_steps,
            menu_gallery,
            show_auth_buttons,
        );
        merge_opt!(
            cta_background_color,
            cta_text_color,
            cta_border_radius,
            page_background_color,
            accent_color,
        );
        if let Some(v) = patch.hero_image_opacity {
            self.hero_image_opacity = v.min(MAX_OPACITY);
        }
        if let Some(v) = patch.hero_overlay_opacity {
            self.hero_overlay_opacity = v.min(MAX_OPACITY);
        }
    }
}

/// Partial landing page update
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LandingPagePatch {
    pub hero_title: Option<String>,
    pub hero_subtitle: Option<String>,
    pub hero_description: Option<String>,
    pub hero_image_url: Option<String>,
    pub hero_slideshow_images: Option<Vec<String>>,
    pub hero_transition_effect: Option<HeroTransition>,
    pub cta_text: Option<String>,
    pub cta_background_color: Option<String>,
    pub cta_text_color: Option<String>,
    pub cta_border_radius: Option<CornerRadius>,
    pub brand_email: Option<String>,
    pub brand_phone: Option<String>,
    pub brand_address: Option<String>,
    pub brand_working_hours: Option<String>,
    pub page_background_color: Option<String>,
    pub accent_color: Option<String>,
    pub hero_image_opacity: Option<u8>,
    pub hero_overlay_color: Option<String>,
    pub hero_overlay_opacity: Option<u8>,
    pub featured_offers: Option<Vec<FeaturedOffer>>,
    pub banners: Option<Vec<Banner>>,
    pub products: Option<Vec<Product>>,
    pub redemption_steps: Option<Vec<RedemptionStep>>,
    pub menu_gallery: Option<Vec<String>>,
    pub show_auth_buttons: Option<bool>,
}

/// Partial featured offer update
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeaturedOfferPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub cta_text: Option<String>,
    pub image_url: Option<String>,
}

impl FeaturedOffer {
    pub fn apply(&mut self, patch: FeaturedOfferPatch) {
        if let Some(v) = patch.title {
            self.title = v;
        }
        if let Some(v) = patch.description {
            self.description = v;
        }
        if let Some(v) = patch.cta_text {
            self.cta_text = v;
        }
        if let Some(v) = patch.image_url {
            self.image_url = Some(v);
        }
    }
}

/// Partial product update
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
    pub image_url: Option<String>,
}

impl Product {
    pub fn apply(&mut self, patch: ProductPatch) {
        if let Some(v) = patch.name {
            self.name = v;
        }
        if let Some(v) = patch.description {
            self.description = v;
        }
        if let Some(v) = patch.price {
            self.price = v;
        }
        if let Some(v) = patch.image_url {
            self.image_url = v;
        }
    }
}

/// Landing page editor operation
///
/// Add operations fill unspecified fields with editor placeholders.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum LandingPageEdit {
    AddSlideshowImage {
        #[serde(default)]
        url: Option<String>,
    },
    RemoveSlideshowImage {
        index: usize,
    },
    AddGalleryImage {
        #[serde(default)]
        url: Option<String>,
    },
    RemoveGalleryImage {
        index: usize,
    },
    AddOffer {
        #[serde(default)]
        offer: FeaturedOfferPatch,
    },
    UpdateOffer {
        id: String,
        patch: FeaturedOfferPatch,
    },
    RemoveOffer {
        id: String,
    },
    AddProduct {
        #[serde(default)]
        product: ProductPatch,
    },
    UpdateProduct {
        id: String,
        patch: ProductPatch,
    },
    RemoveProduct {
        id: String,
    },
    UpdateRedemptionStep {
        id: String,
        #[serde(default)]
        title: Option<String>,
        #[serde(default)]
        description: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_document_is_default_filled() {
        let page: LandingPage =
            serde_json::from_str(r#"{"heroTitle":"Hello","heroTransitionEffect":"zoom"}"#).unwrap();
        assert_eq!(page.hero_title, "Hello");
        assert_eq!(page.hero_transition_effect, HeroTransition::Zoom);
        assert_eq!(page.hero_image_opacity, 100);
        assert!(page.show_auth_buttons);
        assert!(page.featured_offers.is_empty());
    }

    #[test]
    fn test_apply_keeps_siblings() {
        let mut page = LandingPage {
            hero_title: "Dine Like Royalty".into(),
            brand_email: "contact@newbrand.com".into(),
            menu_gallery: vec!["a".into(), "b".into()],
            ..Default::default()
        };
        page.apply(LandingPagePatch {
            hero_title: Some("New Title".into()),
            ..Default::default()
        });
        assert_eq!(page.hero_title, "New Title");
        assert_eq!(page.brand_email, "contact@newbrand.com");
        assert_eq!(page.menu_gallery.len(), 2);
    }

    #[test]
    fn test_apply_clamps_opacity() {
        let mut page = LandingPage::default();
        page.apply(LandingPagePatch {
            hero_overlay_opacity: Some(250),
            ..Default::default()
        });
        assert_eq!(page.hero_overlay_opacity, MAX_OPACITY);
    }

    #[test]
    fn test_primary_hero_image_falls_back() {
        let mut page = LandingPage {
            hero_image_url: "fallback.jpg".into(),
            ..Default::default()
        };
        assert_eq!(page.primary_hero_image(), "fallback.jpg");
        page.hero_slideshow_images.push("first.jpg".into());
        assert_eq!(page.primary_hero_image(), "first.jpg");
    }

    #[test]
    fn test_edit_wire_format() {
        let edit: LandingPageEdit =
            serde_json::from_str(r#"{"op":"remove_offer","id":"2"}"#).unwrap();
        assert!(matches!(edit, LandingPageEdit::RemoveOffer { id } if id == "2"));

        let edit: LandingPageEdit = serde_json::from_str(r#"{"op":"add_gallery_image"}"#).unwrap();
        assert!(matches!(edit, LandingPageEdit::AddGalleryImage { url: None }));
    }
}
