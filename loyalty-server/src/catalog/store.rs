//! Brand Catalog - in-memory tenant store
//!
//! Holds the brand list in display order. Reads clone out of the lock so no
//! guard ever crosses an `.await`.

use std::sync::Arc;

use parking_lot::RwLock;
use shared::models::{Brand, BrandPatch, LandingPageEdit};
use shared::{AppError, AppResult};

use super::editor::apply_edit;
use super::wizard::BrandDraft;

/// Shared brand catalog
#[derive(Clone)]
pub struct BrandCatalog {
    /// Insertion order is display order
    brands: Arc<RwLock<Vec<Brand>>>,
}

impl std::fmt::Debug for BrandCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let brands_count = self.brands.read().len();
        f.debug_struct("BrandCatalog")
            .field("brands_count", &brands_count)
            .finish()
    }
}

impl BrandCatalog {
    /// Create a catalog from seed brands. The catalog must not be empty.
    pub fn new(brands: Vec<Brand>) -> AppResult<Self> {
        if brands.is_empty() {
            return Err(AppError::internal("Brand catalog must not be empty"));
        }
        Ok(Self {
            brands: Arc::new(RwLock::new(brands)),
        })
    }

    /// All brands in display order
    pub fn get_all(&self) -> Vec<Brand> {
        self.brands.read().clone()
    }

    /// Explicit lookup
    pub fn get(&self, id: &str) -> Option<Brand> {
        self.brands.read().iter().find(|b| b.id == id).cloned()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.brands.read().iter().any(|b| b.id == id)
    }

    pub fn first_id(&self) -> Option<String> {
        self.brands.read().first().map(|b| b.id.clone())
    }

    /// Lookup with first-brand fallback
    ///
    /// Only screen resolution uses this: a session pointing at a brand that
    /// no longer resolves still renders something.
    pub fn get_or_default(&self, id: &str) -> AppResult<Brand> {
        let brands = self.brands.read();
        if let Some(brand) = brands.iter().find(|b| b.id == id) {
            return Ok(brand.clone());
        }
        let fallback = brands
            .first()
            .ok_or_else(|| AppError::internal("Brand catalog is empty"))?;
        tracing::warn!(
            requested = %id,
            fallback = %fallback.id,
            "Brand not found, falling back to first catalog brand"
        );
        Ok(fallback.clone())
    }

    /// Merge a partial update and return the stored copy
    pub fn update(&self, id: &str, patch: BrandPatch) -> AppResult<Brand> {
        let mut brands = self.brands.write();
        let brand = brands
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| AppError::brand_not_found(id))?;
        brand.apply(patch);
        tracing::info!(brand_id = %id, "Brand updated");
        Ok(brand.clone())
    }

    /// Apply a landing page editor operation
    ///
    /// Edits run against a copy that is written back only on success.
    pub fn edit_landing_page(&self, id: &str, edit: LandingPageEdit) -> AppResult<Brand> {
        let mut brands = self.brands.write();
        let brand = brands
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| AppError::brand_not_found(id))?;
        let mut page = brand.landing_page.clone();
        apply_edit(&mut page, edit)?;
        brand.landing_page = page;
        tracing::debug!(brand_id = %id, "Landing page edited");
        Ok(brand.clone())
    }

    /// Append a brand built from a wizard draft
    pub fn create(&self, draft: BrandDraft) -> AppResult<Brand> {
        let mut brands = self.brands.write();
        if brands
            .iter()
            .any(|b| b.name.eq_ignore_ascii_case(draft.name.trim()))
        {
            return Err(AppError::with_message(
                shared::ErrorCode::BrandAlreadyExists,
                format!("Brand {} already exists", draft.name.trim()),
            ));
        }
        let id = next_id(&brands);
        let brand = draft.into_brand(id);
        tracing::info!(brand_id = %brand.id, name = %brand.name, "Brand created");
        brands.push(brand.clone());
        Ok(brand)
    }
}

/// Next `b{n}` id after the highest numeric suffix in use
fn next_id(brands: &[Brand]) -> String {
    let max = brands
        .iter()
        .filter_map(|b| b.id.strip_prefix('b'))
        .filter_map(|n| n.parse::<u32>().ok())
        .max()
        .unwrap_or(0);
    format!("b{}", max + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Fixtures;
    use shared::ErrorCode;
    use shared::models::{BrandThemePatch, FontFamily, LandingPagePatch};

    fn make_catalog() -> BrandCatalog {
        BrandCatalog::new(Fixtures::load().unwrap().brands).unwrap()
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert!(BrandCatalog::new(Vec::new()).is_err());
    }

    #[test]
    fn test_get_by_id_identity() {
        let catalog = make_catalog();
        for brand in catalog.get_all() {
            assert_eq!(catalog.get(&brand.id).unwrap().id, brand.id);
        }
        assert!(catalog.get("missing").is_none());
    }

    #[test]
    fn test_get_or_default_falls_back_to_first() {
        let catalog = make_catalog();
        assert_eq!(catalog.get_or_default("b3").unwrap().id, "b3");
        assert_eq!(catalog.get_or_default("missing").unwrap().id, "b1");
    }

    #[test]
    fn test_update_merges_nested() {
        let catalog = make_catalog();
        let before = catalog.get("b2").unwrap();
        let updated = catalog
            .update(
                "b2",
                BrandPatch {
                    theme: Some(BrandThemePatch {
                        font_family: Some(FontFamily::RobotoMono),
                        ..Default::default()
                    }),
                    landing_page: Some(LandingPagePatch {
                        hero_title: Some("Glow Up".into()),
                        ..Default::default()
                    }),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.theme.font_family, FontFamily::RobotoMono);
        assert_eq!(updated.theme.primary_color, before.theme.primary_color);
        assert_eq!(updated.landing_page.hero_title, "Glow Up");
        assert_eq!(updated.landing_page.products, before.landing_page.products);
        assert_eq!(catalog.get("b2").unwrap(), updated);
    }

    #[test]
    fn test_update_unknown_brand() {
        let err = make_catalog()
            .update("nope", BrandPatch::default())
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::BrandNotFound);
    }

    #[test]
    fn test_failed_edit_leaves_brand_untouched() {
        let catalog = make_catalog();
        let before = catalog.get("b1").unwrap();
        let err = catalog
            .edit_landing_page("b1", LandingPageEdit::RemoveProduct { id: "zzz".into() })
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::LandingPageItemNotFound);
        assert_eq!(catalog.get("b1").unwrap(), before);
    }

    #[test]
    fn test_create_assigns_next_id() {
        let catalog = make_catalog();
        let draft: BrandDraft = serde_json::from_str(r#"{"name":"Corner Cafe"}"#).unwrap();
        let brand = catalog.create(draft).unwrap();
        assert_eq!(brand.id, "b4");
        assert_eq!(catalog.get_all().last().unwrap().id, "b4");

        let dup: BrandDraft = serde_json::from_str(r#"{"name":"nine blue"}"#).unwrap();
        assert_eq!(
            catalog.create(dup).unwrap_err().code,
            ErrorCode::BrandAlreadyExists
        );
    }
}
