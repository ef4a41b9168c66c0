//! Landing page editor operations

use shared::models::{
    FeaturedOffer, LandingPage, LandingPageEdit, PLACEHOLDER_GALLERY_IMAGE, PLACEHOLDER_HERO_IMAGE,
    PLACEHOLDER_OFFER_IMAGE, PLACEHOLDER_PRODUCT_IMAGE, Product,
};
use shared::util::snowflake_id;
use shared::{AppError, AppResult, ErrorCode};

const NEW_OFFER_TITLE: &str = "New Exclusive Offer";
const NEW_OFFER_DESCRIPTION: &str = "Describe the benefits of this limited time reward...";
const NEW_OFFER_CTA: &str = "Learn More";
const NEW_PRODUCT_NAME: &str = "New Item";
const NEW_PRODUCT_DESCRIPTION: &str = "Describe your reward or service...";
const NEW_PRODUCT_PRICE: &str = "₹999";

fn item_not_found(kind: &str, id: &str) -> AppError {
    AppError::with_message(
        ErrorCode::LandingPageItemNotFound,
        format!("{} {} not found", kind, id),
    )
    .with_detail("id", id)
}

fn index_out_of_range(list: &str, index: usize, len: usize) -> AppError {
    AppError::with_message(
        ErrorCode::LandingPageItemNotFound,
        format!("{} index {} out of range (len {})", list, index, len),
    )
}

/// Apply one editor operation in place
///
/// On error the page is left untouched.
pub fn apply_edit(page: &mut LandingPage, edit: LandingPageEdit) -> AppResult<()> {
    match edit {
        LandingPageEdit::AddSlideshowImage { url } => {
            page.hero_slideshow_images
                .push(url.unwrap_or_else(|| PLACEHOLDER_HERO_IMAGE.to_string()));
        }
        LandingPageEdit::RemoveSlideshowImage { index } => {
            let len = page.hero_slideshow_images.len();
            if index >= len {
                return Err(index_out_of_range("slideshow", index, len));
            }
            page.hero_slideshow_images.remove(index);
        }
        LandingPageEdit::AddGalleryImage { url } => {
            page.menu_gallery
                .push(url.unwrap_or_else(|| PLACEHOLDER_GALLERY_IMAGE.to_string()));
        }
        LandingPageEdit::RemoveGalleryImage { index } => {
            let len = page.menu_gallery.len();
            if index >= len {
                return Err(index_out_of_range("gallery", index, len));
            }
            page.menu_gallery.remove(index);
        }
        LandingPageEdit::AddOffer { offer } => {
            let mut new_offer = FeaturedOffer {
                id: snowflake_id().to_string(),
                title: NEW_OFFER_TITLE.to_string(),
                description: NEW_OFFER_DESCRIPTION.to_string(),
                cta_text: NEW_OFFER_CTA.to_string(),
                image_url: Some(PLACEHOLDER_OFFER_IMAGE.to_string()),
            };
            new_offer.apply(offer);
            page.featured_offers.push(new_offer);
        }
        LandingPageEdit::UpdateOffer { id, patch } => {
            let offer = page
                .featured_offers
                .iter_mut()
                .find(|o| o.id == id)
                .ok_or_else(|| item_not_found("Offer", &id))?;
            offer.apply(patch);
        }
        LandingPageEdit::RemoveOffer { id } => {
            let before = page.featured_offers.len();
            page.featured_offers.retain(|o| o.id != id);
            if page.featured_offers.len() == before {
                return Err(item_not_found("Offer", &id));
            }
        }
        LandingPageEdit::AddProduct { product } => {
            let mut new_product = Product {
                id: format!("p{}", snowflake_id()),
                name: NEW_PRODUCT_NAME.to_string(),
                description: NEW_PRODUCT_DESCRIPTION.to_string(),
                price: NEW_PRODUCT_PRICE.to_string(),
                image_url: PLACEHOLDER_PRODUCT_IMAGE.to_string(),
            };
            new_product.apply(product);
            page.products.push(new_product);
        }
        LandingPageEdit::UpdateProduct { id, patch } => {
            let product = page
                .products
                .iter_mut()
                .find(|p| p.id == id)
                .ok_or_else(|| item_not_found("Product", &id))?;
            product.apply(patch);
        }
        LandingPageEdit::RemoveProduct { id } => {
            let before = page.products.len();
            page.products.retain(|p| p.id != id);
            if page.products.len() == before {
                return Err(item_not_found("Product", &id));
            }
        }
        LandingPageEdit::UpdateRedemptionStep {
            id,
            title,
            description,
        } => {
            let step = page
                .redemption_steps
                .iter_mut()
                .find(|s| s.id == id)
                .ok_or_else(|| item_not_found("Redemption step", &id))?;
            if let Some(v) = title {
                step.title = v;
            }
            if let Some(v) = description {
                step.description = v;
            }
        }
    }
    Ok(())
}
