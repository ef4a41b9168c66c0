mod common;

use common::{TestApp, error_code};
use http::StatusCode;
use serde_json::json;
use shared::ErrorCode;
use shared::models::Role;

#[tokio::test]
async fn test_list_and_lookup() {
    let app = TestApp::new();
    let (status, body) = app.get("/api/brands", None).await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<&str> = body
        .as_array()
        .expect("brands")
        .iter()
        .filter_map(|b| b["id"].as_str())
        .collect();
    assert_eq!(ids, ["b1", "b2", "b3"]);

    let (status, body) = app.get("/api/brands/b2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "b2");

    let (status, body) = app.get("/api/brands/b9", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error_code(&body), ErrorCode::BrandNotFound.code() as u64);
}

#[tokio::test]
async fn test_nested_patch_keeps_sibling_fields() {
    let app = TestApp::new();
    let id = app.login(Role::SuperAdmin).await;

    let (status, body) = app
        .put(
            "/api/brands/b1",
            Some(id),
            json!({ "theme": { "primaryColor": "#112233" }, "topupBonusPercentage": 12.5 }),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["theme"]["primaryColor"], "#112233");
    assert_eq!(body["theme"]["fontFamily"], "Inter");
    assert_eq!(body["topupBonusPercentage"], 12.5);
    assert_eq!(body["name"], "Nine Blue");
}

#[tokio::test]
async fn test_brand_admin_limited_to_own_brand() {
    let app = TestApp::new();
    let id = app.login(Role::BrandAdmin).await;

    let (status, _) = app
        .put("/api/brands/b1", Some(id), json!({ "name": "Nine Blue Bistro" }))
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app
        .put("/api/brands/b2", Some(id), json!({ "name": "Not Mine" }))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(error_code(&body), ErrorCode::BrandScopeDenied.code() as u64);

    let (_, body) = app.get("/api/brands/b2", None).await;
    assert_ne!(body["name"], "Not Mine");
}

#[tokio::test]
async fn test_patch_rejects_out_of_range_bonus() {
    let app = TestApp::new();
    let id = app.login(Role::SuperAdmin).await;
    let (status, body) = app
        .put("/api/brands/b1", Some(id), json!({ "topupBonusPercentage": 150 }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&body), ErrorCode::ValidationFailed.code() as u64);
}

#[tokio::test]
async fn test_landing_page_edits() {
    let app = TestApp::new();
    let id = app.login(Role::SuperAdmin).await;

    let (status, body) = app
        .post(
            "/api/brands/b1/landing-page/edits",
            Some(id),
            json!({ "op": "remove_gallery_image", "index": 0 }),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["landingPage"]["menuGallery"].as_array().map(Vec::len), Some(11));

    // out of range leaves the page untouched
    let (status, _) = app
        .post(
            "/api/brands/b1/landing-page/edits",
            Some(id),
            json!({ "op": "remove_gallery_image", "index": 99 }),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (_, body) = app.get("/api/brands/b1", None).await;
    assert_eq!(body["landingPage"]["menuGallery"].as_array().map(Vec::len), Some(11));
}

#[tokio::test]
async fn test_wizard_creates_brand() {
    let app = TestApp::new();
    let id = app.login(Role::SuperAdmin).await;

    let (status, body) = app
        .post(
            "/api/brands",
            Some(id),
            json!({ "name": "Harbour Cafe", "type": "RESTAURANT" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["message"], "Harbour Cafe is live");
    let new_id = body["data"]["id"].as_str().expect("id").to_string();

    let (status, _) = app.get(&format!("/api/brands/{new_id}"), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app
        .post("/api/brands", Some(id), json!({ "name": "harbour cafe" }))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(error_code(&body), ErrorCode::BrandAlreadyExists.code() as u64);
}

#[tokio::test]
async fn test_wizard_stores_slabs_and_plans() {
    let app = TestApp::new();
    let id = app.login(Role::SuperAdmin).await;

    let (status, body) = app
        .post(
            "/api/brands",
            Some(id),
            json!({
                "name": "Saffron Table",
                "templateId": "gourmet",
                "walletBonusSlabs": [
                    { "amountPaid": "1000", "walletValue": "1200" },
                    { "amountPaid": "5000", "walletValue": "6500" }
                ],
                "subscriptionPlans": [
                    { "name": "Lunch Club", "units": "8", "price": "2400" }
                ],
                "targetInterests": ["Veg", "Fine Dining"]
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    let data = &body["data"];
    assert_eq!(data["slabPreviews"][0]["preview"]["percentageLabel"], "20%");
    assert_eq!(data["slabPreviews"][1]["preview"]["bonus"], 1500.0);
    assert_eq!(data["slabPreviews"][1]["preview"]["percentageLabel"], "30%");

    let new_id = data["id"].as_str().expect("id").to_string();
    let (_, brand) = app.get(&format!("/api/brands/{new_id}"), None).await;
    assert_eq!(brand["walletBonusSlabs"].as_array().map(Vec::len), Some(2));
    assert_eq!(brand["walletBonusSlabs"][1]["amountPaid"], "5000");
    assert_eq!(brand["subscriptionPlans"][0]["name"], "Lunch Club");
    assert_eq!(brand["targetInterests"][1], "Fine Dining");
}

#[tokio::test]
async fn test_wizard_rejects_slab_without_preview() {
    let app = TestApp::new();
    let id = app.login(Role::SuperAdmin).await;

    let (status, body) = app
        .post(
            "/api/brands",
            Some(id),
            json!({
                "name": "Broken Slabs",
                "walletBonusSlabs": [{ "amountPaid": "1e30", "walletValue": "1200" }]
            }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&body), ErrorCode::ValidationFailed.code() as u64);

    let (_, brands) = app.get("/api/brands", None).await;
    assert_eq!(brands.as_array().map(Vec::len), Some(3));
}

#[tokio::test]
async fn test_wizard_requires_super_admin() {
    let app = TestApp::new();
    let id = app.login(Role::Customer).await;
    let (status, _) = app
        .post("/api/brands", Some(id), json!({ "name": "Sneaky" }))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_publish_landing_page() {
    let app = TestApp::new();
    let id = app.login(Role::BrandAdmin).await;
    let (status, body) = app
        .post(
            "/api/brands/b1/landing-page/publish",
            Some(id),
            json!({ "heroTitle": "Fresh Catch Fridays" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["data"]["landingPage"]["heroTitle"], "Fresh Catch Fridays");
    assert_eq!(
        body["data"]["landingPage"]["heroSubtitle"],
        "Join our exclusive dining circle."
    );
}
