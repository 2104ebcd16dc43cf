//! Integration tests for the server-rendered pages and admin forms.

mod common;

use axum::http::StatusCode;
use common::{
    body_text, build_test_site, get, get_with_cookie, location, post_form, vehicle, ADMIN_COOKIE,
};
use serde_json::json;

fn featured(id: &str, make: &str, model: &str) -> serde_json::Value {
    let mut v = vehicle(id, make, model, "SUV");
    v["featured"] = json!(true);
    v
}

// ---------------------------------------------------------------------------
// Test: marketing pages render
// ---------------------------------------------------------------------------

#[tokio::test]
async fn marketing_pages_render() {
    let site = build_test_site(vec![], false);

    for (uri, needle) in [
        ("/about", "About Summit Auto Group"),
        ("/contact", "Contact us"),
        ("/faq", "Frequently asked questions"),
        ("/financing", "/month"),
    ] {
        let response = get(site.app.clone(), uri).await;
        assert_eq!(response.status(), StatusCode::OK, "{uri}");
        assert!(body_text(response).await.contains(needle), "{uri}");
    }
}

#[tokio::test]
async fn home_shows_featured_vehicles() {
    let site = build_test_site(
        vec![
            vehicle("plain", "Kia", "Soul", "Hatchback"),
            featured("star", "Toyota", "RAV4"),
        ],
        false,
    );

    let html = body_text(get(site.app.clone(), "/").await).await;
    assert!(html.contains("href=\"/inventory/star\""));
    assert!(html.contains("Search 2 vehicles"));
}

#[tokio::test]
async fn financing_uses_query_values() {
    let site = build_test_site(vec![], false);

    let html = body_text(
        get(
            site.app.clone(),
            "/financing?price=25000&down_payment=5000&apr=6&term=60",
        )
        .await,
    )
    .await;
    assert!(html.contains("$387<span>/month</span>"));
}

#[tokio::test]
async fn contact_post_thanks_visitor() {
    let site = build_test_site(vec![], false);

    let response = post_form(
        site.app.clone(),
        "/contact",
        "name=Sam&email=sam%40example.com&phone=&message=Hello",
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("Thanks, Sam!"));

    let response = post_form(site.app.clone(), "/contact", "name=Sam&email=bad", None).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Test: inventory browsing
// ---------------------------------------------------------------------------

#[tokio::test]
async fn inventory_filters_by_query() {
    let site = build_test_site(
        vec![
            vehicle("civic", "Honda", "Civic", "Sedan"),
            vehicle("f150", "Ford", "F-150", "Truck"),
        ],
        false,
    );

    let html = body_text(get(site.app.clone(), "/inventory?make=Ford&max_price=").await).await;
    assert!(html.contains("/inventory/f150"));
    assert!(!html.contains("/inventory/civic"));
    assert!(html.contains("Showing 1 of 2 vehicles"));
}

#[tokio::test]
async fn inventory_ignores_malformed_filters() {
    let site = build_test_site(vec![vehicle("civic", "Honda", "Civic", "Sedan")], false);

    let response = get(site.app.clone(), "/inventory?max_price=cheap").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("/inventory/civic"));
}

#[tokio::test]
async fn vehicle_detail_lists_similar() {
    let site = build_test_site(
        vec![
            vehicle("civic", "Honda", "Civic", "Sedan"),
            vehicle("accord", "Honda", "Accord", "Sedan"),
            vehicle("f150", "Ford", "F-150", "Truck"),
        ],
        false,
    );

    let response = get(site.app.clone(), "/inventory/civic").await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("<h1>2020 Honda Civic</h1>"));
    assert!(html.contains("/inventory/accord"));
    assert!(!html.contains("/inventory/f150"));
}

#[tokio::test]
async fn unknown_vehicle_is_404() {
    let site = build_test_site(vec![], false);

    let response = get(site.app.clone(), "/inventory/missing").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_text(response).await.contains("Vehicle not found"));
}

// ---------------------------------------------------------------------------
// Test: admin forms
// ---------------------------------------------------------------------------

#[tokio::test]
async fn admin_form_creates_vehicle() {
    let site = build_test_site(vec![], true);

    let form = "make=Mazda&model=CX-5&year=2022&trim=Touring&price=27%2C400&mileage=15000\
                &fuelType=Gasoline&transmission=Automatic&exteriorColor=Red&bodyType=SUV\
                &condition=certified&featured=true&mpgCity=&description=";
    let response = post_form(site.app.clone(), "/admin/vehicles", form, Some(ADMIN_COOKIE)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/admin?status=created");

    let stored = site.file_json();
    assert_eq!(stored[0]["title"], "2022 Mazda CX-5 Touring");
    assert_eq!(stored[0]["price"], 27400);
    assert_eq!(stored[0]["condition"], "certified");
    assert_eq!(stored[0]["featured"], true);
}

#[tokio::test]
async fn admin_form_missing_field_shows_error() {
    let site = build_test_site(vec![], true);

    let response = post_form(
        site.app.clone(),
        "/admin/vehicles",
        "make=Mazda&model=&year=2022",
        Some(ADMIN_COOKIE),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(response)
        .await
        .contains("Missing required field: model"));
    assert_eq!(site.file_json(), json!([]));
}

#[tokio::test]
async fn admin_form_deletes_vehicle() {
    let site = build_test_site(
        vec![
            vehicle("a", "Honda", "Civic", "Sedan"),
            vehicle("b", "Ford", "F-150", "Truck"),
        ],
        true,
    );

    let response =
        post_form(site.app.clone(), "/admin/vehicles/a/delete", "", Some(ADMIN_COOKIE)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(site.file_ids(), ["b"]);

    let html = body_text(
        get_with_cookie(site.app.clone(), "/admin?status=deleted", ADMIN_COOKIE).await,
    )
    .await;
    assert!(html.contains("Vehicle removed."));
}

#[tokio::test]
async fn admin_with_writes_disabled_is_read_only() {
    let site = build_test_site(vec![vehicle("a", "Honda", "Civic", "Sedan")], false);
    let before = site.file_bytes();

    let html = body_text(get_with_cookie(site.app.clone(), "/admin", ADMIN_COOKIE).await).await;
    assert!(html.contains("File writes are disabled"));

    let response =
        post_form(site.app.clone(), "/admin/vehicles/a/delete", "", Some(ADMIN_COOKIE)).await;
    assert_eq!(response.status(), StatusCode::NOT_IMPLEMENTED);
    assert_eq!(site.file_bytes(), before);
}

#[tokio::test]
async fn admin_create_with_writes_disabled_is_501_even_for_invalid_forms() {
    let site = build_test_site(vec![vehicle("a", "Honda", "Civic", "Sedan")], false);
    let before = site.file_bytes();

    let response =
        post_form(site.app.clone(), "/admin/vehicles", "model=Civic", Some(ADMIN_COOKIE)).await;
    assert_eq!(response.status(), StatusCode::NOT_IMPLEMENTED);
    let html = body_text(response).await;
    assert!(html.contains("Inventory changes are disabled on this deployment"));
    assert!(!html.contains("Missing required field"));
    assert_eq!(site.file_bytes(), before);
}
