use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use sat_connect::cache::{OtaSettingsCache, SettingsSource};
use sat_connect::{app, AppState};

fn test_app() -> Router {
    app(AppState::new(OtaSettingsCache::default(), SettingsSource::default()))
}

async fn send(app: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(match body {
            Some(v) => Body::from(v.to_string()),
            None => Body::empty(),
        })
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn post(uri: &str, body: Value) -> (StatusCode, Value) {
    send(test_app(), "POST", uri, Some(body)).await
}

/// Decimals are serialized as strings; compare numerically.
fn dec(value: &Value) -> f64 {
    value.as_str().expect("decimal as string").parse().unwrap()
}

#[tokio::test]
async fn resolve_net_only_uses_default_factor() {
    let (status, body) = post("/api/pricing/resolve", json!({ "net": 1000 })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(dec(&body["net"]), 1000.0);
    assert_eq!(dec(&body["public"]), 1500.0);
    assert_eq!(dec(&body["factor"]), 1.5);
    assert_eq!(dec(&body["margin_percent"]), 33.33);
}

#[tokio::test]
async fn resolve_accepts_string_amounts() {
    let (status, body) = post("/api/pricing/resolve", json!({ "net": "1000", "public": "1650" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(dec(&body["factor"]), 1.65);
    assert_eq!(dec(&body["margin_percent"]), 39.39);
}

#[tokio::test]
async fn resolve_insufficient_data_is_422() {
    let (status, body) = post("/api/pricing/resolve", json!({ "factor": 1.5 })).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error_type"], "InsufficientPricingData");
}

#[tokio::test]
async fn resolve_factor_out_of_range_is_422() {
    let (status, body) = post("/api/pricing/resolve", json!({ "net": 100, "public": 1200 })).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error_type"], "FactorOutOfRange");
}

#[tokio::test]
async fn net_revenue_after_commission() {
    let (status, body) = post(
        "/api/pricing/net-revenue",
        json!({ "pvp": 1650, "commission_percent": 25 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(dec(&body["net_revenue"]), 1237.5);

    let (status, body) = post(
        "/api/pricing/net-revenue",
        json!({ "pvp": 1650, "commission_percent": 150 }),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error_type"], "InvalidCommission");
}

#[tokio::test]
async fn commission_founder_window() {
    let (status, body) = post(
        "/api/pricing/commission",
        json!({
            "channel_name": "Viator",
            "base_commission": 25,
            "supplier_plan": "FOUNDER",
            "account_age_months": 3
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(dec(&body["effective_commission"]), 0.0);

    let (_, body) = post(
        "/api/pricing/commission",
        json!({
            "channel_name": "Viator",
            "base_commission": 25,
            "supplier_plan": "FOUNDER",
            "account_age_months": 6
        }),
    )
    .await;
    assert_eq!(dec(&body["effective_commission"]), 25.0);
}

#[tokio::test]
async fn commission_base_from_ota_settings() {
    let (status, body) = post("/api/pricing/commission", json!({ "channel_name": "expedia" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(dec(&body["base_commission"]), 20.0);
    assert_eq!(dec(&body["effective_commission"]), 20.0);

    let (status, body) = post("/api/pricing/commission", json!({ "channel_name": "klook" })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error_type"], "UnknownChannel");
}

#[tokio::test]
async fn seasonal_lookup() {
    let seasons = json!([
        { "from": "2026-12-01", "to": "2026-12-31", "net_rate_adult": 1100 },
        { "from": "2026-12-20", "to": "2027-01-05", "net_rate_adult": 1500 }
    ]);
    let (status, body) = post(
        "/api/pricing/seasonal",
        json!({ "date": "2026-12-24T00:00:00Z", "seasons": seasons }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(dec(&body["season"]["net_rate_adult"]), 1100.0);

    let (_, body) = post(
        "/api/pricing/seasonal",
        json!({ "date": "2026-06-01T00:00:00Z", "seasons": seasons }),
    )
    .await;
    assert!(body["season"].is_null());
}

#[tokio::test]
async fn quotes_report_profit_shield() {
    let (status, body) = post("/api/pricing/quote", json!({ "net": 1000 })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["mode"], "BOTTOM_UP");
    assert_eq!(dec(&body["suggested_pvp"]), 1500.0);
    assert_eq!(body["profit_shield_ok"], true);

    let (_, body) = post("/api/pricing/reverse-margin", json!({ "pvp": 1200, "net": 1000 })).await;
    assert_eq!(body["mode"], "TOP_DOWN");
    assert_eq!(dec(&body["margin_percent"]), 16.67);
    assert_eq!(body["profit_shield_ok"], false);
}

#[tokio::test]
async fn tour_sheet_prices_variants() {
    let (status, body) = post(
        "/api/pricing/tour-sheet",
        json!({
            "net_rate_adult": 1000,
            "net_rate_child": 600,
            "private_factor": 1.8,
            "private_min_pax": 4,
            "private_min_pax_net_rate": 5000
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(dec(&body["suggested_pvp_adult"]), 1500.0);
    assert_eq!(dec(&body["suggested_pvp_child"]), 900.0);
    assert_eq!(dec(&body["suggested_pvp_private"]), 9000.0);
    assert_eq!(dec(&body["per_pax_cost"]), 1250.0);
}

fn complete_tour() -> Value {
    json!({
        "id": "1113066",
        "name": "Holbox Island Full Day",
        "provider": "Mundo Maya",
        "net_rate": 1000,
        "public_price": 1650,
        "infant_age": 4,
        "images": ["https://cdn.example.com/holbox.jpg"],
        "duration": "10 hours",
        "ops_days": "Mon-Sat",
        "cxl_policy": "24h full refund",
        "meeting_point": "Hotel lobby pickup",
        "landing_page_url": "https://example.com/holbox",
        "storytelling": "https://example.com/holbox/story",
        "channels": { "viator": "Active", "gyg": "Active", "expedia": "Inactive" }
    })
}

#[tokio::test]
async fn audit_tour_diagnostics() {
    let (status, body) = post("/api/audit/tour", complete_tour()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["health"]["score"], "HEALTHY");
    assert_eq!(body["health"]["details"], "✅ PRODUCT HEALTHY");
    assert_eq!(body["distribution"]["active_count"], 2);
    assert_eq!(body["distribution"]["score"], "⚠️ Fair (2/4 Active)");
    assert_eq!(body["economics"]["status"], "B2B_READY");
    assert_eq!(dec(&body["economics"]["multiplier"]), 1.65);
}

#[tokio::test]
async fn audit_never_fails_on_sparse_data() {
    let (status, body) = post("/api/audit/tour", json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["health"]["score"], "INCOMPLETE");
    assert_eq!(body["distribution"]["active_count"], 0);
    assert_eq!(body["economics"]["status"], "LOSS_WARNING");
    assert_eq!(dec(&body["economics"]["margin"]), 0.0);
}

#[tokio::test]
async fn audit_health_empty_id() {
    let mut tour = complete_tour();
    tour["id"] = json!("");
    let (status, body) = post("/api/audit/health", tour).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["score"], "CRITICAL");
    assert_eq!(body["details"], "❌ ENTER ID");
}

#[tokio::test]
async fn audit_distribution_endpoint() {
    let (_, body) = post(
        "/api/audit/distribution",
        json!({ "channels": { "expedia": "Active", "viator": "Active", "gyg": "Active", "civitatis": "Active" } }),
    )
    .await;
    assert_eq!(body["active_count"], 4);
    assert_eq!(body["score"], "🌐 Healthy (4/4 Active)");
}

#[tokio::test]
async fn audit_suitability_lists_issues() {
    let mut tour = complete_tour();
    tour["public_price"] = json!(900);
    let (status, body) = post("/api/audit/suitability", tour).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["is_suitable"], false);
    assert_eq!(body["issues"], json!(["Negative price parity detected (PVP <= Net Rate)"]));
    assert_eq!(body["ota_score"], 40);
    assert_eq!(body["rating"], "Moderate Distribution");
    assert_eq!(body["active_channels"], json!(["gyg", "viator"]));
}

#[tokio::test]
async fn audit_tour_with_extreme_prices_still_answers() {
    let mut tour = complete_tour();
    tour["net_rate"] = json!("0.0000001");
    tour["public_price"] = json!("79228162514264337593543950335");
    let (status, body) = post("/api/audit/tour", tour).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["economics"]["status"], "LOSS_WARNING");
}

#[tokio::test]
async fn resolve_overflow_is_422() {
    let (status, body) = post(
        "/api/pricing/resolve",
        json!({ "net": "79228162514264337593543950335", "factor": 2 }),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error_type"], "AmountOutOfRange");
}

#[tokio::test]
async fn ota_settings_listing_and_invalidation() {
    let app = test_app();

    let (status, body) = send(app.clone(), "GET", "/api/ota-settings", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 4);
    assert_eq!(body[0]["channel_key"], "civitatis");

    let (_, health) = send(app.clone(), "GET", "/health", None).await;
    assert_eq!(health["status"], "ok");
    assert_eq!(health["ota_cache"]["is_cached"], true);

    let (status, body) = send(app.clone(), "POST", "/api/ota-settings/invalidate", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["invalidated"], true);
    assert_eq!(body["stats"]["is_cached"], false);
}
