use axum::body::{to_bytes, Body};
use axum::http::Request;
use axum::response::Response;
use repmap_core::{payload_from_json, HostConfig};
use repmap_geo::{BoundarySet, FeatureCollection, MapView, MAP_UNAVAILABLE_MESSAGE};
use tower::ServiceExt;

use super::*;

const BOUNDARIES: &str = r#"{
    "type": "FeatureCollection",
    "features": [
        {"type": "Feature", "properties": {"name": "Москва"}, "geometry": {"type": "Polygon", "coordinates": [[[37.3, 55.5], [37.9, 55.5], [37.6, 55.9], [37.3, 55.5]]]}},
        {"type": "Feature", "properties": {"name": "Свердловская область"}, "geometry": {"type": "Polygon", "coordinates": [[[60.0, 56.0], [61.0, 56.0], [60.5, 57.0], [60.0, 56.0]]]}},
        {"type": "Feature", "properties": {"name": "Атлантида"}, "geometry": null}
    ]
}"#;

fn ready_map() -> MapView {
    let collection = FeatureCollection::from_json(BOUNDARIES, "test boundaries").expect("boundaries");
    MapView::Ready(BoundarySet::new(collection))
}

fn unavailable_map() -> MapView {
    MapView::Unavailable {
        message: MAP_UNAVAILABLE_MESSAGE.to_string(),
    }
}

fn app(map: MapView) -> Router {
    let host = HostConfig {
        is_admin: true,
        session_token: Some("sess-secret".to_string()),
    };
    let snapshot = Snapshot::build(payload_from_json(None), map, host);
    build_app(AppState {
        snapshot: Arc::new(snapshot),
    })
}

async fn send(app: Router, uri: &str) -> Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).expect("request"))
        .await
        .expect("response")
}

async fn json_body(response: Response) -> serde_json::Value {
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    serde_json::from_slice(&body).expect("json parse")
}

fn card_ids(json: &serde_json::Value) -> Vec<i64> {
    json["data"]["representatives"]
        .as_array()
        .expect("representatives array")
        .iter()
        .map(|card| card["id"].as_i64().expect("card id"))
        .collect()
}

#[test]
fn api_error_map_unavailable_maps_to_503() {
    let response = ApiError::new("req-1", "map_unavailable", "down").into_response();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[test]
fn api_error_internal_error_maps_to_500() {
    let response = ApiError::new("req-1", "internal_error", "inconsistent").into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn api_error_unknown_code_maps_to_500() {
    let response = ApiError::new("req-1", "something_else", "boom").into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

// -------------------------------------------------------------------------
// Health, host and request ids
// -------------------------------------------------------------------------

#[tokio::test]
async fn health_is_ok_when_map_loaded() {
    let response = send(app(ready_map()), "/api/v1/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;
    assert_eq!(json["data"]["status"], "ok");
    assert_eq!(json["data"]["representatives"], 7);
    assert!(json["meta"]["request_id"].is_string());
}

#[tokio::test]
async fn health_is_degraded_without_map() {
    let response = send(app(unavailable_map()), "/api/v1/health").await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let json = json_body(response).await;
    assert_eq!(json["data"]["map"], "unavailable");
}

#[tokio::test]
async fn request_id_header_is_echoed() {
    let response = app(ready_map())
        .oneshot(
            Request::builder()
                .uri("/api/v1/health")
                .header("x-request-id", "req-abc")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(
        response
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok()),
        Some("req-abc")
    );
    let json = json_body(response).await;
    assert_eq!(json["meta"]["request_id"], "req-abc");
}

#[tokio::test]
async fn host_exposes_admin_flag_but_not_session() {
    let response = send(app(ready_map()), "/api/v1/host").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;
    assert_eq!(json["data"]["is_admin"], true);
    assert!(!json.to_string().contains("sess-secret"));
}

// -------------------------------------------------------------------------
// Representatives
// -------------------------------------------------------------------------

#[tokio::test]
async fn representatives_without_query_lists_everyone() {
    let json = json_body(send(app(ready_map()), "/api/v1/representatives").await).await;
    assert_eq!(json["data"]["state"], "matches");
    assert_eq!(card_ids(&json), vec![101, 102, 103, 104, 105, 106, 107]);
}

#[tokio::test]
async fn representatives_filtered_by_query() {
    let json = json_body(send(app(ready_map()), "/api/v1/representatives?q=PETROVA").await).await;
    assert_eq!(json["data"]["state"], "matches");
    assert_eq!(card_ids(&json), vec![102]);
    assert_eq!(json["data"]["representatives"][0]["initials"], "ПА");
}

#[tokio::test]
async fn representatives_no_matches_is_not_an_error() {
    let response = send(app(ready_map()), "/api/v1/representatives?q=zzz").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;
    assert_eq!(json["data"]["state"], "no_matches");
    assert_eq!(json["data"]["query"], "zzz");
}

// -------------------------------------------------------------------------
// Regions
// -------------------------------------------------------------------------

#[tokio::test]
async fn regions_lists_districts_with_members() {
    let json = json_body(send(app(ready_map()), "/api/v1/regions").await).await;
    let districts = json["data"].as_array().expect("data array");
    assert_eq!(districts.len(), 8);
    assert_eq!(districts[0]["id"], "ЦФО");
    assert_eq!(districts[0]["regions"].as_array().map(Vec::len), Some(18));
    let total: usize = districts
        .iter()
        .map(|d| d["regions"].as_array().map_or(0, Vec::len))
        .sum();
    assert_eq!(total, 85);
}

#[tokio::test]
async fn region_panel_includes_district_level_reps() {
    let json = json_body(send(app(ready_map()), "/api/v1/regions/RU-SVE").await).await;
    assert_eq!(json["data"]["state"], "selected");
    assert_eq!(json["data"]["heading"]["kind"], "region");
    assert_eq!(json["data"]["heading"]["district_id"], "УФО");
    assert_eq!(card_ids(&json), vec![103]);
}

#[tokio::test]
async fn district_panel_accepts_percent_encoded_code() {
    let json = json_body(send(app(ready_map()), "/api/v1/regions/%D0%A6%D0%A4%D0%9E").await).await;
    assert_eq!(json["data"]["heading"]["kind"], "district");
    assert_eq!(json["data"]["heading"]["code"], "ЦФО");
    assert_eq!(card_ids(&json), vec![101]);
}

#[tokio::test]
async fn unknown_region_gives_empty_panel() {
    let response = send(app(ready_map()), "/api/v1/regions/XX-999").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;
    assert_eq!(json["data"]["heading"]["kind"], "unknown");
    assert_eq!(json["data"]["heading"]["name"], "XX-999");
    assert!(card_ids(&json).is_empty());
}

// -------------------------------------------------------------------------
// Map and stats
// -------------------------------------------------------------------------

#[tokio::test]
async fn map_paints_every_region() {
    let response = send(app(ready_map()), "/api/v1/map?selected=RU-MOW").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;

    let regions = json["data"]["regions"].as_array().expect("regions array");
    assert_eq!(regions.len(), 85);
    let moscow = regions
        .iter()
        .find(|r| r["id"] == "RU-MOW")
        .expect("RU-MOW paint");
    assert_eq!(moscow["fill"], "selected");
    assert_eq!(moscow["has_geometry"], true);
    let sverdlovsk = regions
        .iter()
        .find(|r| r["id"] == "RU-SVE")
        .expect("RU-SVE paint");
    assert_eq!(sverdlovsk["fill"], "covered");
    assert_eq!(json["data"]["unmatched_features"], serde_json::json!(["Атлантида"]));
}

#[tokio::test]
async fn map_unavailable_returns_generic_message() {
    let response = send(app(unavailable_map()), "/api/v1/map").await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let json = json_body(response).await;
    assert_eq!(json["error"]["code"], "map_unavailable");
    assert_eq!(json["error"]["message"], MAP_UNAVAILABLE_MESSAGE);
}

#[tokio::test]
async fn stats_report_sample_source() {
    let json = json_body(send(app(ready_map()), "/api/v1/stats").await).await;
    assert_eq!(json["data"]["source"], "sample");
    assert_eq!(json["data"]["representatives"], 7);
    assert_eq!(json["data"]["dropped_records"], 0);
    assert!(json["data"]["regions_covered"].as_u64().unwrap_or(0) > 0);
}
