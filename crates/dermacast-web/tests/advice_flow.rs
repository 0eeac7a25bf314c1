//! End-to-end tests for the advice flow against a mock weather endpoint.
//!
//! These run the real WeatherProvider through advise() and the router.

use std::sync::Arc;
use std::time::Duration;

use chrono::TimeZone;
use dermacast_core::{ApiCredential, WeatherConfig};
use dermacast_skin::ConditionTag;
use dermacast_weather::PROVIDER_TZ;
use dermacast_web::{advise, build_provider, create_router, AppState, Outcome};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const OBS_PATH: &str = "/getUltraSrtNcst";

fn weather_config(server: &MockServer, timeout_secs: u64) -> WeatherConfig {
    WeatherConfig {
        endpoint: format!("{}{}", server.uri(), OBS_PATH),
        timeout_secs,
        ..WeatherConfig::default()
    }
}

fn item(category: &str, value: &str) -> serde_json::Value {
    serde_json::json!({
        "baseDate": "20240115",
        "baseTime": "0700",
        "category": category,
        "nx": 57,
        "ny": 126,
        "obsrValue": value
    })
}

fn body(items: Vec<serde_json::Value>) -> serde_json::Value {
    serde_json::json!({
        "response": {
            "header": {"resultCode": "00", "resultMsg": "NORMAL_SERVICE"},
            "body": {
                "dataType": "JSON",
                "items": {"item": items},
                "pageNo": 1,
                "numOfRows": 100,
                "totalCount": 3
            }
        }
    })
}

fn early_morning() -> chrono::DateTime<chrono_tz::Tz> {
    // 07:30 in Seoul, before the publish minute -> 0600 slot
    PROVIDER_TZ
        .with_ymd_and_hms(2024, 1, 15, 7, 30, 0)
        .single()
        .unwrap()
}

fn credential() -> ApiCredential {
    ApiCredential::new("integration-key").unwrap()
}

#[tokio::test]
async fn test_cold_dry_morning() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(OBS_PATH))
        .and(query_param("serviceKey", "integration-key"))
        .and(query_param("base_date", "20240115"))
        .and(query_param("base_time", "0600"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body(vec![
            item("T1H", "-4.2"),
            item("REH", "31"),
            item("RN1", "0"),
            item("WSD", "2.1"),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let provider = build_provider(&weather_config(&server, 10), &credential()).unwrap();
    let model = advise(&provider, early_morning()).await;

    match model.outcome {
        Outcome::Conditions {
            conditions,
            recommendations,
        } => {
            let tags: Vec<_> = conditions.iter().map(|c| c.tag).collect();
            assert_eq!(tags, vec![ConditionTag::Cold, ConditionTag::Dry]);
            let ingredients: Vec<_> = recommendations.iter().map(|r| r.ingredient.as_str()).collect();
            assert_eq!(ingredients, vec!["Ceramide", "Hyaluronic Acid"]);
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[tokio::test]
async fn test_timeout_surfaces_fetch_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(body(vec![item("T1H", "30")]))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let provider = build_provider(&weather_config(&server, 1), &credential()).unwrap();
    let model = advise(&provider, early_morning()).await;

    assert!(model.is_failure());
    assert_eq!(model.recommendation_count(), 0);
    match model.outcome {
        Outcome::FetchFailed { message } => assert!(message.contains("timed out")),
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[tokio::test]
async fn test_non_numeric_item_skipped() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body(vec![
            item("T1H", "unknown"),
            item("REH", "88"),
            item("UV", "10"),
        ])))
        .mount(&server)
        .await;

    let provider = build_provider(&weather_config(&server, 10), &credential()).unwrap();
    let model = advise(&provider, early_morning()).await;

    match model.outcome {
        Outcome::Conditions { conditions, .. } => {
            let tags: Vec<_> = conditions.iter().map(|c| c.tag).collect();
            assert_eq!(tags, vec![ConditionTag::Humid, ConditionTag::HighUv]);
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[tokio::test]
async fn test_no_data_result_code_is_empty_state() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "response": {
                "header": {"resultCode": "03", "resultMsg": "NO_DATA"},
                "body": {"items": ""}
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let provider = build_provider(&weather_config(&server, 10), &credential()).unwrap();
    let model = advise(&provider, early_morning()).await;

    assert!(!model.is_failure());
    assert_eq!(model.recommendation_count(), 0);
    assert!(matches!(model.outcome, Outcome::NoConditions { .. }));
}

#[tokio::test]
async fn test_page_served_over_router() {
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body(vec![
            item("T1H", "31.5"),
            item("REH", "60"),
        ])))
        .mount(&server)
        .await;

    let provider = build_provider(&weather_config(&server, 10), &credential()).unwrap();
    let app = create_router(AppState::new(Arc::new(provider)).with_clock(early_morning));

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("<strong>Hot</strong>"));
    assert!(html.contains("Salicylic Acid"));
}
