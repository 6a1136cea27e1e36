//! End-to-end tests of the HTTP conversion API.

use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use lunar_birthday::Date;
use lunar_birthday::config::ProjectionConfig;
use lunar_birthday::http_server::{ConvertState, HttpServer, HttpServerConfig};
use serde_json::{Value, json};
use tower::ServiceExt;

fn fixed_today() -> Date {
    Date::from_gregorian(2025, 6, 1).unwrap()
}

fn router() -> Router {
    let state = Arc::new(ConvertState::with_clock(
        ProjectionConfig::default(),
        fixed_today,
    ));
    HttpServer::with_state(HttpServerConfig::default(), state).router()
}

async fn post_convert(body: Body) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/api/convert")
        .header(header::CONTENT_TYPE, "application/json")
        .body(body)
        .unwrap();
    let response = router().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn convert(body: Value) -> (StatusCode, Value) {
    post_convert(Body::from(body.to_string())).await
}

#[tokio::test]
async fn converts_birth_date() {
    let (status, body) = convert(json!({
        "birth_date": "2000-05-11",
        "years_count": 3,
        "include_leap": true,
        "start_year": 2024
    }))
    .await;

    assert_eq!(StatusCode::OK, status);
    assert_eq!("2000年05月11日", body["birth_solar"]);
    assert_eq!("农历2000年四月初八", body["birth_lunar"]);
    assert_eq!("四月", body["lunar_month_name"]);
    assert_eq!("初八", body["lunar_day_name"]);

    let results = body["results"].as_array().unwrap();
    let rows: Vec<_> = results
        .iter()
        .map(|r| {
            (
                r["solar_year"].as_i64().unwrap(),
                r["solar_date"].as_str().unwrap().to_owned(),
                r["weekday"].as_str().unwrap().to_owned(),
                r["age"].as_i64().unwrap(),
                r["age_xu"].as_i64().unwrap(),
                r["is_past"].as_bool().unwrap(),
            )
        })
        .collect();
    assert_eq!(
        vec![
            (2024, "2024年05月15日".to_owned(), "周三".to_owned(), 24, 25, true),
            (2025, "2025年05月05日".to_owned(), "周一".to_owned(), 25, 26, true),
            (2026, "2026年05月24日".to_owned(), "周日".to_owned(), 26, 27, false),
        ],
        rows
    );
    assert!(results.iter().all(|r| r["lunar_date"] == "四月初八"));
    assert!(results.iter().all(|r| r["is_leap_birthday"] == false));
}

#[tokio::test]
async fn flags_leap_month_recurrence() {
    let (status, body) = convert(json!({
        "birth_date": "2017-07-23",
        "years_count": 10,
        "include_leap": true
    }))
    .await;

    assert_eq!(StatusCode::OK, status);
    assert_eq!("闰六月", body["lunar_month_name"]);
    assert_eq!(true, body["is_birth_leap"]);

    let results = body["results"].as_array().unwrap();
    assert_eq!(10, results.len());
    let flagged: Vec<_> = results
        .iter()
        .filter(|r| r["is_leap_birthday"] == true)
        .map(|r| (r["solar_date"].as_str().unwrap(), r["lunar_date"].as_str().unwrap()))
        .collect();
    assert_eq!(
        vec![("2017年07月23日", "闰六月初一"), ("2025年07月25日", "闰六月初一")],
        flagged
    );
}

#[tokio::test]
async fn rejects_invalid_years_count() {
    for years_count in [0, -3, 1000] {
        let (status, body) = convert(json!({
            "birth_date": "2000-05-11",
            "years_count": years_count
        }))
        .await;
        assert_eq!(StatusCode::BAD_REQUEST, status, "{years_count}");
        assert!(body["error"].as_str().unwrap().contains("years_count"));
    }
}

#[tokio::test]
async fn rejects_out_of_range_birth_date() {
    let (status, body) = convert(json!({ "birth_date": "1899-12-31", "years_count": 3 })).await;
    assert_eq!(StatusCode::BAD_REQUEST, status);
    assert!(body["error"].as_str().unwrap().contains("outside the supported range"));
    assert!(body.get("results").is_none());
}

#[tokio::test]
async fn rejects_malformed_bodies() {
    let (status, body) = convert(json!({ "years_count": 3 })).await;
    assert_eq!(StatusCode::BAD_REQUEST, status);
    assert!(body["error"].as_str().unwrap().contains("birth_date"));

    let (status, body) = convert(json!({ "birth_date": "2000/05/11" })).await;
    assert_eq!(StatusCode::BAD_REQUEST, status);
    assert!(body["error"].is_string());

    let (status, body) = post_convert(Body::from("{not json")).await;
    assert!(status.is_client_error());
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn health_check() {
    let request = Request::builder()
        .uri("/api/health")
        .body(Body::empty())
        .unwrap();
    let response = router().oneshot(request).await.unwrap();
    assert_eq!(StatusCode::OK, response.status());
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!("ok", body["status"]);
}
