mod helpers;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::{Datelike, NaiveDate, Utc};
use helpers::*;
use sona_backend::http;
use sona_backend::models::*;
use sona_backend::services::PressureHistoryStore;
use std::sync::Arc;
use temp_dir::TempDir;
use tower::ServiceExt;

/// Service-level test: quote with both providers available
#[tokio::test]
async fn test_gold_quote_with_live_rate() {
    let dir = TempDir::new().unwrap();
    let state = test_state(
        test_config(&dir.path().join("history.json")),
        Arc::new(StaticRateProvider::new().with_rate("USD", "INR", 83.0)),
        Arc::new(StaticSpotProvider { price: 2350.0 }),
    );

    let quote = state.gold_quotes.quote().await.expect("quote should succeed");

    assert_eq!(quote.spot_price_usd_oz, 2350.0);
    assert_eq!(quote.usd_inr_rate, 83.0);
    assert_eq!(quote.rate_source, RateSource::Live);
    assert_eq!(quote.price_inr_10g, 62709.98);
    assert_eq!(quote.price_inr_10g_with_gst, 64591.28);
    assert_eq!(quote.recommendation, Recommendation::Hold);
}

/// Service-level test: FX failure degrades to the fallback rate
#[tokio::test]
async fn test_gold_quote_falls_back_when_rate_unavailable() {
    let dir = TempDir::new().unwrap();
    let state = test_state(
        test_config(&dir.path().join("history.json")),
        Arc::new(FailingRateProvider),
        Arc::new(StaticSpotProvider { price: 2050.0 }),
    );

    let quote = state.gold_quotes.quote().await.expect("quote should succeed");

    assert_eq!(quote.usd_inr_rate, 83.0); // configured fallback
    assert_eq!(quote.rate_source, RateSource::Fallback);
    assert_eq!(quote.recommendation, Recommendation::Buy);
}

/// Service-level test: a missing spot price is surfaced to the caller
#[tokio::test]
async fn test_gold_quote_unavailable_without_spot_price() {
    let dir = TempDir::new().unwrap();
    let state = test_state(
        test_config(&dir.path().join("history.json")),
        Arc::new(StaticRateProvider::new().with_rate("USD", "INR", 83.0)),
        Arc::new(FailingSpotProvider),
    );

    let err = state.gold_quotes.quote().await.unwrap_err();
    assert!(err.is_upstream_unavailable());
}

/// HTTP test: health marker
#[tokio::test]
async fn test_root_endpoint() {
    let dir = TempDir::new().unwrap();
    let state = test_state(
        test_config(&dir.path().join("history.json")),
        Arc::new(FailingRateProvider),
        Arc::new(FailingSpotProvider),
    );

    let response = http::router(state)
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body, serde_json::json!({"status": "app is running"}));
}

/// HTTP test: /gold degrades to the documented error object, still 200
#[tokio::test]
async fn test_gold_endpoint_error_body_when_spot_unavailable() {
    let dir = TempDir::new().unwrap();
    let state = test_state(
        test_config(&dir.path().join("history.json")),
        Arc::new(StaticRateProvider::new().with_rate("USD", "INR", 83.0)),
        Arc::new(FailingSpotProvider),
    );

    let response = http::router(state)
        .oneshot(Request::builder().uri("/gold").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body, serde_json::json!({"error": "Gold price unavailable"}));
}

/// HTTP test: full /gold payload
#[tokio::test]
async fn test_gold_endpoint_payload() {
    let dir = TempDir::new().unwrap();
    let state = test_state(
        test_config(&dir.path().join("history.json")),
        Arc::new(StaticRateProvider::new().with_rate("USD", "INR", 83.0)),
        Arc::new(StaticSpotProvider { price: 2350.0 }),
    );

    let response = http::router(state)
        .oneshot(Request::builder().uri("/gold").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;

    assert_eq!(body["spot_price_usd_oz"], 2350.0);
    assert_eq!(body["usd_inr_rate"], 83.0);
    assert_eq!(body["rate_source"], "live");
    assert_eq!(body["price_inr_10g"], 62709.98);
    assert_eq!(body["price_inr_10g_with_gst"], 64591.28);
    assert_eq!(body["recommendation"], "HOLD");
    assert!(body["timestamp"].is_string());
}

/// HTTP test: /pressure computes labels and records the daily score
#[tokio::test]
async fn test_pressure_endpoint_payload_and_persistence() {
    let dir = TempDir::new().unwrap();
    let history_path = dir.path().join("history.json");
    let state = test_state(
        test_config(&history_path),
        Arc::new(
            StaticRateProvider::new()
                .with_rate("USD", "EUR", 0.89) // Strengthening: -1
                .with_rate("USD", "INR", 83.0) // Moderate: 0
                .with_rate("USD", "JPY", 152.0), // Elevated: -1
        ),
        Arc::new(FailingSpotProvider),
    );

    let response = http::router(state.clone())
        .oneshot(
            Request::builder()
                .uri("/pressure")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;

    assert_eq!(body["dollar_pressure"], "Strengthening");
    assert_eq!(body["rupee_pressure"], "Moderate");
    assert_eq!(body["market_stress"], "Elevated");
    assert_eq!(body["score"], -2);
    assert_eq!(body["rates"]["usd_eur"], 0.89);
    assert_eq!(body["rates"]["usd_inr"], 83.0);
    assert_eq!(body["rates"]["usd_jpy"], 152.0);
    assert!(body["note"].is_string());

    // The call appended today's score to the history file
    let log = state.history.load();
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].date, Utc::now().date_naive());
    assert_eq!(log[0].score, -2);
}

/// HTTP test: unavailable rates degrade every channel to neutral
#[tokio::test]
async fn test_pressure_endpoint_all_rates_unavailable() {
    let dir = TempDir::new().unwrap();
    let state = test_state(
        test_config(&dir.path().join("history.json")),
        Arc::new(FailingRateProvider),
        Arc::new(FailingSpotProvider),
    );

    let response = http::router(state)
        .oneshot(
            Request::builder()
                .uri("/pressure")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;

    assert_eq!(body["dollar_pressure"], "Stable");
    assert_eq!(body["rupee_pressure"], "Moderate");
    assert_eq!(body["market_stress"], "Normal");
    assert_eq!(body["score"], 0);
    assert!(body["rates"]["usd_eur"].is_null());
    assert!(body["rates"]["usd_inr"].is_null());
    assert!(body["rates"]["usd_jpy"].is_null());
}

/// HTTP test: /pressure/history serves the persisted log back
#[tokio::test]
async fn test_pressure_history_endpoint() {
    let dir = TempDir::new().unwrap();
    let history_path = dir.path().join("history.json");
    let state = test_state(
        test_config(&history_path),
        Arc::new(FailingRateProvider),
        Arc::new(FailingSpotProvider),
    );

    state
        .history
        .append(HistoryEntry::new(
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            1,
        ))
        .await
        .unwrap();

    let response = http::router(state)
        .oneshot(
            Request::builder()
                .uri("/pressure/history")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;

    assert_eq!(body["max_days"], 7);
    assert_eq!(
        body["days"],
        serde_json::json!([{"date": "2024-06-01", "score": 1}])
    );
}

/// History cap: 10 appends leave exactly the newest 7 entries
#[tokio::test]
async fn test_history_cap_keeps_newest_seven() {
    let dir = TempDir::new().unwrap();
    let store = PressureHistoryStore::new(dir.path().join("history.json"), 7).unwrap();

    for day in 1..=10 {
        store
            .append(HistoryEntry::new(
                NaiveDate::from_ymd_opt(2024, 6, day).unwrap(),
                0,
            ))
            .await
            .unwrap();
    }

    let log = store.load();
    assert_eq!(log.len(), 7);

    // The 4th through 10th appended entries survive, oldest 3 evicted
    let days: Vec<u32> = log.iter().map(|e| e.date.day()).collect();
    assert_eq!(days, vec![4, 5, 6, 7, 8, 9, 10]);
}

/// History persistence round-trip across store instances
#[tokio::test]
async fn test_history_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("history.json");
    let entry = HistoryEntry::new(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(), 3);

    {
        let store = PressureHistoryStore::new(path.clone(), 7).unwrap();
        store.append(entry).await.unwrap();
    }

    // A fresh store over the same file sees the appended entry last
    let store = PressureHistoryStore::new(path, 7).unwrap();
    let log = store.load();
    assert_eq!(log.last(), Some(&entry));
}

/// Collect a response body as JSON
async fn read_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
