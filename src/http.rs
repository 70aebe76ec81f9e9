//! HTTP surface for the Sona backend.
//!
//! Thin transport layer over the services: handlers translate GET
//! requests into service calls and serialize the results. Upstream data
//! unavailability never produces a 5xx; every handler degrades to a
//! best-effort 200 payload.

use crate::models::{GoldQuote, HistoryEntry, PressureSnapshot};
use crate::AppState;
use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

/// Disclaimer attached to every pressure response
const PRESSURE_NOTE: &str =
    "Indicative signal derived from daily FX moves; not investment advice.";

#[derive(Serialize)]
struct StatusResponse {
    status: &'static str,
}

#[derive(Serialize)]
#[serde(untagged)]
enum GoldResponse {
    Quote(GoldQuote),
    Unavailable { error: &'static str },
}

#[derive(Serialize)]
struct PressureResponse {
    #[serde(flatten)]
    snapshot: PressureSnapshot,
    note: &'static str,
}

#[derive(Serialize)]
struct HistoryResponse {
    days: Vec<HistoryEntry>,
    max_days: usize,
}

/// Build the application router
///
/// CORS is wide open so browser clients can call the API from any
/// origin.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/gold", get(gold))
        .route("/pressure", get(pressure))
        .route("/pressure/history", get(pressure_history))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Health marker
async fn root() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "app is running",
    })
}

/// Computed INR gold price per 10 grams
async fn gold(State(state): State<Arc<AppState>>) -> Json<GoldResponse> {
    match state.gold_quotes.quote().await {
        Ok(quote) => Json(GoldResponse::Quote(quote)),
        Err(e) => {
            warn!("Gold quote unavailable: {}", e);
            Json(GoldResponse::Unavailable {
                error: "Gold price unavailable",
            })
        }
    }
}

/// Qualitative currency pressure snapshot
async fn pressure(State(state): State<Arc<AppState>>) -> Json<PressureResponse> {
    let snapshot = state.pressure.snapshot().await;

    Json(PressureResponse {
        snapshot,
        note: PRESSURE_NOTE,
    })
}

/// Persisted daily score history
async fn pressure_history(State(state): State<Arc<AppState>>) -> Json<HistoryResponse> {
    Json(HistoryResponse {
        days: state.history.load(),
        max_days: state.config.pressure.max_days,
    })
}
