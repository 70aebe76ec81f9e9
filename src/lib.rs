//! Sona Backend Library
//!
//! This module exposes the backend components for use by tests and other
//! consumers.

pub mod config;
pub mod error;
pub mod http;
pub mod models;
pub mod providers;
pub mod services;

// Re-export commonly used types
pub use config::AppConfig;
pub use error::{AppError, AppResult};

use providers::{RateProvider, SpotPriceProvider};
use services::{GoldQuoteService, PressureHistoryStore, PressureService};
use std::sync::Arc;

/// Application state containing the services behind the HTTP surface
pub struct AppState {
    pub gold_quotes: GoldQuoteService,
    pub pressure: PressureService,
    pub history: Arc<PressureHistoryStore>,
    pub config: AppConfig,
}

impl AppState {
    /// Create a new AppState wiring the given providers into the services
    pub fn new(
        config: AppConfig,
        rate_provider: Arc<dyn RateProvider>,
        spot_provider: Arc<dyn SpotPriceProvider>,
    ) -> AppResult<Self> {
        let history = Arc::new(PressureHistoryStore::new(
            config.pressure.history_path.clone(),
            config.pressure.max_days,
        )?);

        let gold_quotes = GoldQuoteService::new(
            spot_provider,
            rate_provider.clone(),
            config.pricing.clone(),
        );

        let pressure = PressureService::new(
            rate_provider,
            history.clone(),
            config.pressure.clone(),
        );

        Ok(Self {
            gold_quotes,
            pressure,
            history,
            config,
        })
    }
}
