use async_trait::async_trait;
use sona_backend::config::AppConfig;
use sona_backend::error::ProviderError;
use sona_backend::providers::{RateProvider, SpotPriceProvider};
use sona_backend::AppState;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Rate provider serving a fixed table of rates
///
/// Pairs not present in the table answer with `MissingValue`, which is
/// what the real client returns for a currency absent from the payload.
pub struct StaticRateProvider {
    rates: HashMap<String, f64>,
}

impl StaticRateProvider {
    pub fn new() -> Self {
        Self {
            rates: HashMap::new(),
        }
    }

    pub fn with_rate(mut self, base: &str, target: &str, rate: f64) -> Self {
        self.rates.insert(format!("{}/{}", base, target), rate);
        self
    }
}

#[async_trait]
impl RateProvider for StaticRateProvider {
    async fn rate(&self, base: &str, target: &str) -> Result<f64, ProviderError> {
        self.rates
            .get(&format!("{}/{}", base, target))
            .copied()
            .ok_or_else(|| ProviderError::MissingValue(format!("{}/{}", base, target)))
    }
}

/// Rate provider simulating a timed-out upstream
pub struct FailingRateProvider;

#[async_trait]
impl RateProvider for FailingRateProvider {
    async fn rate(&self, _base: &str, _target: &str) -> Result<f64, ProviderError> {
        Err(ProviderError::Timeout)
    }
}

/// Spot provider serving a fixed USD/oz price
pub struct StaticSpotProvider {
    pub price: f64,
}

#[async_trait]
impl SpotPriceProvider for StaticSpotProvider {
    async fn spot_usd_per_oz(&self) -> Result<f64, ProviderError> {
        Ok(self.price)
    }
}

/// Spot provider simulating a timed-out upstream
pub struct FailingSpotProvider;

#[async_trait]
impl SpotPriceProvider for FailingSpotProvider {
    async fn spot_usd_per_oz(&self) -> Result<f64, ProviderError> {
        Err(ProviderError::Timeout)
    }
}

/// Default config pointed at a test-owned history file
pub fn test_config(history_path: &Path) -> AppConfig {
    let mut config = AppConfig::default();
    config.pressure.history_path = history_path.to_path_buf();
    config
}

/// Build application state around the given providers
pub fn test_state(
    config: AppConfig,
    rate_provider: Arc<dyn RateProvider>,
    spot_provider: Arc<dyn SpotPriceProvider>,
) -> Arc<AppState> {
    Arc::new(
        AppState::new(config, rate_provider, spot_provider)
            .expect("Failed to build test AppState"),
    )
}
