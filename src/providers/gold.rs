use crate::config::ProviderConfig;
use crate::error::{AppError, AppResult, ProviderError};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

/// Source of the gold spot price
#[async_trait]
pub trait SpotPriceProvider: Send + Sync {
    /// Latest gold price in USD per troy ounce
    async fn spot_usd_per_oz(&self) -> Result<f64, ProviderError>;
}

/// Response from the gold-api.com style spot endpoint
#[derive(Debug, Deserialize)]
struct GoldApiResponse {
    #[allow(dead_code)]
    name: Option<String>,
    price: Option<f64>,
}

/// Gold spot price client
pub struct GoldApiClient {
    client: reqwest::Client,
    url: String,
}

impl GoldApiClient {
    /// Create a new spot price client with the configured request timeout
    pub fn new(config: &ProviderConfig) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url: config.gold_price_url.clone(),
        })
    }
}

#[async_trait]
impl SpotPriceProvider for GoldApiClient {
    async fn spot_usd_per_oz(&self) -> Result<f64, ProviderError> {
        debug!(url = %self.url, "Fetching gold spot price");

        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status.as_u16()));
        }

        let payload: GoldApiResponse = response.json().await?;

        let price = payload
            .price
            .ok_or_else(|| ProviderError::MissingValue("price".to_string()))?;

        if !price.is_finite() || price <= 0.0 {
            return Err(ProviderError::MalformedPayload(format!(
                "non-positive spot price {}",
                price
            )));
        }

        debug!(price, "Fetched gold spot price");
        Ok(price)
    }
}
