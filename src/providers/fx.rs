use crate::config::ProviderConfig;
use crate::error::{AppError, AppResult, ProviderError};
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::debug;

/// Source of foreign-exchange rates
///
/// Implementations must resolve within their configured timeout and
/// return an explicit [`ProviderError`] instead of raising on transport
/// failures, so callers can apply their documented fallbacks.
#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Units of `target` currency per one unit of `base` currency
    async fn rate(&self, base: &str, target: &str) -> Result<f64, ProviderError>;
}

/// Response from the open.er-api.com style FX endpoint
#[derive(Debug, Deserialize)]
struct ErApiResponse {
    result: Option<String>,
    rates: Option<HashMap<String, f64>>,
}

/// FX rate client for the open exchange-rate API
///
/// `GET {base_url}/{base}` returns every rate against `base`; the
/// requested target is extracted from the `rates` map.
pub struct OpenErApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl OpenErApiClient {
    /// Create a new FX client with the configured request timeout
    pub fn new(config: &ProviderConfig) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.fx_base_url.clone(),
        })
    }
}

#[async_trait]
impl RateProvider for OpenErApiClient {
    async fn rate(&self, base: &str, target: &str) -> Result<f64, ProviderError> {
        let url = format!("{}/{}", self.base_url, base);
        debug!(url = %url, base, target, "Fetching FX rate");

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status.as_u16()));
        }

        let payload: ErApiResponse = response.json().await?;

        if payload.result.as_deref() != Some("success") {
            return Err(ProviderError::MalformedPayload(format!(
                "result field was {:?}",
                payload.result
            )));
        }

        let rate = payload
            .rates
            .and_then(|rates| rates.get(target).copied())
            .ok_or_else(|| ProviderError::MissingValue(format!("{}/{}", base, target)))?;

        if !rate.is_finite() || rate <= 0.0 {
            return Err(ProviderError::MalformedPayload(format!(
                "non-positive rate {} for {}/{}",
                rate, base, target
            )));
        }

        debug!(base, target, rate, "Fetched FX rate");
        Ok(rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_er_api_response_parsing() {
        let body = r#"{"result":"success","rates":{"INR":83.12,"EUR":0.92}}"#;
        let payload: ErApiResponse = serde_json::from_str(body).unwrap();
        assert_eq!(payload.result.as_deref(), Some("success"));
        assert_eq!(payload.rates.unwrap().get("INR"), Some(&83.12));
    }

    #[test]
    fn test_er_api_response_tolerates_missing_fields() {
        let payload: ErApiResponse = serde_json::from_str("{}").unwrap();
        assert!(payload.result.is_none());
        assert!(payload.rates.is_none());
    }
}
