use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Pricing configuration for the gold quote endpoint
#[derive(Debug, Clone)]
pub struct PricingConfig {
    /// Fractional GST surcharge applied on top of the converted price
    pub gst_rate: f64,
    /// Rate substituted when the live USD/INR rate is unavailable
    pub fallback_usd_inr: f64,
    /// Spot price (USD/oz) above which the recommendation is HOLD
    pub hold_above_usd: f64,
    /// Spot price (USD/oz) above which the recommendation is ACCUMULATE
    pub accumulate_above_usd: f64,
}

/// Pressure classification thresholds and history settings
#[derive(Debug, Clone)]
pub struct PressureConfig {
    /// USD/EUR below this means the dollar is strengthening
    pub eur_strong_below: f64,
    /// USD/EUR above this means the dollar is weakening
    pub eur_weak_above: f64,
    /// USD/INR below this means low rupee pressure
    pub inr_low_below: f64,
    /// USD/INR above this means high rupee pressure
    pub inr_high_above: f64,
    /// USD/JPY below this means low market stress
    pub jpy_calm_below: f64,
    /// USD/JPY above this means elevated market stress
    pub jpy_stressed_above: f64,
    /// File holding the persisted daily score history
    pub history_path: PathBuf,
    /// Maximum number of daily entries retained (oldest evicted first)
    pub max_days: usize,
}

/// Outbound provider configuration
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// FX rate API base URL; the base currency is appended as a path segment
    pub fx_base_url: String,
    /// Gold spot price endpoint URL
    pub gold_price_url: String,
    /// Per-request timeout for all outbound calls
    pub timeout_secs: u64,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub log_level: String,
    pub pricing: PricingConfig,
    pub pressure: PressureConfig,
    pub providers: ProviderConfig,
}

impl PricingConfig {
    /// Create pricing config from environment variables
    pub fn from_env() -> Result<Self, String> {
        let gst_rate = env::var("GST_RATE")
            .ok()
            .and_then(|s| s.parse::<f64>().ok())
            .unwrap_or(0.03);

        let fallback_usd_inr = env::var("FALLBACK_USD_INR")
            .ok()
            .and_then(|s| s.parse::<f64>().ok())
            .unwrap_or(83.0);

        let hold_above_usd = env::var("HOLD_ABOVE_USD")
            .ok()
            .and_then(|s| s.parse::<f64>().ok())
            .unwrap_or(2300.0);

        let accumulate_above_usd = env::var("ACCUMULATE_ABOVE_USD")
            .ok()
            .and_then(|s| s.parse::<f64>().ok())
            .unwrap_or(2100.0);

        // Validate configuration
        if !(0.0..1.0).contains(&gst_rate) {
            return Err("GST_RATE must be in [0, 1)".to_string());
        }

        if fallback_usd_inr <= 0.0 {
            return Err("FALLBACK_USD_INR must be greater than 0".to_string());
        }

        if accumulate_above_usd > hold_above_usd {
            return Err("ACCUMULATE_ABOVE_USD must not exceed HOLD_ABOVE_USD".to_string());
        }

        Ok(Self {
            gst_rate,
            fallback_usd_inr,
            hold_above_usd,
            accumulate_above_usd,
        })
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            gst_rate: 0.03,
            fallback_usd_inr: 83.0,
            hold_above_usd: 2300.0,
            accumulate_above_usd: 2100.0,
        }
    }
}

impl PressureConfig {
    /// Create pressure config from environment variables
    ///
    /// Classification thresholds are fixed business rules and only change
    /// through code; the history location is deployment-specific.
    pub fn from_env() -> Result<Self, String> {
        let history_path = env::var("PRESSURE_HISTORY_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./data/pressure_history.json"));

        Ok(Self {
            history_path,
            ..Self::default()
        })
    }
}

impl Default for PressureConfig {
    fn default() -> Self {
        Self {
            eur_strong_below: 0.90,
            eur_weak_above: 0.94,
            inr_low_below: 82.5,
            inr_high_above: 83.5,
            jpy_calm_below: 135.0,
            jpy_stressed_above: 150.0,
            history_path: PathBuf::from("./data/pressure_history.json"),
            max_days: 7,
        }
    }
}

impl ProviderConfig {
    /// Create provider config from environment variables
    pub fn from_env() -> Result<Self, String> {
        let fx_base_url = env::var("FX_API_URL")
            .unwrap_or_else(|_| "https://open.er-api.com/v6/latest".to_string());

        let gold_price_url = env::var("GOLD_API_URL")
            .unwrap_or_else(|_| "https://api.gold-api.com/price/XAU".to_string());

        let timeout_secs = env::var("PROVIDER_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(5);

        if timeout_secs == 0 {
            return Err("PROVIDER_TIMEOUT_SECS must be greater than 0".to_string());
        }

        Ok(Self {
            fx_base_url,
            gold_price_url,
            timeout_secs,
        })
    }

    /// Get request timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            fx_base_url: "https://open.er-api.com/v6/latest".to_string(),
            gold_price_url: "https://api.gold-api.com/price/XAU".to_string(),
            timeout_secs: 5,
        }
    }
}

impl AppConfig {
    /// Create application config from environment variables
    pub fn from_env() -> Result<Self, String> {
        let pricing = PricingConfig::from_env()?;
        let pressure = PressureConfig::from_env()?;
        let providers = ProviderConfig::from_env()?;

        let port = env::var("PORT")
            .ok()
            .and_then(|s| s.parse::<u16>().ok())
            .unwrap_or(8000);

        let log_level = env::var("LOG_LEVEL")
            .unwrap_or_else(|_| "info".to_string());

        // Validate log level
        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&log_level.to_lowercase().as_str()) {
            return Err(format!(
                "Invalid LOG_LEVEL: {}. Must be one of: {:?}",
                log_level, valid_log_levels
            ));
        }

        Ok(Self {
            port,
            log_level: log_level.to_lowercase(),
            pricing,
            pressure,
            providers,
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 8000,
            log_level: "info".to_string(),
            pricing: PricingConfig::default(),
            pressure: PressureConfig::default(),
            providers: ProviderConfig::default(),
        }
    }
}
