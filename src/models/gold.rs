use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Recommendation derived from the USD/oz spot price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Recommendation {
    Buy,
    Accumulate,
    Hold,
}

impl Recommendation {
    /// Convert to response string
    pub fn as_str(&self) -> &'static str {
        match self {
            Recommendation::Buy => "BUY",
            Recommendation::Accumulate => "ACCUMULATE",
            Recommendation::Hold => "HOLD",
        }
    }
}

/// Which USD/INR rate went into the conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RateSource {
    /// Rate fetched from the FX provider for this request
    Live,
    /// Configured fallback rate substituted after a provider failure
    Fallback,
}

impl RateSource {
    /// Convert to response string
    pub fn as_str(&self) -> &'static str {
        match self {
            RateSource::Live => "live",
            RateSource::Fallback => "fallback",
        }
    }
}

/// Computed gold quote returned by the `/gold` endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoldQuote {
    pub timestamp: DateTime<Utc>,
    /// Spot price in USD per troy ounce
    pub spot_price_usd_oz: f64,
    /// USD/INR rate used for the conversion
    pub usd_inr_rate: f64,
    pub rate_source: RateSource,
    /// INR per 10 grams, before GST
    pub price_inr_10g: f64,
    /// INR per 10 grams, GST included
    pub price_inr_10g_with_gst: f64,
    pub recommendation: Recommendation,
}
