use crate::config::PricingConfig;
use crate::error::AppResult;
use crate::models::{GoldQuote, RateSource, Recommendation};
use crate::providers::{RateProvider, SpotPriceProvider};
use chrono::Utc;
use std::sync::Arc;
use tracing::{info, warn};

/// Grams per troy ounce
pub const GRAMS_PER_TROY_OUNCE: f64 = 31.1035;

/// Indian retail gold prices are quoted per 10 grams
pub const PRICE_UNIT_GRAMS: f64 = 10.0;

/// Converted local price before and after GST
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvertedPrice {
    pub ex_tax: f64,
    pub incl_tax: f64,
}

/// Round to 2 decimal places for presentation
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Convert a USD/oz spot price into INR per 10 grams
///
/// Expects `spot_usd_per_oz >= 0`, `usd_inr_rate > 0` and
/// `0 <= gst_rate < 1`; both outputs are non-negative for such inputs.
pub fn convert(spot_usd_per_oz: f64, usd_inr_rate: f64, gst_rate: f64) -> ConvertedPrice {
    let ex_tax = round2(spot_usd_per_oz * usd_inr_rate / GRAMS_PER_TROY_OUNCE * PRICE_UNIT_GRAMS);
    let incl_tax = round2(ex_tax * (1.0 + gst_rate));

    ConvertedPrice { ex_tax, incl_tax }
}

/// Recommendation for the given USD/oz spot price
pub fn recommendation(spot_usd_per_oz: f64, config: &PricingConfig) -> Recommendation {
    if spot_usd_per_oz > config.hold_above_usd {
        Recommendation::Hold
    } else if spot_usd_per_oz > config.accumulate_above_usd {
        Recommendation::Accumulate
    } else {
        Recommendation::Buy
    }
}

/// Service computing gold quotes from the spot and FX providers
pub struct GoldQuoteService {
    spot_provider: Arc<dyn SpotPriceProvider>,
    rate_provider: Arc<dyn RateProvider>,
    pricing: PricingConfig,
}

impl GoldQuoteService {
    /// Create a new gold quote service
    pub fn new(
        spot_provider: Arc<dyn SpotPriceProvider>,
        rate_provider: Arc<dyn RateProvider>,
        pricing: PricingConfig,
    ) -> Self {
        Self {
            spot_provider,
            rate_provider,
            pricing,
        }
    }

    /// Compute a quote from the current spot price and USD/INR rate
    ///
    /// An unavailable FX rate degrades to the configured fallback rate;
    /// an unavailable spot price is the one failure surfaced to the
    /// caller, since no meaningful conversion can happen without it.
    pub async fn quote(&self) -> AppResult<GoldQuote> {
        let spot = self.spot_provider.spot_usd_per_oz().await?;

        let (usd_inr_rate, rate_source) = match self.rate_provider.rate("USD", "INR").await {
            Ok(rate) => (rate, RateSource::Live),
            Err(e) => {
                warn!(
                    fallback = self.pricing.fallback_usd_inr,
                    "USD/INR rate unavailable, using fallback: {}", e
                );
                (self.pricing.fallback_usd_inr, RateSource::Fallback)
            }
        };

        let price = convert(spot, usd_inr_rate, self.pricing.gst_rate);
        let recommendation = recommendation(spot, &self.pricing);

        info!(
            spot,
            usd_inr_rate,
            price_inr_10g = price.ex_tax,
            recommendation = recommendation.as_str(),
            "Computed gold quote"
        );

        Ok(GoldQuote {
            timestamp: Utc::now(),
            spot_price_usd_oz: spot,
            usd_inr_rate,
            rate_source,
            price_inr_10g: price.ex_tax,
            price_inr_10g_with_gst: price.incl_tax,
            recommendation,
        })
    }
}
