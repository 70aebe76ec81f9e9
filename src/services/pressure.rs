use crate::config::PressureConfig;
use crate::models::{
    DollarPressure, HistoryEntry, MarketStress, PressureSnapshot, RatesUsed, RupeePressure,
};
use crate::providers::RateProvider;
use crate::services::PressureHistoryStore;
use chrono::Utc;
use std::sync::Arc;
use tracing::{info, warn};

/// Classify dollar pressure from the USD/EUR rate
///
/// An absent rate classifies as `Stable`, the documented neutral
/// fallback for this channel.
pub fn classify_dollar(usd_eur: Option<f64>, config: &PressureConfig) -> DollarPressure {
    match usd_eur {
        Some(rate) if rate < config.eur_strong_below => DollarPressure::Strengthening,
        Some(rate) if rate > config.eur_weak_above => DollarPressure::Weakening,
        Some(_) => DollarPressure::Stable,
        None => DollarPressure::Stable,
    }
}

/// Classify rupee pressure from the USD/INR rate
///
/// Thresholds are strict, so a rate sitting exactly on either bound is
/// `Moderate`. An absent rate classifies as `Moderate`.
pub fn classify_rupee(usd_inr: Option<f64>, config: &PressureConfig) -> RupeePressure {
    match usd_inr {
        Some(rate) if rate > config.inr_high_above => RupeePressure::High,
        Some(rate) if rate < config.inr_low_below => RupeePressure::Low,
        Some(_) => RupeePressure::Moderate,
        None => RupeePressure::Moderate,
    }
}

/// Classify market stress from the USD/JPY risk proxy rate
///
/// An absent rate classifies as `Normal`.
pub fn classify_stress(usd_jpy: Option<f64>, config: &PressureConfig) -> MarketStress {
    match usd_jpy {
        Some(rate) if rate > config.jpy_stressed_above => MarketStress::Elevated,
        Some(rate) if rate < config.jpy_calm_below => MarketStress::Low,
        Some(_) => MarketStress::Normal,
        None => MarketStress::Normal,
    }
}

/// Aggregate daily score, the sum of the three channel scores
pub fn aggregate_score(
    dollar: DollarPressure,
    rupee: RupeePressure,
    stress: MarketStress,
) -> i32 {
    dollar.score() + rupee.score() + stress.score()
}

/// Service computing pressure snapshots and recording daily scores
pub struct PressureService {
    rate_provider: Arc<dyn RateProvider>,
    history: Arc<PressureHistoryStore>,
    pressure: PressureConfig,
}

impl PressureService {
    /// Create a new pressure service
    pub fn new(
        rate_provider: Arc<dyn RateProvider>,
        history: Arc<PressureHistoryStore>,
        pressure: PressureConfig,
    ) -> Self {
        Self {
            rate_provider,
            history,
            pressure,
        }
    }

    /// Compute the current pressure snapshot and append it to the history
    ///
    /// Unavailable rates degrade each channel to its neutral label, and a
    /// failed history write is logged without failing the snapshot, so
    /// this always produces a response.
    pub async fn snapshot(&self) -> PressureSnapshot {
        let rates = RatesUsed {
            usd_eur: self.fetch_rate("USD", "EUR").await,
            usd_inr: self.fetch_rate("USD", "INR").await,
            usd_jpy: self.fetch_rate("USD", "JPY").await,
        };

        let dollar_pressure = classify_dollar(rates.usd_eur, &self.pressure);
        let rupee_pressure = classify_rupee(rates.usd_inr, &self.pressure);
        let market_stress = classify_stress(rates.usd_jpy, &self.pressure);
        let score = aggregate_score(dollar_pressure, rupee_pressure, market_stress);

        let snapshot = PressureSnapshot {
            date: Utc::now().date_naive(),
            dollar_pressure,
            rupee_pressure,
            market_stress,
            score,
            rates,
        };

        info!(
            dollar = dollar_pressure.as_str(),
            rupee = rupee_pressure.as_str(),
            stress = market_stress.as_str(),
            score,
            "Computed pressure snapshot"
        );

        let entry = HistoryEntry::new(snapshot.date, snapshot.score);
        if let Err(e) = self.history.append(entry).await {
            warn!("Pressure history not persisted: {}", e);
        }

        snapshot
    }

    /// Fetch one rate, degrading failures to `None`
    async fn fetch_rate(&self, base: &str, target: &str) -> Option<f64> {
        match self.rate_provider.rate(base, target).await {
            Ok(rate) => Some(rate),
            Err(e) => {
                warn!(base, target, "Rate unavailable: {}", e);
                None
            }
        }
    }
}
