use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Dollar pressure derived from the USD/EUR rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DollarPressure {
    Strengthening,
    Stable,
    Weakening,
}

impl DollarPressure {
    /// Convert to response string
    pub fn as_str(&self) -> &'static str {
        match self {
            DollarPressure::Strengthening => "Strengthening",
            DollarPressure::Stable => "Stable",
            DollarPressure::Weakening => "Weakening",
        }
    }

    /// Channel contribution to the aggregate daily score
    pub fn score(&self) -> i32 {
        match self {
            DollarPressure::Strengthening => -1,
            DollarPressure::Stable => 0,
            DollarPressure::Weakening => 1,
        }
    }
}

/// Rupee pressure derived from the USD/INR rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RupeePressure {
    High,
    Moderate,
    Low,
}

impl RupeePressure {
    /// Convert to response string
    pub fn as_str(&self) -> &'static str {
        match self {
            RupeePressure::High => "High",
            RupeePressure::Moderate => "Moderate",
            RupeePressure::Low => "Low",
        }
    }

    /// Channel contribution to the aggregate daily score
    pub fn score(&self) -> i32 {
        match self {
            RupeePressure::High => -1,
            RupeePressure::Moderate => 0,
            RupeePressure::Low => 1,
        }
    }
}

/// Market stress derived from the USD/JPY risk proxy rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarketStress {
    Elevated,
    Normal,
    Low,
}

impl MarketStress {
    /// Convert to response string
    pub fn as_str(&self) -> &'static str {
        match self {
            MarketStress::Elevated => "Elevated",
            MarketStress::Normal => "Normal",
            MarketStress::Low => "Low",
        }
    }

    /// Channel contribution to the aggregate daily score
    pub fn score(&self) -> i32 {
        match self {
            MarketStress::Elevated => -1,
            MarketStress::Normal => 0,
            MarketStress::Low => 1,
        }
    }
}

/// Raw rates that went into a pressure snapshot
///
/// A `None` field means the provider call failed and the channel fell
/// back to its neutral label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatesUsed {
    pub usd_eur: Option<f64>,
    pub usd_inr: Option<f64>,
    pub usd_jpy: Option<f64>,
}

/// Pressure snapshot returned by the `/pressure` endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PressureSnapshot {
    pub date: NaiveDate,
    pub dollar_pressure: DollarPressure,
    pub rupee_pressure: RupeePressure,
    pub market_stress: MarketStress,
    /// Sum of the three channel scores, in [-3, 3]
    pub score: i32,
    pub rates: RatesUsed,
}
