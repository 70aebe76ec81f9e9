//! Domain models for the Sona backend.
//!
//! This module contains the wire and persistence models for the gold
//! quote and currency pressure endpoints.

pub mod gold;
pub mod history;
pub mod pressure;

// Re-export all models for convenient access
pub use gold::{GoldQuote, RateSource, Recommendation};
pub use history::HistoryEntry;
pub use pressure::{DollarPressure, MarketStress, PressureSnapshot, RatesUsed, RupeePressure};
