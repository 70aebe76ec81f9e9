//! Outbound provider clients.
//!
//! The FX rate and gold spot price APIs are external collaborators: each
//! call either yields a value or an explicit [`ProviderError`]
//! unavailability reason within the configured timeout. Nothing here
//! retries; a failed call degrades that one response.
//!
//! [`ProviderError`]: crate::error::ProviderError

pub mod fx;
pub mod gold;

pub use fx::{OpenErApiClient, RateProvider};
pub use gold::{GoldApiClient, SpotPriceProvider};
