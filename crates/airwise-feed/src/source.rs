//! Feed adapters

use crate::generate::{generate_forecast, generate_history, generate_snapshot};
use airwise_core::{AirQualitySnapshot, ForecastPoint, Result};
use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::{Mutex, PoisonError};

/// Upstream source of air-quality data.
///
/// A live adapter replaces [`SyntheticFeed`] without changing any consumer.
/// `Ok(None)` from `fetch_snapshot` means no reading is available; an `Err`
/// from any method leaves the session's previous data in place.
pub trait FeedSource: Send + Sync {
    fn fetch_snapshot(&self) -> Result<Option<AirQualitySnapshot>>;

    /// 24 hourly points
    fn fetch_forecast(&self) -> Result<Vec<ForecastPoint>>;

    /// 7 daily readings, oldest first
    fn fetch_history(&self) -> Result<Vec<AirQualitySnapshot>>;
}

/// Randomly generated stand-in for a live feed
pub struct SyntheticFeed {
    rng: Mutex<StdRng>,
}

impl SyntheticFeed {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Reproducible feed for tests and demos
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut rng)
    }
}

impl Default for SyntheticFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedSource for SyntheticFeed {
    fn fetch_snapshot(&self) -> Result<Option<AirQualitySnapshot>> {
        self.with_rng(|rng| generate_snapshot(rng, Utc::now()).map(Some))
    }

    fn fetch_forecast(&self) -> Result<Vec<ForecastPoint>> {
        Ok(self.with_rng(|rng| generate_forecast(rng)))
    }

    fn fetch_history(&self) -> Result<Vec<AirQualitySnapshot>> {
        self.with_rng(|rng| generate_history(rng, Utc::now()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthetic_feed_always_has_snapshot() {
        let feed = SyntheticFeed::seeded(1);
        for _ in 0..20 {
            assert!(feed.fetch_snapshot().unwrap().is_some());
        }
    }

    #[test]
    fn test_synthetic_feed_cardinality() {
        let feed = SyntheticFeed::new();
        assert_eq!(feed.fetch_forecast().unwrap().len(), 24);
        assert_eq!(feed.fetch_history().unwrap().len(), 7);
    }

    #[test]
    fn test_seeded_feeds_match() {
        let a = SyntheticFeed::seeded(9);
        let b = SyntheticFeed::seeded(9);
        assert_eq!(a.fetch_forecast().unwrap(), b.fetch_forecast().unwrap());
    }
}
