//! Shared session context holding the current readings

use crate::source::{FeedSource, SyntheticFeed};
use airwise_core::{AirQualitySnapshot, ForecastPoint};
use chrono::{DateTime, Utc};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Debug, Clone, Default)]
struct SessionData {
    snapshot: Option<AirQualitySnapshot>,
    forecast: Vec<ForecastPoint>,
    history: Vec<AirQualitySnapshot>,
    refreshed_at: Option<DateTime<Utc>>,
}

/// Current snapshot, forecast and history, owned by the top-level context
/// and shared read-only with the assistant.
///
/// Writers replace whole values; readers always get the latest write.
pub struct Session {
    feed: Box<dyn FeedSource>,
    data: RwLock<SessionData>,
}

impl Session {
    /// Create a session and load its first data set from `feed`
    pub fn new(feed: impl FeedSource + 'static) -> Self {
        let session = Self::empty(feed);
        session.refresh();
        session
    }

    /// Session backed by the synthetic generators
    pub fn synthetic() -> Self {
        Self::new(SyntheticFeed::new())
    }

    /// Session with no data loaded yet
    pub fn empty(feed: impl FeedSource + 'static) -> Self {
        Self {
            feed: Box::new(feed),
            data: RwLock::new(SessionData::default()),
        }
    }

    pub fn snapshot(&self) -> Option<AirQualitySnapshot> {
        self.read().snapshot.clone()
    }

    pub fn forecast(&self) -> Vec<ForecastPoint> {
        self.read().forecast.clone()
    }

    /// Daily readings, oldest first
    pub fn history(&self) -> Vec<AirQualitySnapshot> {
        self.read().history.clone()
    }

    pub fn refreshed_at(&self) -> Option<DateTime<Utc>> {
        self.read().refreshed_at
    }

    /// Replace the current snapshot. `None` is treated as never initialized.
    pub fn set_snapshot(&self, snapshot: Option<AirQualitySnapshot>) {
        self.write().snapshot = snapshot;
    }

    pub fn set_forecast(&self, forecast: Vec<ForecastPoint>) {
        self.write().forecast = forecast;
    }

    /// Reload everything from the feed.
    ///
    /// Not idempotent: a synthetic feed returns a new sample on every call.
    /// A value the feed fails to provide keeps its previous contents, and
    /// `refreshed_at` only moves when at least one fetch succeeded.
    pub fn refresh(&self) {
        let snapshot = self.feed.fetch_snapshot();
        let forecast = self.feed.fetch_forecast();
        let history = self.feed.fetch_history();
        let any_fresh = snapshot.is_ok() || forecast.is_ok() || history.is_ok();

        let mut data = self.write();
        match snapshot {
            Ok(snapshot) => data.snapshot = snapshot,
            Err(e) => tracing::warn!(error = %e, "snapshot fetch failed, keeping previous"),
        }
        match forecast {
            Ok(forecast) => data.forecast = forecast,
            Err(e) => tracing::warn!(error = %e, "forecast fetch failed, keeping previous"),
        }
        match history {
            Ok(history) => data.history = history,
            Err(e) => tracing::warn!(error = %e, "history fetch failed, keeping previous"),
        }
        if !any_fresh {
            tracing::warn!("every fetch failed, serving stale data");
            return;
        }
        data.refreshed_at = Some(Utc::now());

        tracing::info!(
            aqi = data.snapshot.as_ref().map(|s| s.aqi()),
            forecast_points = data.forecast.len(),
            history_points = data.history.len(),
            "session refreshed"
        );
    }

    fn read(&self) -> RwLockReadGuard<'_, SessionData> {
        self.data.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, SessionData> {
        self.data.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("data", &*self.read())
            .finish_non_exhaustive()
    }
}
