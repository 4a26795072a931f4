//! Synthetic series generation
//!
//! These generators are intentionally non-deterministic: every call draws a
//! fresh sample from the caller's RNG. Seed the RNG to reproduce a series.

use airwise_core::{AirQualitySnapshot, DataSource, ForecastPoint, Result};
use chrono::{DateTime, Duration, Utc};
use rand::Rng;

/// Points in a generated forecast, one per hour of day
pub const FORECAST_HOURS: u8 = 24;

/// Days in a generated history, today included
pub const HISTORY_DAYS: usize = 7;

/// Placeholder icon token on every generated forecast point
pub const FORECAST_ICON: &str = "partly-cloudy";

const FORECAST_BASELINE: i64 = 85;
const FORECAST_JITTER: i64 = 15;
const FORECAST_MAX_AQI: i64 = 200;

const AQI_RANGE: (u32, u32) = (50, 120);
const PM25_RANGE: (f64, f64) = (20.0, 60.0);
const NO2_RANGE: (f64, f64) = (30.0, 70.0);
const O3_RANGE: (f64, f64) = (40.0, 80.0);
const TEMPERATURE_RANGE: (f64, f64) = (20.0, 30.0);
const HUMIDITY_RANGE: (u8, u8) = (50, 80);

/// Hourly forecast for hours 0..23 around a fixed baseline, clamped to 0-200
pub fn generate_forecast<R: Rng + ?Sized>(rng: &mut R) -> Vec<ForecastPoint> {
    (0..FORECAST_HOURS)
        .map(|hour| {
            let jitter = rng.gen_range(-FORECAST_JITTER..=FORECAST_JITTER);
            let aqi = (FORECAST_BASELINE + jitter).clamp(0, FORECAST_MAX_AQI);
            ForecastPoint::new(hour, aqi as u32, FORECAST_ICON)
        })
        .collect()
}

/// One reading with every field drawn independently from its bounded range
pub fn generate_snapshot<R: Rng + ?Sized>(
    rng: &mut R,
    timestamp: DateTime<Utc>,
) -> Result<AirQualitySnapshot> {
    AirQualitySnapshot::new(
        timestamp,
        rng.gen_range(AQI_RANGE.0..=AQI_RANGE.1),
        rng.gen_range(PM25_RANGE.0..=PM25_RANGE.1),
        rng.gen_range(NO2_RANGE.0..=NO2_RANGE.1),
        rng.gen_range(O3_RANGE.0..=O3_RANGE.1),
        rng.gen_range(TEMPERATURE_RANGE.0..=TEMPERATURE_RANGE.1),
        rng.gen_range(HUMIDITY_RANGE.0..=HUMIDITY_RANGE.1),
        DataSource::SensorFusion,
    )
}

/// Daily readings for the last seven calendar days, oldest first, `now` last
pub fn generate_history<R: Rng + ?Sized>(
    rng: &mut R,
    now: DateTime<Utc>,
) -> Result<Vec<AirQualitySnapshot>> {
    (0..HISTORY_DAYS)
        .rev()
        .map(|days_back| generate_snapshot(&mut *rng, now - Duration::days(days_back as i64)))
        .collect()
}
