use airwise_core::{AirQualitySnapshot, AssistantConfig, DataSource, ForecastPoint, Result};
use airwise_feed::{FeedSource, Session};
use chrono::Utc;
use std::sync::Arc;

/// Feed serving a fixed data set
pub struct FixedFeed {
    pub aqi: Option<u32>,
    pub forecast: Vec<u32>,
}

impl FeedSource for FixedFeed {
    fn fetch_snapshot(&self) -> Result<Option<AirQualitySnapshot>> {
        self.aqi.map(sample_snapshot).transpose()
    }

    fn fetch_forecast(&self) -> Result<Vec<ForecastPoint>> {
        Ok(self
            .forecast
            .iter()
            .enumerate()
            .map(|(hour, &aqi)| ForecastPoint::new(hour as u8, aqi, "partly-cloudy"))
            .collect())
    }

    fn fetch_history(&self) -> Result<Vec<AirQualitySnapshot>> {
        Ok(Vec::new())
    }
}

pub fn sample_snapshot(aqi: u32) -> Result<AirQualitySnapshot> {
    AirQualitySnapshot::new(
        Utc::now(),
        aqi,
        35.4,
        45.2,
        52.1,
        24.5,
        65,
        DataSource::SensorFusion,
    )
}

/// 24 hours around 85 with the cleanest air at 05:00, 14:00 and 03:00
pub fn sample_forecast() -> Vec<u32> {
    let mut aqis = vec![90; 24];
    aqis[5] = 71;
    aqis[14] = 73;
    aqis[3] = 74;
    aqis[20] = 80;
    aqis
}

pub fn sample_session(aqi: Option<u32>) -> Arc<Session> {
    Arc::new(Session::new(FixedFeed {
        aqi,
        forecast: sample_forecast(),
    }))
}

pub fn sample_config() -> AssistantConfig {
    AssistantConfig {
        response_delay_ms: 1500,
        best_hours_count: 3,
        forecast_windows: 2,
    }
}
