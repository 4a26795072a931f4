//! Best-window recommendation over an hourly forecast

use crate::types::ForecastPoint;
use serde::Serialize;

/// Recommended hour with its forecast AQI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HourWindow {
    pub hour: u8,
    pub aqi: u32,
}

impl HourWindow {
    /// `HH:00` form used in assistant replies
    pub fn label(&self) -> String {
        format!("{:02}:00", self.hour)
    }
}

/// Pick the `count` cleanest hours, lowest AQI first.
///
/// The sort is stable, so equal AQIs keep their order in `forecast`. Shorter
/// inputs return every point; an empty forecast returns an empty list.
pub fn best_hours(forecast: &[ForecastPoint], count: usize) -> Vec<HourWindow> {
    let mut ranked: Vec<HourWindow> = forecast
        .iter()
        .map(|p| HourWindow {
            hour: p.hour,
            aqi: p.aqi,
        })
        .collect();

    ranked.sort_by_key(|w| w.aqi);
    ranked.truncate(count);
    ranked
}
