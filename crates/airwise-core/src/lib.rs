//! Air-quality domain model, AQI classification and best-window recommendation

mod config;
mod error;
mod recommend;
mod types;

pub use config::{AssistantConfig, Config};
pub use error::{Error, Result};
pub use recommend::{best_hours, HourWindow};
pub use types::{
    classify, AirQualitySnapshot, AqiCategory, CategoryInfo, DataSource, ForecastPoint,
    SAFE_AQI_THRESHOLD,
};
