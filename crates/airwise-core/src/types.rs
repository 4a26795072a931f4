//! Core air-quality types

use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// AQI at or above which outdoor activity and ventilation advice turn cautious
pub const SAFE_AQI_THRESHOLD: u32 = 100;

/// AQI severity band
///
/// Variants are ordered from least to most severe, so `Ord` follows severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AqiCategory {
    /// 0-50
    Good,
    /// 51-100
    Moderate,
    /// 101-150
    UnhealthyForSensitive,
    /// 151-200
    Unhealthy,
    /// 201-300
    VeryUnhealthy,
    /// 301 and above
    Hazardous,
}

/// Classify an AQI value. Total over every non-negative index.
pub fn classify(aqi: u32) -> AqiCategory {
    match aqi {
        0..=50 => AqiCategory::Good,
        51..=100 => AqiCategory::Moderate,
        101..=150 => AqiCategory::UnhealthyForSensitive,
        151..=200 => AqiCategory::Unhealthy,
        201..=300 => AqiCategory::VeryUnhealthy,
        _ => AqiCategory::Hazardous,
    }
}

/// Presentation metadata attached to a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryInfo {
    pub label: &'static str,
    pub description: &'static str,
    pub color_token: &'static str,
}

impl AqiCategory {
    pub const ALL: [AqiCategory; 6] = [
        AqiCategory::Good,
        AqiCategory::Moderate,
        AqiCategory::UnhealthyForSensitive,
        AqiCategory::Unhealthy,
        AqiCategory::VeryUnhealthy,
        AqiCategory::Hazardous,
    ];

    /// Checked classification for indices coming from outside the crate.
    /// Negative values are rejected rather than clamped.
    pub fn try_from_index(aqi: i64) -> Result<Self> {
        if aqi < 0 {
            return Err(Error::InvalidReading(format!("AQI must be non-negative, got {aqi}")));
        }
        Ok(classify(u32::try_from(aqi).unwrap_or(u32::MAX)))
    }

    pub fn label(self) -> &'static str {
        self.info().label
    }

    pub fn description(self) -> &'static str {
        self.info().description
    }

    pub fn color_token(self) -> &'static str {
        self.info().color_token
    }

    pub fn info(self) -> CategoryInfo {
        let (label, description, color_token) = match self {
            AqiCategory::Good => (
                "Buena",
                "La calidad del aire es satisfactoria y representa poco o ningún riesgo.",
                "aqi-good",
            ),
            AqiCategory::Moderate => (
                "Moderada",
                "La calidad del aire es aceptable; las personas muy sensibles podrían notar molestias.",
                "aqi-moderate",
            ),
            AqiCategory::UnhealthyForSensitive => (
                "Dañina para grupos sensibles",
                "Niños, personas mayores y quienes tienen enfermedades respiratorias pueden verse afectados.",
                "aqi-unhealthy-sensitive",
            ),
            AqiCategory::Unhealthy => (
                "Dañina",
                "Toda la población puede empezar a sentir efectos en la salud.",
                "aqi-unhealthy",
            ),
            AqiCategory::VeryUnhealthy => (
                "Muy dañina",
                "Alerta sanitaria: el riesgo de efectos en la salud aumenta para todos.",
                "aqi-very-unhealthy",
            ),
            AqiCategory::Hazardous => (
                "Peligrosa",
                "Emergencia sanitaria: toda la población puede verse gravemente afectada.",
                "aqi-hazardous",
            ),
        };
        CategoryInfo {
            label,
            description,
            color_token,
        }
    }
}

/// Origin of a reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DataSource {
    SensorFusion,
    GroundStation,
    Satellite,
}

/// One point-in-time multi-pollutant reading
///
/// Fields are private so the invariants checked in [`AirQualitySnapshot::new`]
/// hold for every instance, deserialized ones included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SnapshotFields")]
pub struct AirQualitySnapshot {
    timestamp: DateTime<Utc>,
    aqi: u32,
    /// µg/m³
    pm25: f64,
    /// ppb
    no2: f64,
    /// ppb
    o3: f64,
    /// °C
    temperature: f64,
    /// percent
    humidity: u8,
    source: DataSource,
}

impl AirQualitySnapshot {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        timestamp: DateTime<Utc>,
        aqi: u32,
        pm25: f64,
        no2: f64,
        o3: f64,
        temperature: f64,
        humidity: u8,
        source: DataSource,
    ) -> Result<Self> {
        for (name, value) in [("pm25", pm25), ("no2", no2), ("o3", o3)] {
            if value.is_nan() || value < 0.0 {
                return Err(Error::InvalidReading(format!(
                    "{name} must be non-negative, got {value}"
                )));
            }
        }
        if !temperature.is_finite() {
            return Err(Error::InvalidReading(format!(
                "temperature must be finite, got {temperature}"
            )));
        }
        if humidity > 100 {
            return Err(Error::InvalidReading(format!(
                "humidity must be within 0-100, got {humidity}"
            )));
        }

        Ok(Self {
            timestamp,
            aqi,
            pm25,
            no2,
            o3,
            temperature,
            humidity,
            source,
        })
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn aqi(&self) -> u32 {
        self.aqi
    }

    pub fn pm25(&self) -> f64 {
        self.pm25
    }

    pub fn no2(&self) -> f64 {
        self.no2
    }

    pub fn o3(&self) -> f64 {
        self.o3
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn humidity(&self) -> u8 {
        self.humidity
    }

    pub fn source(&self) -> DataSource {
        self.source
    }

    /// Category derived from the current AQI on every call
    pub fn category(&self) -> AqiCategory {
        classify(self.aqi)
    }
}

/// Unchecked wire form of [`AirQualitySnapshot`]
#[derive(Deserialize)]
struct SnapshotFields {
    timestamp: DateTime<Utc>,
    aqi: u32,
    pm25: f64,
    no2: f64,
    o3: f64,
    temperature: f64,
    humidity: u8,
    source: DataSource,
}

impl TryFrom<SnapshotFields> for AirQualitySnapshot {
    type Error = Error;

    fn try_from(fields: SnapshotFields) -> Result<Self> {
        Self::new(
            fields.timestamp,
            fields.aqi,
            fields.pm25,
            fields.no2,
            fields.o3,
            fields.temperature,
            fields.humidity,
            fields.source,
        )
    }
}

/// One hourly forecast entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// Hour of day, 0-23
    pub hour: u8,
    pub aqi: u32,
    /// Identifier the presentation layer maps to an icon
    pub icon: String,
}

impl ForecastPoint {
    pub fn new(hour: u8, aqi: u32, icon: impl Into<String>) -> Self {
        Self {
            hour,
            aqi,
            icon: icon.into(),
        }
    }
}
