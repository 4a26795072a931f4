//! Templated replies rendered from the current readings

use crate::intent::Intent;
use airwise_core::{
    best_hours, AirQualitySnapshot, AssistantConfig, ForecastPoint, HourWindow,
    SAFE_AQI_THRESHOLD,
};

/// Reply used for every intent when no snapshot is available
pub const NO_DATA_REPLY: &str =
    "Lo siento, no tengo datos de calidad del aire disponibles en este momento. Inténtalo de nuevo más tarde.";

/// Render the reply for `intent` from the given readings.
///
/// Without a snapshot every intent gets [`NO_DATA_REPLY`].
pub fn compose_reply(
    intent: Intent,
    snapshot: Option<&AirQualitySnapshot>,
    forecast: &[ForecastPoint],
    config: &AssistantConfig,
) -> String {
    let Some(snapshot) = snapshot else {
        return NO_DATA_REPLY.to_string();
    };

    match intent {
        Intent::Exercise => exercise_reply(snapshot, forecast, config.best_hours_count),
        Intent::Ventilation => ventilation_reply(snapshot),
        Intent::Outdoors => outdoors_reply(snapshot),
        Intent::Forecast => forecast_reply(forecast, config.forecast_windows),
        Intent::SensitiveGroups => sensitive_reply(snapshot),
        Intent::Summary => summary_reply(snapshot),
    }
}

fn current(snapshot: &AirQualitySnapshot) -> String {
    format!("{} ({})", snapshot.aqi(), snapshot.category().label())
}

fn exercise_reply(snapshot: &AirQualitySnapshot, forecast: &[ForecastPoint], count: usize) -> String {
    let windows = best_hours(forecast, count);
    let mut lines = Vec::new();

    if windows.is_empty() {
        lines.push("Todavía no tengo pronóstico por horas para recomendarte un horario.".to_string());
    } else {
        lines.push(format!(
            "Las mejores horas para hacer ejercicio hoy son: {}.",
            join_windows(&windows)
        ));
    }
    lines.push(format!("El AQI actual es {}.", current(snapshot)));
    lines.join(" ")
}

fn ventilation_reply(snapshot: &AirQualitySnapshot) -> String {
    if snapshot.aqi() < SAFE_AQI_THRESHOLD {
        format!(
            "Con un AQI de {} es buen momento para abrir las ventanas y ventilar tu casa.",
            current(snapshot)
        )
    } else {
        format!(
            "Con un AQI de {} te recomiendo mantener las ventanas cerradas. \
             Si tienes un purificador de aire, es buen momento para encenderlo.",
            current(snapshot)
        )
    }
}

fn outdoors_reply(snapshot: &AirQualitySnapshot) -> String {
    let advice = if snapshot.aqi() < SAFE_AQI_THRESHOLD {
        "Es seguro salir y disfrutar del aire libre."
    } else {
        "Te recomiendo precaución y limitar el tiempo al aire libre."
    };

    format!(
        "Condiciones actuales: AQI {}, temperatura {:.1}°C, humedad {}%. {}",
        current(snapshot),
        snapshot.temperature(),
        snapshot.humidity(),
        advice
    )
}

fn forecast_reply(forecast: &[ForecastPoint], windows: usize) -> String {
    let (Some(min), Some(max)) = (
        forecast.iter().map(|p| p.aqi).min(),
        forecast.iter().map(|p| p.aqi).max(),
    ) else {
        return "Todavía no tengo un pronóstico disponible.".to_string();
    };

    format!(
        "Para las próximas horas espero un AQI entre {} y {}. Los mejores momentos serán: {}.",
        min,
        max,
        join_windows(&best_hours(forecast, windows))
    )
}

fn sensitive_reply(snapshot: &AirQualitySnapshot) -> String {
    if snapshot.aqi() > SAFE_AQI_THRESHOLD {
        format!(
            "Con un AQI de {} los niños, bebés y personas sensibles deberían limitar \
             el tiempo al aire libre y evitar esfuerzos intensos.",
            current(snapshot)
        )
    } else {
        format!(
            "Con un AQI de {} los niños, bebés y personas sensibles pueden realizar \
             actividades al aire libre con normalidad.",
            current(snapshot)
        )
    }
}

fn summary_reply(snapshot: &AirQualitySnapshot) -> String {
    format!(
        "AQI actual: {}. PM2.5: {:.1} µg/m³, NO₂: {:.1} ppb, O₃: {:.1} ppb.",
        current(snapshot),
        snapshot.pm25(),
        snapshot.no2(),
        snapshot.o3()
    )
}

/// "07:00 (AQI 71), 03:00 (AQI 73) y 14:00 (AQI 75)"
fn join_windows(windows: &[HourWindow]) -> String {
    let items: Vec<String> = windows
        .iter()
        .map(|w| format!("{} (AQI {})", w.label(), w.aqi))
        .collect();

    match items.split_last() {
        None => String::new(),
        Some((last, [])) => last.clone(),
        Some((last, rest)) => format!("{} y {}", rest.join(", "), last),
    }
}
