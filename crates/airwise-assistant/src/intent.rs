//! Keyword-based intent classification

use serde::Serialize;

/// Purpose of a user's message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Best hours for exercise
    Exercise,
    /// Whether to open the windows
    Ventilation,
    /// Current conditions for going outside
    Outdoors,
    /// Upcoming air quality
    Forecast,
    /// Advice for children and other sensitive groups
    SensitiveGroups,
    /// Fallback: current readings
    Summary,
}

const EXERCISE_KEYWORDS: &[&str] = &[
    "correr", "ejercicio", "deporte", "entrenar", "run", "exercise", "sports", "workout", "jog",
];
const VENTILATION_KEYWORDS: &[&str] = &["ventana", "ventilar", "abrir", "window", "open"];
const OUTDOORS_KEYWORDS: &[&str] = &[
    "salir", "afuera", "aire libre", "go outside", "outdoors", "outside",
];
const FORECAST_KEYWORDS: &[&str] = &["mañana", "pronóstico", "pronostico", "forecast", "tomorrow"];
const SENSITIVE_KEYWORDS: &[&str] = &[
    "niño", "niña", "bebé", "embarazada", "children", "child", "kids", "baby", "pregnant",
];

/// Keyword sets in match priority; the first set with a hit wins
const INTENT_KEYWORDS: &[(Intent, &[&str])] = &[
    (Intent::Exercise, EXERCISE_KEYWORDS),
    (Intent::Ventilation, VENTILATION_KEYWORDS),
    (Intent::Outdoors, OUTDOORS_KEYWORDS),
    (Intent::Forecast, FORECAST_KEYWORDS),
    (Intent::SensitiveGroups, SENSITIVE_KEYWORDS),
];

/// Classify free text. Never fails: unmatched text is a [`Intent::Summary`].
pub fn classify_intent(text: &str) -> Intent {
    let lowered = text.to_lowercase();

    let intent = INTENT_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lowered.contains(k)))
        .map(|&(intent, _)| intent)
        .unwrap_or(Intent::Summary);

    tracing::debug!(?intent, "classified message");
    intent
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_intent() {
        assert_eq!(classify_intent("¿puedo correr hoy?"), Intent::Exercise);
        assert_eq!(classify_intent("Can I go for a run?"), Intent::Exercise);
        assert_eq!(classify_intent("¿Abro la ventana?"), Intent::Ventilation);
        assert_eq!(classify_intent("Should I open the windows"), Intent::Ventilation);
        assert_eq!(classify_intent("¿Puedo salir un rato?"), Intent::Outdoors);
        assert_eq!(classify_intent("is it safe outdoors"), Intent::Outdoors);
        assert_eq!(classify_intent("¿Qué tal mañana?"), Intent::Forecast);
        assert_eq!(classify_intent("FORECAST please"), Intent::Forecast);
        assert_eq!(classify_intent("¿Y para mi bebé?"), Intent::SensitiveGroups);
        assert_eq!(classify_intent("Are the children ok?"), Intent::SensitiveGroups);
    }

    #[test]
    fn test_priority_order() {
        // exercise beats outdoors
        assert_eq!(classify_intent("¿puedo salir a correr?"), Intent::Exercise);
        // ventilation beats forecast
        assert_eq!(classify_intent("¿abro la ventana mañana?"), Intent::Ventilation);
        // outdoors beats sensitive groups
        assert_eq!(classify_intent("¿pueden los niños salir?"), Intent::Outdoors);
        // forecast beats sensitive groups
        assert_eq!(classify_intent("pronóstico para mi bebé"), Intent::Forecast);
    }

    #[test]
    fn test_case_insensitive_unicode() {
        assert_eq!(classify_intent("PRONÓSTICO"), Intent::Forecast);
        assert_eq!(classify_intent("NIÑOS"), Intent::SensitiveGroups);
    }

    #[test]
    fn test_fallback_to_summary() {
        assert_eq!(classify_intent("hola"), Intent::Summary);
        assert_eq!(classify_intent("¿cómo está el aire?"), Intent::Summary);
        assert_eq!(classify_intent(""), Intent::Summary);
    }

    #[test]
    fn test_english_keywords_inside_spanish_words() {
        assert_eq!(classify_intent("¿hay transporte público hoy?"), Intent::Summary);
        assert_eq!(classify_intent("¿Es buen día para deportes?"), Intent::Exercise);
        assert_eq!(classify_intent("Is it ok to play sports?"), Intent::Exercise);
    }
}
