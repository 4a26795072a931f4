use airwise_assistant::{classify_intent, Assistant, Author, Intent};
use airwise_core::{best_hours, AssistantConfig, SAFE_AQI_THRESHOLD};
use airwise_feed::{Session, SyntheticFeed};
use std::sync::Arc;

#[tokio::test(start_paused = true)]
async fn test_full_conversation_over_synthetic_feed() {
    let session = Arc::new(Session::new(SyntheticFeed::seeded(2024)));
    let assistant = Assistant::new(session.clone(), AssistantConfig::new());

    let snapshot = session.snapshot().unwrap();
    let questions = [
        ("¿Puedo salir a correr?", Intent::Exercise),
        ("¿Abro las ventanas?", Intent::Ventilation),
        ("¿Es buena idea ir afuera?", Intent::Outdoors),
        ("¿Cómo estará mañana?", Intent::Forecast),
        ("¿Y mi bebé?", Intent::SensitiveGroups),
        ("dame los datos", Intent::Summary),
    ];

    for (question, intent) in questions {
        assert_eq!(classify_intent(question), intent, "{}", question);
        assistant.submit(question).unwrap();
        assistant.wait_idle().await;
    }

    let messages = assistant.messages();
    assert_eq!(messages.len(), 1 + 2 * questions.len());
    for pair in messages[1..].chunks(2) {
        assert_eq!(pair[0].author, Author::User);
        assert_eq!(pair[1].author, Author::Assistant);
    }

    // exercise reply cites the current AQI and the forecast's best hours
    let exercise = &messages[2].text;
    assert!(exercise.contains(&snapshot.aqi().to_string()));
    for window in best_hours(&session.forecast(), 3) {
        assert!(exercise.contains(&window.label()), "{}", exercise);
    }

    // ventilation advice follows the threshold
    let ventilation = &messages[4].text;
    if snapshot.aqi() < SAFE_AQI_THRESHOLD {
        assert!(ventilation.contains("abrir las ventanas"));
    } else {
        assert!(ventilation.contains("purificador"));
    }

    // summary reports every pollutant with one decimal
    let summary = &messages[12].text;
    assert!(summary.contains(&format!("{:.1}", snapshot.pm25())));
    assert!(summary.contains(&format!("{:.1}", snapshot.no2())));
    assert!(summary.contains(&format!("{:.1}", snapshot.o3())));
}

#[tokio::test(start_paused = true)]
async fn test_refresh_between_turns_changes_data() {
    let session = Arc::new(Session::new(SyntheticFeed::seeded(77)));
    let assistant = Assistant::new(session.clone(), AssistantConfig::new());

    let before = session.forecast();
    session.refresh();
    let after = session.forecast();
    assert_ne!(before, after, "refresh regenerates the synthetic series");

    assistant.submit("¿cuándo puedo hacer ejercicio?").unwrap();
    assistant.wait_idle().await;

    let reply = assistant.messages().pop().unwrap();
    for window in best_hours(&after, 3) {
        assert!(reply.text.contains(&window.label()));
    }
}
