use airwise_assistant::classify_intent;
use airwise_core::classify;
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn bench_classify_aqi_range(c: &mut Criterion) {
    c.bench_function("classify_aqi_0_500", |b| {
        b.iter(|| {
            for aqi in 0..=500 {
                black_box(classify(black_box(aqi)));
            }
        });
    });
}

fn bench_classify_intent(c: &mut Criterion) {
    let messages = [
        "¿puedo correr hoy?",
        "¿abro la ventana?",
        "¿qué tal mañana?",
        "dame un resumen de la calidad del aire en mi ciudad por favor",
    ];

    c.bench_function("classify_intent_mixed", |b| {
        b.iter(|| {
            for message in &messages {
                black_box(classify_intent(black_box(message)));
            }
        });
    });
}

criterion_group!(benches, bench_classify_aqi_range, bench_classify_intent);
criterion_main!(benches);
