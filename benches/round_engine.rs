use criterion::{black_box, criterion_group, criterion_main, Criterion};

use reflex_rush::game::{ActionEvent, RandomInstructions, RecordingSink, RoundEngine};

fn judge_rounds(c: &mut Criterion) {
    c.bench_function("judge 1000 rounds", |b| {
        b.iter(|| {
            let mut engine = RoundEngine::new(RandomInstructions::seeded(7), RecordingSink::new());
            engine.start_session();
            for round in 0..1000u32 {
                if engine.over() {
                    engine.start_session();
                }
                let event = if round % 3 == 0 {
                    ActionEvent::TapPerformed
                } else {
                    ActionEvent::ShakeDetected
                };
                engine.submit_action(black_box(event));
                engine.sink_mut().clear();
            }
            black_box(engine.score())
        })
    });
}

criterion_group!(benches, judge_rounds);
criterion_main!(benches);
