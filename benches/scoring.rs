use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ten_pin::core::{parse_frames, Game};
use ten_pin::types::RuleSet;

fn bench_parse(c: &mut Criterion) {
    let encoded = "X".repeat(10);

    c.bench_function("parse_all_strike_game", |b| {
        b.iter(|| parse_frames(black_box(&encoded)))
    });
}

fn bench_score_international(c: &mut Criterion) {
    let game = Game::new("XXX347/21", RuleSet::International);

    c.bench_function("score_international", |b| b.iter(|| game.score()));
}

fn bench_score_national(c: &mut Criterion) {
    let game = Game::new("X4/34189-7/", RuleSet::National);

    c.bench_function("score_national", |b| b.iter(|| game.score()));
}

criterion_group!(
    benches,
    bench_parse,
    bench_score_international,
    bench_score_national
);
criterion_main!(benches);
