use criterion::{black_box, criterion_group, criterion_main, Criterion};
use check_the_score::espn::parse_scoreboard;
use check_the_score::fixtures::{create_full_week, SCOREBOARD_JSON};
use check_the_score::table::{render_buffer, render_to_string, TableStyle};
use check_the_score::transform::transform;

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse_scoreboard", |b| {
        b.iter(|| parse_scoreboard("bench", black_box(SCOREBOARD_JSON)))
    });
}

fn bench_transform(c: &mut Criterion) {
    // A full NFL week has 16 games
    let scoreboard = create_full_week(16);

    c.bench_function("transform_full_week", |b| {
        b.iter(|| transform(black_box(&scoreboard)))
    });
}

fn bench_render(c: &mut Criterion) {
    let rows = transform(&create_full_week(16)).expect("fixture week is well-formed");
    let style = TableStyle::default();

    c.bench_function("render_buffer", |b| {
        b.iter(|| render_buffer(black_box(&rows), &style))
    });

    c.bench_function("render_to_string_color", |b| {
        b.iter(|| render_to_string(black_box(&rows), &style, true))
    });
}

criterion_group!(benches, bench_parse, bench_transform, bench_render);
criterion_main!(benches);
