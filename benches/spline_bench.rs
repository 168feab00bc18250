use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rail_spline::{parse_spline_document, sample_polyline, BezierSpline, SplineSettings};
use std::hint::black_box;

fn bench_json_parsing(c: &mut Criterion) {
    let json_content = include_str!("../tests/fixtures/looped_spline.json");

    c.bench_function("json_parse_looped_spline", |b| {
        b.iter(|| {
            let spline = parse_spline_document(black_box(json_content), SplineSettings::default())
                .expect("JSON parse failed");
            black_box(spline.segment_count())
        })
    });
}

fn build_synthetic_spline(segment_count: usize) -> BezierSpline {
    let mut spline = BezierSpline::new();
    for index in 1..segment_count {
        spline.add_segment();
        // Leichte Kurve, damit die Richtungen nicht alle identisch sind
        let last = spline.control_point_count() - 1;
        let mut end = spline.control_point(last).expect("last point exists");
        end.y += (index % 7) as f32 * 0.5;
        spline
            .set_control_point(last, end)
            .expect("last point exists");
    }
    spline
}

fn bench_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluation");

    for &segment_count in &[10usize, 1_000usize] {
        let spline = build_synthetic_spline(segment_count);

        group.bench_with_input(
            BenchmarkId::new("point_direction_batch", segment_count),
            &spline,
            |b, spline| {
                b.iter(|| {
                    let mut acc = 0.0f32;
                    for i in 0..1024 {
                        let t = i as f32 / 1023.0;
                        acc += spline.point(black_box(t)).x + spline.direction(t).y;
                    }
                    black_box(acc)
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("sample_polyline", segment_count),
            &spline,
            |b, spline| b.iter(|| black_box(sample_polyline(spline, 10).len())),
        );
    }

    group.finish();
}

fn bench_editing(c: &mut Criterion) {
    let spline = build_synthetic_spline(200);

    c.bench_function("insert_and_remove_anchor", |b| {
        b.iter(|| {
            let mut s = spline.clone();
            s.insert_anchor_between(black_box(100)).expect("segment exists");
            let outcome = s.remove_anchor(101).expect("anchor exists");
            black_box(outcome)
        })
    });

    c.bench_function("add_segment_on_loop", |b| {
        let mut looped = spline.clone();
        looped.set_loop(true);
        b.iter(|| {
            let mut s = looped.clone();
            s.add_segment();
            black_box(s.segment_count())
        })
    });
}

criterion_group!(benches, bench_json_parsing, bench_evaluation, bench_editing);
criterion_main!(benches);
