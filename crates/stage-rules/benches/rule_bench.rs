use criterion::{black_box, criterion_group, criterion_main, Criterion};
use stage_rules::{classify_by_ldha, combine_assessment, rank_feature_contributions};

fn bench_rules(c: &mut Criterion) {
    let readings: Vec<f64> = (0..1000).map(|i| i as f64).collect();

    c.bench_function("classify 1000 LDHA readings", |b| {
        b.iter(|| {
            for &ldha in &readings {
                let _ = black_box(classify_by_ldha(black_box(ldha)));
            }
        })
    });

    c.bench_function("combine and rank one request", |b| {
        let names = ["LDHA", "LDHB", "LDHC", "LDHD"];
        let scores = [0.12, -0.48, 0.05, 0.31];
        b.iter(|| {
            if let Ok(rule) = classify_by_ldha(black_box(455.0)) {
                black_box(combine_assessment(black_box(2), rule));
            }
            black_box(rank_feature_contributions(&names, &scores))
        })
    });
}

criterion_group!(benches, bench_rules);
criterion_main!(benches);
