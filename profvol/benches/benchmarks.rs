use criterion::{criterion_group, criterion_main, Criterion};
use profvol::{
    contour::area_above_contour,
    cutfill::CutFill,
    xshore::{Profile, C},
};

/// Synthetic 2,000-point surveyed line: dune, beach face, and an
/// offshore bar.
fn synthetic_profile(phase: C) -> Profile {
    let points: Vec<(C, C)> = (0..2000)
        .map(|i| {
            let x = i as C;
            let trend = 12.0 - 0.012 * x;
            let bar = 2.5 * ((x / 150.0) + phase).sin();
            (x, trend + bar)
        })
        .collect();
    Profile::from_points(points).unwrap()
}

fn cut_and_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("Cut & Fill");

    let template = synthetic_profile(0.0);
    let built = synthetic_profile(0.8);

    group.bench_with_input(
        "2k stations",
        &(template, built),
        |b, (template, built)| {
            b.iter(|| {
                CutFill::builder()
                    .template(template)
                    .built(built)
                    .build()
                    .unwrap()
            })
        },
    );
}

fn area_above(c: &mut Criterion) {
    let mut group = c.benchmark_group("Area Above Contour");

    let profile = synthetic_profile(0.0);

    group.bench_with_input("2k stations", &profile, |b, profile| {
        b.iter(|| area_above_contour(profile, 2.0, None, 10.0).unwrap())
    });
}

criterion_group!(benches, cut_and_fill, area_above);
criterion_main!(benches);
