use criterion::{black_box, criterion_group, criterion_main, Criterion};
use priority_capacity::{
    analysis::CapacityAnalyzer,
    config::{AnalysisParams, IntersectionVolumes},
    report::render_text,
};

fn reference_volumes() -> IntersectionVolumes {
    IntersectionVolumes { i2: 396, i3: 567, i4: 284, i6: 6, i7: 6, i8: 401 }
}

fn benchmark_analysis(c: &mut Criterion) {
    let analyzer = CapacityAnalyzer::new(AnalysisParams::default())
        .expect("Default parameters must be valid");
    let volumes = reference_volumes();

    c.bench_function("analyze_reference_intersection", |b| {
        b.iter(|| analyzer.analyze(black_box(&volumes)).unwrap())
    });
}

fn benchmark_report(c: &mut Criterion) {
    let analyzer = CapacityAnalyzer::new(AnalysisParams::default())
        .expect("Default parameters must be valid");
    let analysis = analyzer.analyze(&reference_volumes()).unwrap();

    c.bench_function("render_text_report", |b| {
        b.iter(|| render_text(black_box(&analysis)))
    });
}

fn benchmark_volume_scaling(c: &mut Criterion) {
    let analyzer = CapacityAnalyzer::new(AnalysisParams::default())
        .expect("Default parameters must be valid");

    let mut group = c.benchmark_group("volume_scaling");

    for scale in [1u32, 2, 4].iter() {
        let base = reference_volumes();
        let volumes = IntersectionVolumes {
            i2: base.i2 / scale,
            i3: base.i3 / scale,
            i4: base.i4 / scale,
            i6: base.i6,
            i7: base.i7,
            i8: base.i8 / scale,
        };

        group.bench_with_input(format!("major_volume_div_{}", scale), scale, |b, _scale| {
            b.iter(|| analyzer.analyze(black_box(&volumes)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_analysis,
    benchmark_report,
    benchmark_volume_scaling
);
criterion_main!(benches);
