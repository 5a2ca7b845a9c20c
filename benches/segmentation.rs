use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use cis_rust::api::{
    compute_graph_segments, compute_map_segments, scan_on_off_jumps, MissingValuePolicy,
    Millivolts, ReportConfig, SurveyRow, Volts,
};

/// A survey-shaped workload: one row per meter with every seventh reading
/// missing, wandering potentials, and a GPS fix on most rows.
fn synthetic_rows(count: u32) -> Vec<SurveyRow> {
    (0..count)
        .filter(|d| d % 7 != 3)
        .map(|distance| SurveyRow {
            data_no: distance,
            distance,
            station: f64::from(distance),
            on_voltage: Some(Volts::new(-0.85 - f64::from(distance % 13) * 0.01)),
            off_voltage: Some(Volts::new(-0.78 - f64::from(distance % 11) * 0.01)),
            dcvg_voltage: (distance % 5 == 0).then(|| Volts::new(0.002)),
            comment: None,
            anomaly_note: None,
            on_time: None,
            off_time: None,
            latitude: (distance % 3 != 0).then(|| 51.0 + f64::from(distance) * 1e-5),
            longitude: (distance % 3 != 0).then(|| 4.0 + f64::from(distance) * 1e-5),
            altitude: None,
        })
        .collect()
}

fn bench_reports(c: &mut Criterion) {
    let rows = synthetic_rows(10_000);
    let config = ReportConfig::default();

    c.bench_function("compute_graph_segments/10k", |b| {
        b.iter(|| compute_graph_segments(black_box(&rows), &config))
    });

    c.bench_function("compute_map_segments/10k", |b| {
        b.iter(|| compute_map_segments(black_box(&rows), &config))
    });
}

fn bench_scans(c: &mut Criterion) {
    let rows = synthetic_rows(10_000);

    c.bench_function("scan_on_off_jumps/10k", |b| {
        b.iter(|| {
            scan_on_off_jumps(
                black_box(&rows),
                Millivolts::new(300.0),
                MissingValuePolicy::TreatAsZero,
            )
        })
    });
}

criterion_group!(benches, bench_reports, bench_scans);
criterion_main!(benches);
