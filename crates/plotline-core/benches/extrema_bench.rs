use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use plotline_core::{DataPoint, Plot};

fn build_plot(n: usize) -> Plot<f64, f64> {
    let mut plot = Plot::line();
    for i in 0..n {
        plot.insert_data_point(DataPoint::new(i as f64, ((i * 7919) % 1000) as f64)).unwrap();
    }
    plot
}

fn bench_extrema(c: &mut Criterion) {
    let mut group = c.benchmark_group("extrema");
    for &n in &[10_000usize, 100_000usize] {
        group.bench_function(format!("widen_insert_{n}"), |b| {
            b.iter(|| black_box(build_plot(n).y_data_domain()));
        });
        group.bench_function(format!("shrink_remove_max_{n}"), |b| {
            b.iter_batched(
                || build_plot(n),
                |mut plot| {
                    let peak = plot.points().find(|p| p.y() == 999.0).map(|p| p.x());
                    if let Some(x) = peak {
                        plot.remove_data_point(x);
                    }
                    black_box(plot.y_data_domain())
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_extrema);
criterion_main!(benches);
