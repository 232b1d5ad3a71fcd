use criterion::{black_box, criterion_group, criterion_main, Criterion};
use plotline_core::{Axis, ContinuousScale, Domain, Insets, Range, Rect, Transition};

fn bench_ticks(c: &mut Criterion) {
    let frame = Rect::from_ltwh(0.0, 0.0, 1024.0, 640.0);
    let gutter = Insets::default();

    c.bench_function("nice_ticks_generate", |b| {
        b.iter(|| black_box(plotline_core::ticks::nice_ticks(-3.7, 1234.5, 12, false)));
    });

    c.bench_function("axis_reconcile_sliding_window", |b| {
        let mut axis = Axis::<f64>::bottom();
        axis.scale_mut().set_scale(
            ContinuousScale::new(Domain::new(0.0, 100.0), Range::new(0.0, 1.0)),
            Transition::Instant,
        );
        let mut now = 0.0;
        b.iter(|| {
            now += 16.0;
            let offset = (now / 16.0) % 500.0;
            axis.scale_mut().set_domain(offset, offset + 100.0, Transition::Instant);
            axis.layout(frame, &gutter);
            black_box(axis.update(now));
        });
    });
}

criterion_group!(benches, bench_ticks);
criterion_main!(benches);
