use criterion::{black_box, criterion_group, criterion_main, Criterion};
use plot_core::{MemoryScene, PlotCanvas, PlotStyle, Size};

fn build_canvas(n: usize) -> PlotCanvas {
    let mut canvas = PlotCanvas::new(MemoryScene::new(Size::new(800, 600))).expect("canvas");
    canvas.set_axis_view((-5.0, -1.5), (5.0, 1.5)).expect("view");
    let id = canvas.new_plot(PlotStyle::default());
    let step = 10.0 / n as f64;
    canvas
        .plot(id)
        .expect("plot")
        .extend((0..n).map(|i| -5.0 + i as f64 * step).map(|x| (x, x.sin())));
    canvas
}

fn bench_resize(c: &mut Criterion) {
    let mut group = c.benchmark_group("resize_redraw");
    for &n in &[1_000usize, 10_000usize] {
        group.bench_function(format!("points_{n}"), |b| {
            let mut canvas = build_canvas(n);
            let mut flip = false;
            b.iter(|| {
                flip = !flip;
                let size = if flip { Size::new(400, 300) } else { Size::new(800, 600) };
                canvas.resize(black_box(size)).expect("resize");
            });
        });
    }
    group.finish();
}

fn bench_axis_update(c: &mut Criterion) {
    c.bench_function("axis_view_change", |b| {
        let mut canvas = build_canvas(0);
        let mut w = 1.0;
        b.iter(|| {
            w = if w > 1e4 { 1.0 } else { w * 1.7 };
            canvas.set_axis_view(black_box((-w, -w * 0.3)), black_box((w, w * 0.3))).expect("view");
        });
    });
}

criterion_group!(benches, bench_resize, bench_axis_update);
criterion_main!(benches);
