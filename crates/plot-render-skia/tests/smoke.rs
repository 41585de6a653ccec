// File: crates/plot-render-skia/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG, labels included.

use plot_core::{PlotCanvas, PlotStyle, Size};
use plot_render_skia::{RenderOptions, SkiaRenderer};

#[test]
fn render_smoke_png() {
    let renderer = SkiaRenderer::new();
    let mut canvas = PlotCanvas::new(renderer.new_scene(Size::new(320, 240))).expect("canvas");
    canvas.set_axis_view((0.0, -1.0), (4.0, 4.0)).unwrap();
    let id = canvas.new_plot(PlotStyle::default());
    canvas
        .plot(id)
        .unwrap()
        .extend([(0.0, 0.0), (1.0, 2.0), (2.0, 1.0), (3.0, 3.5), (4.0, 2.5)]);

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    renderer.render_to_png(canvas.scene(), &opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = renderer.render_to_png_bytes(canvas.scene(), &opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}
