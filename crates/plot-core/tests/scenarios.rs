// File: crates/plot-core/tests/scenarios.rs
// Purpose: End-to-end flows: the sine demo layout and a viewport resize.

use float_cmp::approx_eq;
use plot_core::{MemoryScene, PlotCanvas, PlotId, PlotStyle, Primitive, PrimitiveId, Scene, Shape, Size};

fn sine_canvas() -> (PlotCanvas, PlotId) {
    let mut canvas = PlotCanvas::new(MemoryScene::new(Size::new(800, 600))).expect("canvas");
    let id = canvas.new_plot(PlotStyle::default());
    canvas
        .plot(id)
        .unwrap()
        .extend((0..200).map(|i| (i as f64 - 100.0) / 20.0).map(|x| (x, x.sin())));
    canvas.set_axis_view((-5.0, -1.5), (5.0, 1.5)).expect("view");
    (canvas, id)
}

fn shape(canvas: &PlotCanvas, id: PrimitiveId) -> Shape {
    match canvas.scene().get(id) {
        Some(Primitive::Shape { shape, .. }) => shape.clone(),
        other => panic!("expected shape, got {other:?}"),
    }
}

#[test]
fn sine_markers_sit_on_their_pixel_coords() {
    let (canvas, id) = sine_canvas();
    let axis = canvas.axis();
    let plot = canvas.get_plot(id).unwrap();
    assert_eq!(plot.len(), 200);
    for rec in plot.records() {
        let (x, y) = rec.point;
        let center = shape(&canvas, rec.marker.unwrap()).center();
        let want = axis.pixel_coords((x, x.sin())).unwrap();
        let got = axis.pixel_coords(center).unwrap();
        assert!(approx_eq!(f64, got.0, want.0, epsilon = 1e-9));
        assert!(approx_eq!(f64, got.1, want.1, epsilon = 1e-9));
        // And on the device, flipped.
        let dev = canvas.scene().device_point(center);
        assert!(approx_eq!(f64, dev.0, want.0, epsilon = 1e-9));
        assert!(approx_eq!(f64, dev.1, 600.0 - want.1, epsilon = 1e-9));
        assert_eq!(y, x.sin());
    }
}

#[test]
fn resize_keeps_marker_pixels_and_moves_lines() {
    let (mut canvas, id) = sine_canvas();
    let before = canvas.axis().scale().unwrap();
    let plot = canvas.get_plot(id).unwrap();
    let markers: Vec<_> = plot.markers().flatten().collect();
    let first_line = plot.lines()[0];
    let (from, to) = match canvas.scene().get(first_line) {
        Some(Primitive::Line { from, to, .. }) => (*from, *to),
        other => panic!("expected line, got {other:?}"),
    };
    let dev_before = (canvas.scene().device_point(from), canvas.scene().device_point(to));

    canvas.resize(Size::new(400, 300)).unwrap();
    let after = canvas.axis().scale().unwrap();
    assert_eq!(after.x, before.x / 2.0);
    assert_eq!(after.y, before.y / 2.0);

    for m in &markers {
        let (w, h) = shape(&canvas, *m).extent();
        assert!(approx_eq!(f64, w * after.x, 8.0, epsilon = 1e-9));
        assert!(approx_eq!(f64, h * after.y, 8.0, epsilon = 1e-9));
    }

    let dev_after = (canvas.scene().device_point(from), canvas.scene().device_point(to));
    for (a, b) in [(dev_after.0, dev_before.0), (dev_after.1, dev_before.1)] {
        assert!(approx_eq!(f64, a.0, b.0 / 2.0, epsilon = 1e-9));
        assert!(approx_eq!(f64, a.1, b.1 / 2.0, epsilon = 1e-9));
    }
}

#[test]
fn off_origin_view_draws_zero_lines_through_center() {
    let mut canvas = PlotCanvas::new(MemoryScene::new(Size::new(800, 600))).expect("canvas");
    canvas.set_axis_view((10.0, 20.0), (30.0, 25.0)).unwrap();
    assert_eq!(canvas.axis().zero_lines(), (20.0, 22.5));
}
