use cairo::{Context, Format, ImageSurface};
use fingerpaint::config::PanelLayout;
use fingerpaint::draw::{BrushState, Color, Pixel, RasterLayer, StrokePoint, WHITE};
use fingerpaint::input::{LayerKind, StrokeCompositor, TouchEvent};
use fingerpaint::panel::{BrushSettingsPanel, Channel};
use std::cell::Cell;
use std::rc::Rc;

fn drag(canvas: &mut StrokeCompositor, points: &[(f64, f64)]) {
    let (first, rest) = points.split_first().unwrap();
    canvas.handle_touch(TouchEvent::began(first.0, first.1));
    for &(x, y) in rest {
        canvas.handle_touch(TouchEvent::moved(x, y));
    }
    let last = points.last().unwrap();
    canvas.handle_touch(TouchEvent::ended(last.0, last.1));
}

fn committed_pixel(canvas: &StrokeCompositor, x: i32, y: i32) -> Pixel {
    canvas.layer(LayerKind::Committed).pixel(x, y).unwrap()
}

fn surface_pixel(surface: ImageSurface, x: i32, y: i32) -> Pixel {
    let mut layer = RasterLayer::new(surface.width(), surface.height());
    assert!(layer.replace(surface));
    layer.pixel(x, y).unwrap()
}

/// Runs a panel session the way a host does and applies the result.
fn edit_brush(canvas: &mut StrokeCompositor, edit: impl FnOnce(&mut BrushSettingsPanel)) {
    let result = Rc::new(Cell::new(None));
    let sink = Rc::clone(&result);
    let mut panel = BrushSettingsPanel::new(canvas.settings_snapshot(), PanelLayout::Regular)
        .on_complete(move |brush: BrushState| sink.set(Some(brush)));
    edit(&mut panel);
    panel.on_dismiss();
    canvas.apply_brush(result.take().unwrap());
}

#[test]
fn vertical_drag_paints_opaque_black_within_the_brush_margin() {
    let mut canvas = StrokeCompositor::new(64, 64);
    drag(&mut canvas, &[(10.0, 10.0), (10.0, 30.0), (10.0, 50.0)]);

    assert_eq!(
        committed_pixel(&canvas, 10, 30),
        Pixel {
            r: 0,
            g: 0,
            b: 0,
            a: 255
        }
    );

    for y in 0..64 {
        for x in 0..64 {
            let outside = x <= 6 || x >= 13 || y <= 6 || y >= 53;
            if outside {
                assert!(
                    committed_pixel(&canvas, x, y).is_clear(),
                    "pixel ({x}, {y}) should be untouched"
                );
            }
        }
    }
    assert!(canvas.layer(LayerKind::Temporary).is_blank());
}

#[test]
fn half_opacity_stroke_flattens_to_mid_gray() {
    let mut canvas = StrokeCompositor::new(40, 40);
    edit_brush(&mut canvas, |panel| {
        panel.on_channel_changed(Channel::Opacity, 0.5);
        panel.on_diameter_changed(0.2);
    });
    assert_eq!(canvas.brush().opacity, 0.5);

    drag(&mut canvas, &[(5.0, 20.0), (35.0, 20.0)]);

    let flat = canvas.flattened(WHITE).unwrap();
    let px = surface_pixel(flat, 20, 20);
    assert_eq!(px.a, 255);
    for channel in [px.r, px.g, px.b] {
        assert!(
            (channel as i32 - 128).abs() <= 3,
            "expected ~50% gray, got {px:?}"
        );
    }
}

#[test]
fn overlapping_segments_in_one_stroke_do_not_darken() {
    let mut canvas = StrokeCompositor::new(40, 40);
    edit_brush(&mut canvas, |panel| panel.on_channel_changed(Channel::Opacity, 0.5));

    // Back and forth over the same pixels within one gesture.
    drag(
        &mut canvas,
        &[(5.0, 20.0), (35.0, 20.0), (5.0, 20.0), (35.0, 20.0)],
    );
    let single = committed_pixel(&canvas, 20, 20);

    drag(&mut canvas, &[(5.0, 20.0), (35.0, 20.0)]);
    let double = committed_pixel(&canvas, 20, 20);

    assert!((single.a as i32 - 128).abs() <= 1);
    assert!(double.a > single.a, "second stroke should build up");
}

#[test]
fn tap_leaves_a_dot_centered_on_the_touch() {
    let mut canvas = StrokeCompositor::new(32, 32);
    edit_brush(&mut canvas, |panel| panel.on_diameter_changed(0.2));

    let summary = canvas.handle_touch(TouchEvent::began(16.0, 16.0));
    assert!(summary.is_none());
    let summary = canvas.handle_touch(TouchEvent::ended(16.0, 16.0)).unwrap();
    assert!(summary.dot);
    assert_eq!(summary.segments, 1);

    assert!(!committed_pixel(&canvas, 16, 16).is_clear());
    assert!(!committed_pixel(&canvas, 11, 16).is_clear());
    assert!(committed_pixel(&canvas, 2, 2).is_clear());
    assert!(committed_pixel(&canvas, 30, 16).is_clear());
}

#[test]
fn reset_clears_any_number_of_strokes() {
    let mut canvas = StrokeCompositor::new(48, 48);
    for i in 0..5 {
        let y = 5.0 + i as f64 * 8.0;
        drag(&mut canvas, &[(4.0, y), (44.0, y)]);
    }
    assert!(canvas.layer(LayerKind::Committed).painted_pixel_count() > 0);

    canvas.reset();
    assert_eq!(canvas.layer(LayerKind::Committed).painted_pixel_count(), 0);
}

#[test]
fn imported_picture_becomes_part_of_the_drawing_on_commit() {
    let picture = ImageSurface::create(Format::ARgb32, 8, 8).unwrap();
    {
        let ctx = Context::new(&picture).unwrap();
        Color::rgb(0.0, 0.0, 1.0).apply(&ctx);
        ctx.paint().unwrap();
    }

    let mut canvas = StrokeCompositor::new(32, 32);
    canvas.import_image(&picture);
    assert!(canvas.layer(LayerKind::Committed).is_blank());

    canvas.commit();
    let px = committed_pixel(&canvas, 31, 31);
    assert_eq!((px.r, px.g, px.b, px.a), (0, 0, 255, 255));
}

#[test]
fn eraser_stroke_paints_the_paper_color() {
    let mut canvas = StrokeCompositor::new(32, 32);
    drag(&mut canvas, &[(4.0, 16.0), (28.0, 16.0)]);
    canvas.toggle_eraser();
    drag(&mut canvas, &[(4.0, 16.0), (28.0, 16.0)]);

    let px = committed_pixel(&canvas, 16, 16);
    assert_eq!((px.r, px.g, px.b, px.a), (255, 255, 255, 255));

    canvas.toggle_eraser();
    assert_eq!(canvas.brush().rgb(), (0.0, 0.0, 0.0));
}

#[test]
fn zero_sized_canvas_accepts_gestures_silently() {
    let mut canvas = StrokeCompositor::new(0, 0);
    drag(&mut canvas, &[(1.0, 1.0), (5.0, 5.0)]);
    canvas.reset();
    assert!(canvas.flattened(WHITE).is_none());
    assert!(canvas.layer(LayerKind::Committed).pixel(0, 0).is_none());
}

#[test]
fn stroke_points_convert_from_tuples() {
    let point: StrokePoint = (3.0, 4.0).into();
    assert_eq!(point, StrokePoint::new(3.0, 4.0));
}
