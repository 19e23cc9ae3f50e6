use super::*;
use crate::draw::{BLACK, BrushState, PaletteColor, RED, StrokePoint, WHITE};
use crate::input::{ToolIcon, ToolMode, TouchEvent};

fn create_test_compositor() -> StrokeCompositor {
    StrokeCompositor::new(64, 64)
}

fn p(x: f64, y: f64) -> StrokePoint {
    StrokePoint::new(x, y)
}

#[test]
fn test_starts_idle_with_default_brush() {
    let canvas = create_test_compositor();
    assert_eq!(canvas.state(), DrawingState::Idle);
    assert_eq!(canvas.brush(), BrushState::default());
    assert_eq!(canvas.tool_mode(), ToolMode::Drawing);
    assert!(canvas.layer(LayerKind::Committed).is_blank());
}

#[test]
fn test_touch_began_records_origin() {
    let mut canvas = create_test_compositor();
    canvas.touch_began(p(3.0, 4.0));
    assert_eq!(
        canvas.state(),
        DrawingState::Stroking {
            origin: p(3.0, 4.0),
            last: p(3.0, 4.0),
            swiped: false,
            segments: 0,
        }
    );
    // Nothing is drawn until the finger moves or lifts.
    assert!(canvas.layer(LayerKind::Temporary).is_blank());
}

#[test]
fn test_move_events_draw_one_segment_each() {
    let mut canvas = create_test_compositor();
    canvas.touch_began(p(5.0, 5.0));
    for i in 1..=7 {
        canvas.touch_moved(p(5.0 + i as f64 * 6.0, 5.0));
    }
    let summary = canvas.touch_ended(p(47.0, 5.0)).unwrap();
    assert_eq!(
        summary,
        StrokeSummary {
            segments: 7,
            dot: false
        }
    );
}

#[test]
fn test_tap_draws_single_dot() {
    let mut canvas = create_test_compositor();
    assert!(canvas.handle_touch(TouchEvent::began(20.0, 20.0)).is_none());
    let summary = canvas
        .handle_touch(TouchEvent::ended(20.0, 20.0))
        .unwrap();
    assert_eq!(
        summary,
        StrokeSummary {
            segments: 1,
            dot: true
        }
    );

    let committed = canvas.layer(LayerKind::Committed);
    let center = committed.pixel(20, 20).unwrap();
    assert_eq!(center.a, 255);
    assert_eq!((center.r, center.g, center.b), (0, 0, 0));
    assert!(committed.pixel(30, 30).unwrap().is_clear());
    assert_eq!(canvas.state(), DrawingState::Idle);
}

#[test]
fn test_stroke_layer_stays_out_of_canvas_until_touch_up() {
    let mut canvas = create_test_compositor();
    canvas.touch_began(p(10.0, 10.0));
    canvas.touch_moved(p(40.0, 10.0));

    assert!(!canvas.layer(LayerKind::Temporary).is_blank());
    assert_eq!(canvas.layer(LayerKind::Committed).painted_pixel_count(), 0);

    canvas.touch_ended(p(40.0, 10.0));
    assert!(canvas.layer(LayerKind::Temporary).is_blank());
    assert!(canvas.layer(LayerKind::Committed).painted_pixel_count() > 0);
}

#[test]
fn test_stroke_pixels_are_opaque_in_temporary_layer() {
    let mut canvas = create_test_compositor();
    canvas.apply_brush(BrushState::from_color(RED, 0.25, 8.0));
    canvas.touch_began(p(10.0, 30.0));
    canvas.touch_moved(p(30.0, 30.0));
    canvas.touch_moved(p(10.0, 30.0));

    let px = canvas.layer(LayerKind::Temporary).pixel(20, 30).unwrap();
    assert_eq!((px.r, px.a), (255, 255));

    canvas.touch_ended(p(10.0, 30.0));
    // Overlapping segments are blended once, at the merge.
    let merged = canvas.layer(LayerKind::Committed).pixel(20, 30).unwrap();
    assert!((merged.a as i32 - 64).abs() <= 1, "alpha was {}", merged.a);
}

#[test]
fn test_empty_merge_is_bit_identical() {
    let mut canvas = create_test_compositor();
    canvas.touch_began(p(12.0, 12.0));
    canvas.touch_moved(p(50.0, 40.0));
    canvas.touch_ended(p(50.0, 40.0));

    let before = canvas.layer(LayerKind::Committed).pixels();
    canvas.commit();
    assert_eq!(canvas.layer(LayerKind::Committed).pixels(), before);
}

#[test]
fn test_moves_and_ends_while_idle_are_ignored() {
    let mut canvas = create_test_compositor();
    canvas.touch_moved(p(10.0, 10.0));
    assert!(canvas.touch_ended(p(10.0, 10.0)).is_none());
    assert!(canvas.layer(LayerKind::Temporary).is_blank());
    assert!(canvas.layer(LayerKind::Committed).is_blank());
}

#[test]
fn test_second_touch_began_restarts_gesture() {
    let mut canvas = create_test_compositor();
    canvas.touch_began(p(5.0, 5.0));
    canvas.touch_moved(p(15.0, 5.0));
    canvas.touch_began(p(40.0, 40.0));

    let summary = canvas.touch_ended(p(40.0, 40.0)).unwrap();
    assert!(summary.dot);
    let committed = canvas.layer(LayerKind::Committed);
    assert!(!committed.pixel(10, 5).unwrap().is_clear());
    assert!(!committed.pixel(40, 40).unwrap().is_clear());
}

#[test]
fn test_opacity_is_read_at_merge_time() {
    let mut canvas = create_test_compositor();
    canvas.touch_began(p(10.0, 10.0));
    canvas.touch_moved(p(50.0, 10.0));
    canvas.apply_brush(BrushState::from_color(BLACK, 0.5, 5.0));
    canvas.touch_ended(p(50.0, 10.0));

    let px = canvas.layer(LayerKind::Committed).pixel(30, 10).unwrap();
    assert!((px.a as i32 - 128).abs() <= 1, "alpha was {}", px.a);
}

#[test]
fn test_new_opacity_does_not_touch_existing_strokes() {
    let mut canvas = create_test_compositor();
    canvas.touch_began(p(10.0, 10.0));
    canvas.touch_moved(p(50.0, 10.0));
    canvas.touch_ended(p(50.0, 10.0));

    canvas.apply_brush(BrushState::from_color(BLACK, 0.2, 5.0));
    canvas.touch_began(p(10.0, 40.0));
    canvas.touch_moved(p(50.0, 40.0));
    canvas.touch_ended(p(50.0, 40.0));

    let committed = canvas.layer(LayerKind::Committed);
    assert_eq!(committed.pixel(30, 10).unwrap().a, 255);
    assert!(committed.pixel(30, 40).unwrap().a < 100);
}

#[test]
fn test_eraser_round_trip_restores_rgb() {
    let mut canvas = create_test_compositor();
    let custom = BrushState {
        red: 0.13,
        green: 0.57,
        blue: 0.91,
        opacity: 0.7,
        diameter: 9.0,
    };
    canvas.apply_brush(custom);

    assert_eq!(canvas.toggle_eraser(), ToolMode::Erasing);
    assert_eq!(canvas.brush().rgb(), (1.0, 1.0, 1.0));
    assert_eq!(canvas.cursor().icon, ToolIcon::Eraser);

    assert_eq!(canvas.toggle_eraser(), ToolMode::Drawing);
    assert_eq!(canvas.brush(), custom);
    assert_eq!(canvas.cursor().icon, ToolIcon::PaintBrush);
}

#[test]
fn test_eraser_paints_background_color() {
    let mut canvas = create_test_compositor();
    canvas.touch_began(p(10.0, 20.0));
    canvas.touch_moved(p(50.0, 20.0));
    canvas.touch_ended(p(50.0, 20.0));

    canvas.toggle_eraser();
    canvas.touch_began(p(30.0, 20.0));
    canvas.touch_ended(p(30.0, 20.0));

    let px = canvas.layer(LayerKind::Committed).pixel(30, 20).unwrap();
    assert_eq!((px.r, px.g, px.b, px.a), (255, 255, 255, 255));
}

#[test]
fn test_settings_while_erasing_update_draw_color() {
    let mut canvas = create_test_compositor();
    canvas.toggle_eraser();
    assert_eq!(canvas.settings_snapshot().rgb(), (0.0, 0.0, 0.0));

    canvas.apply_brush(BrushState::from_color(RED, 0.5, 12.0));
    assert_eq!(canvas.tool_mode(), ToolMode::Erasing);
    assert_eq!(canvas.brush().stroke_color(), WHITE);
    assert_eq!(canvas.brush().diameter, 12.0);

    canvas.toggle_eraser();
    assert_eq!(canvas.brush().stroke_color(), RED);
}

#[test]
fn test_palette_color_leaves_eraser_mode() {
    let mut canvas = create_test_compositor();
    canvas.apply_brush(BrushState::from_color(BLACK, 0.6, 5.0));
    canvas.toggle_eraser();

    canvas.select_palette_color(PaletteColor::Cyan);
    assert_eq!(canvas.tool_mode(), ToolMode::Drawing);
    assert_eq!(canvas.brush().rgb(), (0.0, 1.0, 1.0));
    assert_eq!(canvas.brush().opacity, 0.6);
    assert_eq!(canvas.cursor().icon, ToolIcon::PaintBrush);
}

#[test]
fn test_reset_clears_committed_canvas() {
    let mut canvas = create_test_compositor();
    for row in 0..5 {
        let y = 8.0 + row as f64 * 10.0;
        canvas.touch_began(p(5.0, y));
        canvas.touch_moved(p(60.0, y));
        canvas.touch_ended(p(60.0, y));
    }
    assert!(canvas.layer(LayerKind::Committed).painted_pixel_count() > 0);

    canvas.reset();
    assert!(canvas.layer(LayerKind::Committed).is_blank());
    assert_eq!(canvas.layer(LayerKind::Committed).painted_pixel_count(), 0);
}

#[test]
fn test_reset_mid_stroke_keeps_stroke_layer() {
    let mut canvas = create_test_compositor();
    canvas.touch_began(p(10.0, 10.0));
    canvas.touch_moved(p(30.0, 10.0));
    canvas.reset();
    assert!(canvas.is_stroking());
    assert!(!canvas.layer(LayerKind::Temporary).is_blank());

    canvas.touch_ended(p(30.0, 10.0));
    assert!(!canvas.layer(LayerKind::Committed).pixel(20, 10).unwrap().is_clear());
}

#[test]
fn test_cursor_follows_last_segment() {
    let mut canvas = create_test_compositor();
    assert_eq!(canvas.cursor().center, p(64.0, 64.0));
    canvas.touch_began(p(10.0, 40.0));
    canvas.touch_moved(p(20.0, 40.0));
    assert_eq!(canvas.cursor().center, p(35.0, 20.0));
}

#[test]
fn test_dirty_regions_track_segments_and_merges() {
    let mut canvas = create_test_compositor();
    canvas.touch_began(p(10.0, 10.0));
    canvas.touch_moved(p(20.0, 10.0));
    let regions = canvas.take_dirty_regions();
    assert_eq!(regions.len(), 1);
    assert!(regions[0].contains(15, 10));

    canvas.touch_ended(p(20.0, 10.0));
    let regions = canvas.take_dirty_regions();
    assert_eq!(regions.len(), 1);
    assert_eq!((regions[0].width, regions[0].height), (64, 64));
}

#[test]
fn test_far_off_canvas_move_marks_full_repaint() {
    let mut canvas = create_test_compositor();
    canvas.touch_began(p(0.0, 0.0));
    canvas.touch_moved(p(-3e9, 0.0));
    let regions = canvas.take_dirty_regions();
    assert_eq!(regions.len(), 1);
    assert_eq!((regions[0].width, regions[0].height), (64, 64));

    let summary = canvas.touch_ended(p(-3e9, 0.0)).unwrap();
    assert_eq!(summary.segments, 1);
}

#[test]
fn test_zero_sized_canvas_is_a_no_op() {
    let mut canvas = StrokeCompositor::new(0, 0);
    canvas.touch_began(p(1.0, 1.0));
    canvas.touch_moved(p(2.0, 2.0));
    let summary = canvas.touch_ended(p(2.0, 2.0)).unwrap();
    assert_eq!(summary.segments, 1);
    assert!(canvas.snapshot(LayerKind::Committed).is_none());
    assert!(canvas.flattened(WHITE).is_none());
}

#[test]
fn test_imported_image_waits_for_merge() {
    let mut canvas = create_test_compositor();
    let image = cairo::ImageSurface::create(cairo::Format::ARgb32, 16, 16).unwrap();
    {
        let ctx = cairo::Context::new(&image).unwrap();
        ctx.set_source_rgb(0.0, 0.0, 1.0);
        ctx.paint().unwrap();
    }

    canvas.import_image(&image);
    assert!(canvas.layer(LayerKind::Committed).is_blank());
    let px = canvas.layer(LayerKind::Temporary).pixel(50, 50).unwrap();
    assert_eq!((px.b, px.a), (255, 255));

    canvas.commit();
    let px = canvas.layer(LayerKind::Committed).pixel(63, 63).unwrap();
    assert_eq!((px.b, px.a), (255, 255));
    assert!(canvas.layer(LayerKind::Temporary).is_blank());
}

#[test]
fn test_snapshot_is_independent_copy() {
    let mut canvas = create_test_compositor();
    canvas.touch_began(p(32.0, 32.0));
    canvas.touch_ended(p(32.0, 32.0));

    let snapshot = canvas.snapshot(LayerKind::Committed).unwrap();
    canvas.reset();

    let mut copy = crate::draw::RasterLayer::new(64, 64);
    assert!(copy.replace(snapshot));
    assert_eq!(copy.pixel(32, 32).unwrap().a, 255);
}
