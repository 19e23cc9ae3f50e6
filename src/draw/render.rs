//! Cairo-based rendering functions for strokes, merges and previews.

use super::color::Color;
use super::layer::create_surface;
use super::point::StrokePoint;
use cairo::{Context, Extend, ImageSurface, LineCap, LineJoin, Operator};

/// Fills the whole context with an opaque background color.
///
/// Used when flattening the canvas for export, so translucent strokes end up
/// blended over the paper color instead of over transparency.
pub fn render_background(ctx: &Context, color: Color) {
    let _ = ctx.save();
    ctx.set_operator(Operator::Source);
    color.apply(ctx);
    let _ = ctx.paint(); // Ignore errors - a failed paint leaves the surface transparent
    let _ = ctx.restore();
}

/// Strokes one straight segment with round caps.
///
/// A segment whose endpoints coincide is rendered as a filled dot of the given
/// width; that is how a tap without movement leaves a mark.
///
/// # Arguments
/// * `ctx` - Cairo drawing context to render to
/// * `from` - Segment start
/// * `to` - Segment end
/// * `color` - Stroke color (drawn as given; callers pass opaque colors)
/// * `width` - Line width in pixels
pub fn render_segment(ctx: &Context, from: StrokePoint, to: StrokePoint, color: Color, width: f64) {
    ctx.set_operator(Operator::Over);
    color.apply(ctx);
    ctx.set_line_width(width);
    ctx.set_line_cap(LineCap::Round);
    ctx.set_line_join(LineJoin::Round);

    ctx.move_to(from.x, from.y);
    ctx.line_to(to.x, to.y);
    let _ = ctx.stroke();
}

/// Paints `source` over the context at the given opacity.
pub fn paint_surface(ctx: &Context, source: &ImageSurface, opacity: f64) {
    if opacity <= 0.0 {
        return;
    }
    ctx.set_operator(Operator::Over);
    if ctx.set_source_surface(source, 0.0, 0.0).is_err() {
        return;
    }
    if opacity >= 1.0 {
        let _ = ctx.paint();
    } else {
        let _ = ctx.paint_with_alpha(opacity);
    }
}

/// Paints `source` scaled to cover a `width` x `height` area.
pub fn paint_surface_scaled(ctx: &Context, source: &ImageSurface, width: i32, height: i32) {
    let (src_w, src_h) = (source.width(), source.height());
    if src_w <= 0 || src_h <= 0 || width <= 0 || height <= 0 {
        return;
    }

    let _ = ctx.save();
    ctx.scale(
        width as f64 / src_w as f64,
        height as f64 / src_h as f64,
    );
    ctx.set_operator(Operator::Over);
    if ctx.set_source_surface(source, 0.0, 0.0).is_ok() {
        // Pad so filtering at the image border does not fade into transparency
        ctx.source().set_extend(Extend::Pad);
        let _ = ctx.paint();
    }
    let _ = ctx.restore();
}

/// Composites `overlay` at `opacity` over `base` into a fresh surface.
///
/// The base is copied at full opacity first. Either input may be missing, in
/// which case it contributes nothing. Returns `None` for zero-sized output.
pub fn composite_layers(
    base: Option<&ImageSurface>,
    overlay: Option<&ImageSurface>,
    opacity: f64,
    width: i32,
    height: i32,
) -> Option<ImageSurface> {
    let merged = create_surface(width, height)?;
    {
        let ctx = Context::new(&merged).ok()?;
        if let Some(base) = base {
            paint_surface(&ctx, base, 1.0);
        }
        if let Some(overlay) = overlay {
            paint_surface(&ctx, overlay, opacity.clamp(0.0, 1.0));
        }
    }
    merged.flush();
    Some(merged)
}

/// Deep copy of an image surface.
pub fn copy_surface(source: &ImageSurface) -> Option<ImageSurface> {
    composite_layers(Some(source), None, 1.0, source.width(), source.height())
}

/// Draws a dot of the given diameter centered in a `width` x `height` area.
///
/// Same geometry as a tap on the canvas: a zero-length round-capped segment.
pub fn render_brush_dot(ctx: &Context, width: i32, height: i32, diameter: f64, color: Color) {
    let center = StrokePoint::new(width as f64 / 2.0, height as f64 / 2.0);
    render_segment(ctx, center, center, color, diameter);
}

/// Renders a color swatch: a solid border framing the color fill.
///
/// # Arguments
/// * `ctx` - Cairo drawing context to render to
/// * `width` - Swatch width in pixels
/// * `height` - Swatch height in pixels
/// * `fill` - Swatch color, alpha included
/// * `border` - Border color
/// * `border_width` - Border thickness in pixels (0 disables the border)
pub fn render_swatch(
    ctx: &Context,
    width: i32,
    height: i32,
    fill: Color,
    border: Color,
    border_width: f64,
) {
    let (w, h) = (width as f64, height as f64);

    let _ = ctx.save();
    ctx.set_operator(Operator::Source);
    fill.apply(ctx);
    ctx.rectangle(0.0, 0.0, w, h);
    let _ = ctx.fill();

    if border_width > 0.0 {
        ctx.set_operator(Operator::Over);
        border.apply(ctx);
        ctx.set_line_width(border_width);
        ctx.set_line_join(LineJoin::Miter);
        let inset = border_width / 2.0;
        ctx.rectangle(inset, inset, w - border_width, h - border_width);
        let _ = ctx.stroke();
    }
    let _ = ctx.restore();
}

/// Renders the committed canvas over an opaque background into a new surface.
pub fn flatten_onto(
    source: Option<&ImageSurface>,
    background: Color,
    width: i32,
    height: i32,
) -> Option<ImageSurface> {
    let flat = create_surface(width, height)?;
    {
        let ctx = Context::new(&flat).ok()?;
        render_background(&ctx, background.opaque());
        if let Some(source) = source {
            paint_surface(&ctx, source, 1.0);
        }
    }
    flat.flush();
    Some(flat)
}
