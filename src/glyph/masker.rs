//! Cutting a glyph out of a source image

use crate::glyph::outline::{GlyphCoverage, GlyphOutline};
use image::imageops::FilterType;
use image::{Rgba, RgbaImage};
use tiny_skia::{ColorU8, Paint, Pixmap, Stroke, Transform};

/// Border drawn along the glyph outline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    /// Stroke width in pixels, centred on the outline
    pub width: f32,
    /// Stroke colour, blended over the masked pixels
    pub color: Rgba<u8>,
}

impl StrokeStyle {
    /// Style that draws nothing
    pub const NONE: Self = Self {
        width: 0.0,
        color: Rgba([0, 0, 0, 0]),
    };
}

/// Resize `source` by `scale`, truncating the target size like an integer cast
pub fn scale_source(source: &RgbaImage, scale: f32) -> RgbaImage {
    let width = (source.width() as f32 * scale) as u32;
    let height = (source.height() as f32 * scale) as u32;
    if width == source.width() && height == source.height() {
        return source.clone();
    }
    if width == 0 || height == 0 {
        return RgbaImage::new(width, height);
    }
    image::imageops::resize(source, width, height, FilterType::Triangle)
}

/// Mask `source` with a glyph placed at `offset`
///
/// The result has the scaled source's dimensions. Pixels outside the
/// glyph are fully transparent, pixels inside keep the scaled source
/// content, and the outline is then stroked with `stroke`. `offset` moves
/// the outline's top-left bounding box corner, so `[0, 0]` puts the glyph
/// at the canvas origin.
pub fn mask_glyph(
    source: &RgbaImage,
    outline: &GlyphOutline,
    coverage: &GlyphCoverage,
    scale: f32,
    offset: [i32; 2],
    stroke: StrokeStyle,
) -> RgbaImage {
    let mut canvas = scale_source(source, scale);
    let [ox, oy] = offset;

    for (x, y, pixel) in canvas.enumerate_pixels_mut() {
        let local_x = i64::from(x) - i64::from(ox);
        let local_y = i64::from(y) - i64::from(oy);
        if !coverage.contains(local_x, local_y) {
            *pixel = Rgba([0, 0, 0, 0]);
        }
    }

    if stroke.width > 0.0 && stroke.color.0[3] > 0 {
        stroke_outline(&mut canvas, outline, offset, stroke);
    }

    canvas
}

/// Antialiased stroke of the outline onto `canvas`
///
/// The canvas is round-tripped through a premultiplied `tiny_skia` pixmap
/// and the stroke is composited source-over.
pub fn stroke_outline(
    canvas: &mut RgbaImage,
    outline: &GlyphOutline,
    offset: [i32; 2],
    stroke: StrokeStyle,
) {
    let Some(mut pixmap) = Pixmap::new(canvas.width(), canvas.height()) else {
        return;
    };
    for (target, pixel) in pixmap.pixels_mut().iter_mut().zip(canvas.pixels()) {
        let [r, g, b, a] = pixel.0;
        *target = ColorU8::from_rgba(r, g, b, a).premultiply();
    }

    let [r, g, b, a] = stroke.color.0;
    let mut paint = Paint::default();
    paint.set_color_rgba8(r, g, b, a);
    paint.anti_alias = true;
    let line = Stroke {
        width: stroke.width,
        ..Stroke::default()
    };
    let [ox, oy] = offset;
    pixmap.stroke_path(
        outline.path(),
        &paint,
        &line,
        Transform::from_translate(ox as f32, oy as f32),
        None,
    );

    for (pixel, source) in canvas.pixels_mut().zip(pixmap.pixels()) {
        let color = source.demultiply();
        *pixel = Rgba([color.red(), color.green(), color.blue(), color.alpha()]);
    }
}
