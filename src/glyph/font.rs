//! TrueType/OpenType outlines through `ab_glyph`

use crate::glyph::outline::{GlyphOutline, OutlineProvider};
use crate::io::error::{GlyphError, Result, invalid_parameter};
use ab_glyph::{Font, FontVec, OutlineCurve, Point, PxScale, ScaleFont};
use std::path::Path;
use tiny_skia::PathBuilder;

/// Outline provider for one font at one point size
pub struct FontOutlines {
    font: FontVec,
    scale: PxScale,
}

impl FontOutlines {
    /// Parse font bytes and fix the point size
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The point size is not a finite positive number
    /// - The bytes are not a parsable font
    /// - The font lacks the units-per-em needed to convert points to pixels
    pub fn from_bytes(data: Vec<u8>, point_size: f32, origin: &str) -> Result<Self> {
        if !point_size.is_finite() || point_size <= 0.0 {
            return Err(invalid_parameter(
                "point_size",
                &point_size,
                &"must be finite and greater than zero",
            ));
        }

        let font = FontVec::try_from_vec(data).map_err(|e| GlyphError::FontLoad {
            origin: origin.to_string(),
            reason: e.to_string(),
        })?;
        let scale = font
            .pt_to_px_scale(point_size)
            .ok_or_else(|| GlyphError::FontLoad {
                origin: origin.to_string(),
                reason: "font does not declare units per em".to_string(),
            })?;

        Ok(Self { font, scale })
    }

    /// Read a font file from disk
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or fails [`Self::from_bytes`]
    pub fn from_file(path: &Path, point_size: f32) -> Result<Self> {
        let data = std::fs::read(path).map_err(|e| GlyphError::FileSystem {
            path: path.to_path_buf(),
            operation: "read font",
            source: e,
        })?;
        Self::from_bytes(data, point_size, &path.display().to_string())
    }
}

impl OutlineProvider for FontOutlines {
    fn outline(&self, character: char) -> Result<GlyphOutline> {
        let glyph_id = self.font.glyph_id(character);
        // Glyph 0 is .notdef, which fonts use for unmapped characters
        if glyph_id.0 == 0 {
            return Err(GlyphError::OutlineUnavailable { character });
        }

        let outline = self
            .font
            .outline(glyph_id)
            .ok_or(GlyphError::OutlineUnavailable { character })?;

        let scaled = self.font.as_scaled(self.scale);
        outline_path(
            &outline.curves,
            scaled.h_scale_factor(),
            scaled.v_scale_factor(),
        )
        .and_then(GlyphOutline::from_path)
        .ok_or(GlyphError::OutlineUnavailable { character })
    }
}

/// Trace font-unit curves into a pixel-space path
///
/// Font units grow upwards, so y is flipped. A curve whose start point does
/// not continue the previous curve closes the current contour and opens a
/// new one. Returns `None` for an empty curve list.
pub fn outline_path(
    curves: &[OutlineCurve],
    h_scale: f32,
    v_scale: f32,
) -> Option<tiny_skia::Path> {
    let to_pixels = |p: Point| (p.x * h_scale, -p.y * v_scale);
    let mut builder = PathBuilder::new();
    let mut pen: Option<(f32, f32)> = None;

    for curve in curves {
        let (start, end) = match curve {
            OutlineCurve::Line(p0, p1)
            | OutlineCurve::Quad(p0, _, p1)
            | OutlineCurve::Cubic(p0, _, _, p1) => (to_pixels(*p0), to_pixels(*p1)),
        };

        if !pen.is_some_and(|last| same_point(last, start)) {
            if pen.is_some() {
                builder.close();
            }
            builder.move_to(start.0, start.1);
        }

        match curve {
            OutlineCurve::Line(..) => builder.line_to(end.0, end.1),
            OutlineCurve::Quad(_, control, _) => {
                let (cx, cy) = to_pixels(*control);
                builder.quad_to(cx, cy, end.0, end.1);
            }
            OutlineCurve::Cubic(_, first, second, _) => {
                let (ax, ay) = to_pixels(*first);
                let (bx, by) = to_pixels(*second);
                builder.cubic_to(ax, ay, bx, by, end.0, end.1);
            }
        }
        pen = Some(end);
    }

    if pen.is_some() {
        builder.close();
    }
    builder.finish()
}

fn same_point(a: (f32, f32), b: (f32, f32)) -> bool {
    (a.0 - b.0).abs() < 1e-3 && (a.1 - b.1).abs() < 1e-3
}
