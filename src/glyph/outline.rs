//! Glyph outline geometry and pixel coverage
//!
//! Outlines are `tiny_skia` paths in pixel units with y growing downwards,
//! translated so the visual bounding box starts at (0,0). A pixel belongs
//! to the glyph when its centre is inside the path under the non-zero
//! winding rule.

use crate::io::error::{GlyphError, Result};
use ndarray::Array2;
use tiny_skia::{FillRule, Mask, Path, PathBuilder, Rect, Transform};

/// Uppercase letters rendered with their lowercase outline
///
/// Only these three are substituted; every other accented capital keeps
/// its own outline.
pub const CASE_SUBSTITUTIONS: [(char, char); 3] = [('Ä', 'ä'), ('Ö', 'ö'), ('Ü', 'ü')];

/// Character whose outline is actually drawn for `character`
pub fn outline_character(character: char) -> char {
    CASE_SUBSTITUTIONS
        .iter()
        .find(|(from, _)| *from == character)
        .map_or(character, |(_, to)| *to)
}

/// Look up the outline drawn for `character`, applying [`CASE_SUBSTITUTIONS`]
///
/// # Errors
///
/// Returns `OutlineUnavailable` naming the requested character if the
/// provider has no outline for it or its substitute
pub fn resolve_outline(provider: &dyn OutlineProvider, character: char) -> Result<GlyphOutline> {
    provider
        .outline(outline_character(character))
        .map_err(|err| match err {
            GlyphError::OutlineUnavailable { .. } => GlyphError::OutlineUnavailable { character },
            other => other,
        })
}

/// Source of glyph outlines for a fixed font and size
pub trait OutlineProvider: Send + Sync {
    /// Outline for `character`, anchored at its visual top-left corner
    ///
    /// # Errors
    ///
    /// Returns `OutlineUnavailable` if the font cannot render the character
    fn outline(&self, character: char) -> Result<GlyphOutline>;
}

/// Filled 2-D shape of one character
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphOutline {
    path: Path,
    width: f32,
    height: f32,
}

impl GlyphOutline {
    /// Anchor `path` at the top-left corner of its visual bounding box
    ///
    /// The box is the tight one, so off-curve control points do not widen
    /// it. Returns `None` if the path has no finite bounds.
    pub fn from_path(path: Path) -> Option<Self> {
        let bounds = path.compute_tight_bounds()?;
        let path = path.transform(Transform::from_translate(-bounds.left(), -bounds.top()))?;
        Some(Self {
            path,
            width: bounds.width(),
            height: bounds.height(),
        })
    }

    /// Build an outline from closed polygons in any coordinate origin
    ///
    /// Polygons with fewer than three points cover no area and are skipped.
    /// Returns `None` when nothing is left.
    pub fn from_contours(contours: &[Vec<[f32; 2]>]) -> Option<Self> {
        let mut builder = PathBuilder::new();
        for contour in contours.iter().filter(|contour| contour.len() >= 3) {
            let mut points = contour.iter();
            if let Some([x, y]) = points.next() {
                builder.move_to(*x, *y);
            }
            for [x, y] in points {
                builder.line_to(*x, *y);
            }
            builder.close();
        }
        Self::from_path(builder.finish()?)
    }

    /// Axis-aligned rectangle outline of the given size
    ///
    /// Returns `None` for a negative or non-finite size.
    pub fn rectangle(width: f32, height: f32) -> Option<Self> {
        let rect = Rect::from_xywh(0.0, 0.0, width, height)?;
        Some(Self {
            path: PathBuilder::from_rect(rect),
            width,
            height,
        })
    }

    /// Width of the visual bounding box
    pub const fn width(&self) -> f32 {
        self.width
    }

    /// Height of the visual bounding box
    pub const fn height(&self) -> f32 {
        self.height
    }

    /// Outline path, origin at the bounding box corner
    pub const fn path(&self) -> &Path {
        &self.path
    }

    /// Rasterize the outline at pixel centres
    ///
    /// The path is filled without antialiasing into a mask the size of the
    /// bounding box rounded up.
    pub fn coverage(&self) -> GlyphCoverage {
        let cols = self.width.ceil().max(0.0) as u32;
        let rows = self.height.ceil().max(0.0) as u32;
        let shape = (rows as usize, cols as usize);

        let cells = Mask::new(cols, rows)
            .and_then(|mut mask| {
                mask.fill_path(&self.path, FillRule::Winding, false, Transform::identity());
                let filled = mask.data().iter().map(|&value| value > 0).collect();
                Array2::from_shape_vec(shape, filled).ok()
            })
            .unwrap_or_else(|| Array2::from_elem(shape, false));

        GlyphCoverage { cells }
    }
}

/// Pixel-centre rasterization of an outline, indexed `[row, col]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphCoverage {
    cells: Array2<bool>,
}

impl GlyphCoverage {
    /// Columns covered by the bounding box
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Rows covered by the bounding box
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Whether the pixel at glyph-local `(x, y)` is inside the outline
    ///
    /// Coordinates outside the bounding box are never inside.
    pub fn contains(&self, x: i64, y: i64) -> bool {
        if x < 0 || y < 0 {
            return false;
        }
        self.cells
            .get([y as usize, x as usize])
            .copied()
            .unwrap_or(false)
    }

    /// Number of covered pixels
    pub fn area(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }
}
