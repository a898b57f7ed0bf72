//! Trimming masked glyphs to their visible extent

use crate::io::error::{GlyphError, Result};
use image::{Rgba, RgbaImage};

/// Inclusive pixel bounds of the visible content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    /// Leftmost visible column
    pub min_x: u32,
    /// Topmost visible row
    pub min_y: u32,
    /// Rightmost visible column
    pub max_x: u32,
    /// Bottom visible row
    pub max_y: u32,
}

impl BoundingBox {
    /// Number of columns spanned, both edges included
    pub const fn width(&self) -> u32 {
        self.max_x - self.min_x + 1
    }

    /// Number of rows spanned, both edges included
    pub const fn height(&self) -> u32 {
        self.max_y - self.min_y + 1
    }
}

/// Finds the minimal rectangle containing every pixel with non-zero alpha
pub fn visible_bounds(image: &RgbaImage) -> Option<BoundingBox> {
    let mut min_x = u32::MAX;
    let mut min_y = u32::MAX;
    let mut max_x = 0;
    let mut max_y = 0;
    let mut found = false;

    for (x, y, pixel) in image.enumerate_pixels() {
        if pixel.0[3] > 0 {
            found = true;
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }
    }

    found.then_some(BoundingBox {
        min_x,
        min_y,
        max_x,
        max_y,
    })
}

/// Crop `image` to its visible content plus `margin` pixels on every side
///
/// The margin may extend past the input; those pixels are transparent.
///
/// # Errors
///
/// Returns `EmptyBoundingBox` if no pixel of `image` is visible
pub fn crop_to_content(image: &RgbaImage, margin: u32) -> Result<RgbaImage> {
    let bounds = visible_bounds(image).ok_or(GlyphError::EmptyBoundingBox {
        width: image.width(),
        height: image.height(),
    })?;

    let width = bounds.width().saturating_add(margin.saturating_mul(2));
    let height = bounds.height().saturating_add(margin.saturating_mul(2));
    let origin_x = i64::from(bounds.min_x) - i64::from(margin);
    let origin_y = i64::from(bounds.min_y) - i64::from(margin);

    let cropped = RgbaImage::from_fn(width, height, |x, y| {
        let source_x = origin_x + i64::from(x);
        let source_y = origin_y + i64::from(y);
        if source_x < 0 || source_y < 0 {
            return Rgba([0, 0, 0, 0]);
        }
        image
            .get_pixel_checked(source_x as u32, source_y as u32)
            .copied()
            .unwrap_or(Rgba([0, 0, 0, 0]))
    });

    Ok(cropped)
}
