//! Desirability mask: the face-covered area a glyph placement tries to reveal

use crate::faces::region::FaceRegion;
use crate::io::configuration::MASK_MARKER_COLOR;
use bitvec::prelude::*;
use image::{Rgba, RgbaImage};
use tiny_skia::{FillRule, Mask, PathBuilder, Rect, Transform};

/// Binary raster marking pixels inside any face ellipse
///
/// Same dimensions as the source image. Pixels are stored row-major in a
/// bit vector; overlapping ellipses simply cover the same bits again.
#[derive(Clone, Debug)]
pub struct DesirabilityMask {
    bits: BitVec,
    width: u32,
    height: u32,
}

impl DesirabilityMask {
    /// Create a mask with no desirable pixels
    pub fn empty(width: u32, height: u32) -> Self {
        Self {
            bits: bitvec![0; width as usize * height as usize],
            width,
            height,
        }
    }

    /// Fill the ellipse inscribed in every region onto a fresh mask
    ///
    /// Each ellipse is filled as a `tiny_skia` oval without antialiasing,
    /// so a pixel is desirable when its centre lies inside the ellipse and
    /// the filled area never leaves the region's rectangle. Regions are
    /// clipped to the image.
    pub fn from_regions(width: u32, height: u32, regions: &[FaceRegion]) -> Self {
        let Some(mut raster) = Mask::new(width, height) else {
            return Self::empty(width, height);
        };

        for region in regions.iter().filter(|region| !region.is_degenerate()) {
            let (cx, cy) = region.center();
            let (a, b) = region.semi_axes();
            let oval = Rect::from_ltrb(
                (cx - a) as f32,
                (cy - b) as f32,
                (cx + a) as f32,
                (cy + b) as f32,
            )
            .and_then(PathBuilder::from_oval);
            if let Some(oval) = oval {
                raster.fill_path(&oval, FillRule::Winding, false, Transform::identity());
            }
        }

        Self {
            bits: raster.data().iter().map(|&value| value > 0).collect(),
            width,
            height,
        }
    }

    const fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Mask width in pixels
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Mask height in pixels
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Test whether a pixel is desirable (out-of-bounds pixels never are)
    pub fn is_desirable(&self, x: u32, y: u32) -> bool {
        x < self.width
            && y < self.height
            && self.bits.get(self.index(x, y)).as_deref() == Some(&true)
    }

    /// Number of desirable pixels
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Test if no pixel is desirable
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Coordinates of every desirable pixel in row-major order
    pub fn desirable_pixels(&self) -> Vec<(u32, u32)> {
        let width = self.width.max(1) as usize;
        self.bits
            .iter_ones()
            .map(|index| ((index % width) as u32, (index / width) as u32))
            .collect()
    }

    /// Render the mask with desirable pixels in the marker colour
    pub fn to_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width, self.height, |x, y| {
            if self.is_desirable(x, y) {
                Rgba(MASK_MARKER_COLOR)
            } else {
                Rgba([0, 0, 0, 0])
            }
        })
    }
}
