//! Face rectangles and the pluggable detector that produces them

use crate::io::error::{GlyphError, Result};
use image::{GrayImage, RgbaImage};

/// Axis-aligned face rectangle in source image coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceRegion {
    /// Left edge (pixels, may be negative for faces cut by the border)
    pub x: i32,
    /// Top edge (pixels, may be negative for faces cut by the border)
    pub y: i32,
    /// Width of the rectangle
    pub width: i32,
    /// Height of the rectangle
    pub height: i32,
}

impl FaceRegion {
    /// Create a face rectangle
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Centre of the rectangle, which is also the centre of its inscribed ellipse
    pub fn center(&self) -> (f64, f64) {
        (
            f64::from(self.x) + f64::from(self.width) * 0.5,
            f64::from(self.y) + f64::from(self.height) * 0.5,
        )
    }

    /// Semi-axes of the inscribed ellipse
    pub fn semi_axes(&self) -> (f64, f64) {
        (f64::from(self.width) * 0.5, f64::from(self.height) * 0.5)
    }

    /// Whether the rectangle encloses any area at all
    pub const fn is_degenerate(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

/// Pluggable face detection backend
///
/// Implementations receive a row-major grayscale copy of the source. Errors
/// are never fatal: the caller treats them as an image with no faces.
pub trait FaceDetector: Send + Sync {
    /// Detect faces in `gray`, in no particular order
    ///
    /// # Errors
    ///
    /// Returns `DetectionFailure` if the underlying classifier cannot run
    fn detect(&self, gray: &GrayImage) -> Result<Vec<FaceRegion>>;
}

/// Detector that never finds a face, routing every letter to the fallback
#[derive(Debug, Default, Clone, Copy)]
pub struct NoFaceDetector;

impl FaceDetector for NoFaceDetector {
    fn detect(&self, _gray: &GrayImage) -> Result<Vec<FaceRegion>> {
        Ok(Vec::new())
    }
}

/// Run `detector` on `source`, degrading every failure to "no faces"
///
/// Degenerate rectangles are dropped as malformed output; the rest are
/// returned untouched, including ones that overhang the image border.
pub fn detect_faces(detector: &dyn FaceDetector, source: &RgbaImage) -> Vec<FaceRegion> {
    let gray = image::imageops::grayscale(source);
    match detector.detect(&gray) {
        Ok(regions) => {
            let total = regions.len();
            let valid: Vec<FaceRegion> = regions
                .into_iter()
                .filter(|region| !region.is_degenerate())
                .collect();
            if valid.len() < total {
                log::warn!(
                    "Dropped {} malformed face rectangle(s) from detector output",
                    total - valid.len()
                );
            }
            valid
        }
        Err(err @ GlyphError::DetectionFailure { .. }) => {
            log::warn!("{err}; treating image as having no faces");
            Vec::new()
        }
        Err(err) => {
            log::warn!("Face detector error: {err}; treating image as having no faces");
            Vec::new()
        }
    }
}
