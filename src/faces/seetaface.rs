//! SeetaFace frontal face detector backed by the `rustface` crate

use crate::faces::region::{FaceDetector, FaceRegion};
use crate::io::error::{GlyphError, Result};
use image::GrayImage;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Smallest face, in pixels, the detector reports
const MIN_FACE_SIZE: u32 = 20;
/// Classifier score a window must reach to count as a face
const SCORE_THRESHOLD: f64 = 2.0;
/// Shrink factor between image pyramid levels
const PYRAMID_SCALE_FACTOR: f32 = 0.8;
/// Sliding window step in both directions
const SLIDE_WINDOW_STEP: u32 = 4;

/// Face detector using a SeetaFace model loaded from disk
pub struct RustfaceDetector {
    model: rustface::Model,
}

impl RustfaceDetector {
    /// Load a SeetaFace model file (e.g. `seeta_fd_frontal_v1.0.bin`)
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or is not a valid model
    pub fn from_model_path(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| GlyphError::FileSystem {
            path: path.to_path_buf(),
            operation: "open face model",
            source: e,
        })?;
        let model =
            rustface::read_model(BufReader::new(file)).map_err(|e| GlyphError::FileSystem {
                path: path.to_path_buf(),
                operation: "parse face model",
                source: std::io::Error::other(e.to_string()),
            })?;
        Ok(Self { model })
    }
}

impl FaceDetector for RustfaceDetector {
    fn detect(&self, gray: &GrayImage) -> Result<Vec<FaceRegion>> {
        // The rustface detector is stateful, so each call gets its own
        let mut detector = rustface::create_detector_with_model(self.model.clone());
        detector.set_min_face_size(MIN_FACE_SIZE);
        detector.set_score_thresh(SCORE_THRESHOLD);
        detector.set_pyramid_scale_factor(PYRAMID_SCALE_FACTOR);
        detector.set_slide_window_step(SLIDE_WINDOW_STEP, SLIDE_WINDOW_STEP);

        let faces = detector.detect(&rustface::ImageData::new(
            gray.as_raw(),
            gray.width(),
            gray.height(),
        ));

        Ok(faces
            .iter()
            .map(|face| {
                let bbox = face.bbox();
                FaceRegion::new(
                    bbox.x(),
                    bbox.y(),
                    bbox.width() as i32,
                    bbox.height() as i32,
                )
            })
            .collect())
    }
}
