//! Validated runtime settings shared read-only by every tile task

use crate::io::configuration::{
    DEFAULT_ACCURACY, DEFAULT_MARGIN, DEFAULT_SCALE, DEFAULT_STROKE_COLOR, DEFAULT_STROKE_WIDTH,
    DEFAULT_THRESHOLD,
};
use crate::io::error::{Result, invalid_parameter};
use image::Rgba;
use std::path::PathBuf;

/// Rendering parameters for glyph tiles
///
/// Built with chained setters, then checked once by [`TileSettings::validate`]
/// before any character is scheduled.
#[derive(Debug, Clone)]
pub struct TileSettings {
    /// Border stroke width in pixels (0 disables the border)
    pub stroke_width: f32,
    /// Border stroke colour
    pub stroke_color: Rgba<u8>,
    /// Transparent margin around a cropped glyph
    pub margin: u32,
    /// Grid steps per axis for the placement search
    pub accuracy: u32,
    /// Binarization threshold for the no-face fallback
    pub threshold: u8,
    /// Scale applied to the source before masking
    pub scale: f32,
    /// Directory receiving fallback threshold images, if any
    pub threshold_dump: Option<PathBuf>,
    /// Worker thread count, `None` for the rayon default
    pub threads: Option<usize>,
}

impl Default for TileSettings {
    fn default() -> Self {
        Self {
            stroke_width: DEFAULT_STROKE_WIDTH,
            stroke_color: Rgba(DEFAULT_STROKE_COLOR),
            margin: DEFAULT_MARGIN,
            accuracy: DEFAULT_ACCURACY,
            threshold: DEFAULT_THRESHOLD,
            scale: DEFAULT_SCALE,
            threshold_dump: None,
            threads: None,
        }
    }
}

impl TileSettings {
    /// Settings with every default applied
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the border stroke width
    #[must_use]
    pub const fn stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = width;
        self
    }

    /// Set the border stroke colour
    #[must_use]
    pub const fn stroke_color(mut self, color: Rgba<u8>) -> Self {
        self.stroke_color = color;
        self
    }

    /// Set the crop margin
    #[must_use]
    pub const fn margin(mut self, margin: u32) -> Self {
        self.margin = margin;
        self
    }

    /// Set the placement search accuracy
    #[must_use]
    pub const fn accuracy(mut self, accuracy: u32) -> Self {
        self.accuracy = accuracy;
        self
    }

    /// Set the fallback binarization threshold
    #[must_use]
    pub const fn threshold(mut self, threshold: u8) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set the source scale
    #[must_use]
    pub const fn scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Dump fallback threshold images into `dir`
    #[must_use]
    pub fn threshold_dump(mut self, dir: impl Into<PathBuf>) -> Self {
        self.threshold_dump = Some(dir.into());
        self
    }

    /// Pin the worker pool to `threads` threads
    #[must_use]
    pub const fn threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    /// Check every parameter before work is scheduled
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if:
    /// - The margin is zero
    /// - The accuracy is zero
    /// - The scale is not a finite positive number
    /// - The stroke width is negative or not finite
    /// - The thread count is zero
    pub fn validate(&self) -> Result<()> {
        if self.margin == 0 {
            return Err(invalid_parameter(
                "margin",
                &self.margin,
                &"must be a positive number of pixels",
            ));
        }
        if self.accuracy == 0 {
            return Err(invalid_parameter(
                "accuracy",
                &self.accuracy,
                &"search needs at least one grid step per axis",
            ));
        }
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(invalid_parameter(
                "scale",
                &self.scale,
                &"must be finite and greater than zero",
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width < 0.0 {
            return Err(invalid_parameter(
                "stroke_width",
                &self.stroke_width,
                &"must be finite and not negative",
            ));
        }
        if self.threads == Some(0) {
            return Err(invalid_parameter(
                "threads",
                &0,
                &"worker pool needs at least one thread",
            ));
        }
        Ok(())
    }
}
