//! Error types for glyph tile rendering

use std::fmt;
use std::path::PathBuf;

/// Main error type for all tile rendering operations
#[derive(Debug)]
pub enum GlyphError {
    /// Failed to load a source image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save a rendered image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Configuration value failed validation
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Font data could not be parsed
    FontLoad {
        /// Where the font came from
        origin: String,
        /// Parser message
        reason: String,
    },

    /// The face detector failed or returned unusable data
    DetectionFailure {
        /// Description of the failure
        reason: String,
    },

    /// The font has no renderable outline for a character
    OutlineUnavailable {
        /// Character that was requested
        character: char,
    },

    /// A masked raster contained no visible pixel to crop around
    ///
    /// Happens when the glyph lands entirely outside the source, or when the
    /// source pixels under the glyph are all fully transparent.
    EmptyBoundingBox {
        /// Width of the raster that was scanned
        width: u32,
        /// Height of the raster that was scanned
        height: u32,
    },
}

impl fmt::Display for GlyphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::FontLoad { origin, reason } => {
                write!(f, "Failed to load font '{origin}': {reason}")
            }
            Self::DetectionFailure { reason } => {
                write!(f, "Face detection failed: {reason}")
            }
            Self::OutlineUnavailable { character } => {
                write!(
                    f,
                    "No renderable outline for character {character:?} (U+{:04X})",
                    u32::from(*character)
                )
            }
            Self::EmptyBoundingBox { width, height } => {
                write!(
                    f,
                    "No visible pixels in {width}x{height} masked glyph, nothing to crop"
                )
            }
        }
    }
}

impl std::error::Error for GlyphError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for tile rendering results
pub type Result<T> = std::result::Result<T, GlyphError>;

impl From<image::ImageError> for GlyphError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for GlyphError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GlyphError {
    GlyphError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a detection failure error
pub fn detection_failure(reason: &impl ToString) -> GlyphError {
    GlyphError::DetectionFailure {
        reason: reason.to_string(),
    }
}
