//! Face-aware photo glyphs: letters cut out of photographs so they frame the faces in them
//!
//! Each character of a text is rendered from its own source photograph. When
//! the photograph contains faces, a coarse grid search finds the glyph offset
//! revealing the largest share of the face area; otherwise the photograph is
//! thresholded and the glyph is cut at the origin. Characters are rendered as
//! independent tasks on a worker pool.

#![forbid(unsafe_code)]

/// Face rectangles, desirability masks and the detection cache
pub mod faces;
/// Glyph outlines, masking and cropping
pub mod glyph;
/// Input/output operations, configuration and error handling
pub mod io;
/// Placement quality scoring and grid search
pub mod placement;
/// Per-character tile rendering and the fallback path
pub mod tiles;

pub use io::error::{GlyphError, Result};
