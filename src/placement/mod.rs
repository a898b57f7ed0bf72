/// Overlap ratio between glyph and face area
pub mod quality;
/// Coarse grid search over glyph offsets
pub mod search;
