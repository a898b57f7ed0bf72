/// Bounding-box cropping of masked glyphs
pub mod crop;
/// Font-backed outline provider
pub mod font;
/// Source masking and border stroking
pub mod masker;
/// Outline geometry, coverage and case substitution
pub mod outline;
