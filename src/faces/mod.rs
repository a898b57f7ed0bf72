/// Detection cache keyed by source image identity
pub mod cache;
/// Desirability mask built from face ellipses
pub mod mask;
/// Face rectangles and the detector trait
pub mod region;
/// Built-in SeetaFace detector backend
#[cfg(feature = "rustface")]
pub mod seetaface;
