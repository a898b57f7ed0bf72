//! Quality of a glyph placement: how much of the face area it reveals

use crate::faces::cache::FaceAnalysis;
use crate::glyph::outline::GlyphCoverage;

/// Scores glyph offsets against one image's desirability mask
///
/// Desirable pixels are projected into the scaled canvas once, so each
/// score is a single pass over the face area.
pub struct QualityScorer<'a> {
    coverage: &'a GlyphCoverage,
    desirable: Vec<[i64; 2]>,
}

impl<'a> QualityScorer<'a> {
    /// Prepare scoring for `coverage` over the faces in `analysis`
    ///
    /// A source pixel is projected to the canvas pixel holding its centre
    /// after scaling by `scale`.
    pub fn new(analysis: &FaceAnalysis, coverage: &'a GlyphCoverage, scale: f32) -> Self {
        let scale = f64::from(scale);
        let desirable = analysis
            .desirable_pixels()
            .iter()
            .map(|&(x, y)| {
                [
                    ((f64::from(x) + 0.5) * scale).floor() as i64,
                    ((f64::from(y) + 0.5) * scale).floor() as i64,
                ]
            })
            .collect();
        Self {
            coverage,
            desirable,
        }
    }

    /// Total number of desirable pixels
    pub fn total(&self) -> usize {
        self.desirable.len()
    }

    /// Desirable pixels inside the glyph placed at `offset`
    pub fn surviving(&self, offset: [i32; 2]) -> usize {
        let [ox, oy] = offset;
        self.desirable
            .iter()
            .filter(|&&[x, y]| {
                self.coverage
                    .contains(x - i64::from(ox), y - i64::from(oy))
            })
            .count()
    }

    /// Fraction of the desirable area revealed at `offset`, in `[0, 1]`
    ///
    /// Exactly 0 when there are no desirable pixels at all.
    pub fn score(&self, offset: [i32; 2]) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.surviving(offset) as f64 / total as f64
    }
}

/// One-shot quality of a placement
pub fn placement_quality(
    analysis: &FaceAnalysis,
    coverage: &GlyphCoverage,
    scale: f32,
    offset: [i32; 2],
) -> f64 {
    QualityScorer::new(analysis, coverage, scale).score(offset)
}
