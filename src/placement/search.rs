//! Coarse grid search for the best glyph offset
//!
//! Offsets between grid points are never evaluated, so the reported
//! optimum is only exact at grid resolution.

use crate::placement::quality::QualityScorer;

/// A glyph offset together with the quality it achieves
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementCandidate {
    /// Offset of the glyph's top-left bounding box corner
    pub offset: [i32; 2],
    /// Fraction of desirable pixels revealed, in `[0, 1]`
    pub quality: f64,
}

impl PlacementCandidate {
    /// The placement used when nothing scores above zero
    pub const ORIGIN: Self = Self {
        offset: [0, 0],
        quality: 0.0,
    };

    /// Whether the glyph reveals every desirable pixel
    pub fn is_perfect(&self) -> bool {
        self.quality >= 1.0
    }
}

/// Grid step per axis: `dimension / accuracy`, never below one pixel
pub fn grid_steps(width: u32, height: u32, accuracy: u32) -> (u32, u32) {
    let accuracy = accuracy.max(1);
    ((width / accuracy).max(1), (height / accuracy).max(1))
}

/// Scan the grid over a `width` x `height` canvas for the best offset
///
/// Columns form the outer loop and rows the inner one. A candidate only
/// replaces the best so far when its quality is strictly greater, so ties
/// keep the earliest grid point. The scan stops at the first offset with
/// quality 1.0. If nothing scores above zero the origin is returned.
pub fn search_grid<F>(width: u32, height: u32, accuracy: u32, mut score: F) -> PlacementCandidate
where
    F: FnMut([i32; 2]) -> f64,
{
    let (step_x, step_y) = grid_steps(width, height, accuracy);
    let mut best = PlacementCandidate::ORIGIN;
    let mut evaluated = 0usize;

    'columns: for x in (0..width).step_by(step_x as usize) {
        for y in (0..height).step_by(step_y as usize) {
            let offset = [x as i32, y as i32];
            let quality = score(offset);
            evaluated += 1;

            if quality > 0.0 && quality > best.quality {
                best = PlacementCandidate { offset, quality };
            }
            if quality >= 1.0 {
                log::trace!("Perfect placement at {offset:?} after {evaluated} evaluations");
                break 'columns;
            }
        }
    }

    log::debug!(
        "Grid search evaluated {evaluated} offsets, best {:?} with quality {:.4}",
        best.offset,
        best.quality
    );
    best
}

/// Best glyph placement on a canvas of the given size
pub fn best_placement(
    scorer: &QualityScorer<'_>,
    width: u32,
    height: u32,
    accuracy: u32,
) -> PlacementCandidate {
    if scorer.total() == 0 {
        return PlacementCandidate::ORIGIN;
    }
    search_grid(width, height, accuracy, |offset| scorer.score(offset))
}
