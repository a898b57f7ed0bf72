//! Progress display while letters render on the worker pool

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use crate::tiles::orchestrator::{GlyphTile, TileState};
use indicatif::{ProgressBar, ProgressStyle};

/// Tracks finished letters for one rendering run
///
/// The bar is thread-safe, so workers report completions directly.
pub struct ProgressManager {
    bar: ProgressBar,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new(0)
    }
}

impl ProgressManager {
    /// Create a bar for `letters` letters
    pub fn new(letters: usize) -> Self {
        let bar = ProgressBar::new(letters as u64);
        bar.set_style(Self::letter_style());
        Self { bar }
    }

    /// Progress bar that draws nothing, for quiet runs
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Record a finished tile
    pub fn tile_done(&self, tile: &GlyphTile) {
        let label = match &tile.state {
            TileState::EmptySpace => "space".to_string(),
            TileState::FaceAware { candidate, .. } => {
                format!("'{}' q={:.2}", tile.character, candidate.quality)
            }
            TileState::Fallback => format!("'{}' fallback", tile.character),
            TileState::Failed { .. } => format!("'{}' failed", tile.character),
        };
        self.bar.set_message(label);
        self.bar.inc(1);
    }

    /// Number of tiles recorded so far
    pub fn completed(&self) -> u64 {
        self.bar.position()
    }

    /// Clean up the display
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }

    fn letter_style() -> ProgressStyle {
        let template = format!(
            "[{{elapsed_precise}}] Letters: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        );
        ProgressStyle::default_bar()
            .template(&template)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▉▊▋▌▍▎▏ ")
    }
}
