//! Command-line interface for rendering a text as face-aware photo glyphs

use crate::faces::region::{FaceDetector, NoFaceDetector};
use crate::glyph::font::FontOutlines;
use crate::io::configuration::{
    DEFAULT_ACCURACY, DEFAULT_MARGIN, DEFAULT_POINT_SIZE, DEFAULT_SCALE, DEFAULT_STROKE_WIDTH,
    DEFAULT_THRESHOLD,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::{collect_source_paths, export_tiles, load_sources, save_image, stitch_tiles};
use crate::io::progress::ProgressManager;
use crate::io::settings::TileSettings;
use crate::tiles::orchestrator::{GlyphTile, TileRenderer, TileState};
use crate::tiles::source::assign_sources;
use clap::Parser;
use image::Rgba;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "faceglyph")]
#[command(
    author,
    version,
    about = "Render text as letters cut from photographs, framing the faces in them"
)]
/// Command-line arguments for the glyph tile renderer
pub struct Cli {
    /// Text to render
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Source image, or directory of images assigned to letters in name order
    #[arg(short, long, value_name = "PATH")]
    pub source: PathBuf,

    /// TrueType/OpenType font file
    #[arg(short, long, value_name = "FONT")]
    pub font: PathBuf,

    /// Font size in points
    #[arg(long, default_value_t = DEFAULT_POINT_SIZE)]
    pub size: f32,

    /// SeetaFace model file; without it no faces are detected
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<PathBuf>,

    /// Directory receiving one PNG per letter
    #[arg(short, long, default_value = "tiles")]
    pub output: PathBuf,

    /// Also write all tiles stitched into one strip
    #[arg(long, value_name = "PNG")]
    pub strip: Option<PathBuf>,

    /// Transparent margin around each cropped letter, in pixels
    #[arg(long, default_value_t = DEFAULT_MARGIN)]
    pub margin: u32,

    /// Width of the border drawn around face-aware letters
    #[arg(long, default_value_t = DEFAULT_STROKE_WIDTH)]
    pub stroke_width: f32,

    /// Border colour as #RRGGBB or #RRGGBBAA
    #[arg(long, default_value = "#ffffff", value_parser = parse_color)]
    pub stroke_color: Rgba<u8>,

    /// Grid steps per axis in the placement search
    #[arg(short, long, default_value_t = DEFAULT_ACCURACY)]
    pub accuracy: u32,

    /// Luma threshold for letters whose photograph has no face
    #[arg(short, long, default_value_t = DEFAULT_THRESHOLD)]
    pub threshold: u8,

    /// Scale applied to source photographs before cutting
    #[arg(long, default_value_t = DEFAULT_SCALE)]
    pub scale: f32,

    /// Worker threads (defaults to one per core)
    #[arg(short = 'j', long)]
    pub threads: Option<usize>,

    /// Write each fallback threshold image into this directory
    #[arg(long, value_name = "DIR")]
    pub dump_threshold: Option<PathBuf>,

    /// Suppress progress output and per-letter logging
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Log filter used when `RUST_LOG` is not set
    pub const fn default_log_filter(&self) -> &'static str {
        if self.quiet { "warn" } else { "info" }
    }

    /// Rendering settings described by the arguments
    pub fn settings(&self) -> TileSettings {
        let mut settings = TileSettings::new()
            .stroke_width(self.stroke_width)
            .stroke_color(self.stroke_color)
            .margin(self.margin)
            .accuracy(self.accuracy)
            .threshold(self.threshold)
            .scale(self.scale);
        if let Some(threads) = self.threads {
            settings = settings.threads(threads);
        }
        if let Some(dir) = &self.dump_threshold {
            settings = settings.threshold_dump(dir.clone());
        }
        settings
    }
}

/// Parse `#RRGGBB` or `#RRGGBBAA` (the `#` is optional)
///
/// # Errors
///
/// Returns a message if the string is not six or eight hex digits
pub fn parse_color(value: &str) -> std::result::Result<Rgba<u8>, String> {
    let hex = value.strip_prefix('#').unwrap_or(value);
    if !(hex.len() == 6 || hex.len() == 8) || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(format!(
            "'{value}' is not a colour, expected #RRGGBB or #RRGGBBAA"
        ));
    }

    let mut channels = [255u8; 4];
    for (slot, index) in channels.iter_mut().zip((0..hex.len()).step_by(2)) {
        let pair = hex
            .get(index..index + 2)
            .ok_or_else(|| format!("'{value}' is truncated"))?;
        *slot = u8::from_str_radix(pair, 16).map_err(|e| format!("'{value}': {e}"))?;
    }
    Ok(Rgba(channels))
}

/// Drives one rendering run from parsed arguments
pub struct TextProcessor {
    cli: Cli,
}

impl TextProcessor {
    /// Create a processor for the given arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Render the text and write the tiles
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The settings are invalid
    /// - The font or a source image cannot be loaded
    /// - No source image is found
    /// - A tile or the strip cannot be written
    pub fn process(&self) -> Result<Vec<GlyphTile>> {
        let start_time = Instant::now();
        let settings = self.cli.settings();
        settings.validate()?;

        let outlines = FontOutlines::from_file(&self.cli.font, self.cli.size)?;
        let detector = self.detector()?;

        let paths = collect_source_paths(&self.cli.source)?;
        if paths.is_empty() {
            return Err(invalid_parameter(
                "source",
                &self.cli.source.display(),
                &"no source images found",
            ));
        }
        let sources = load_sources(&paths)?;
        log::info!(
            "Rendering {} letter(s) from {} source image(s)",
            self.cli.text.chars().count(),
            sources.len()
        );

        let renderer = TileRenderer::new(settings, Box::new(outlines), detector)?;
        let jobs = assign_sources(&self.cli.text, &sources);

        let progress = if self.cli.should_show_progress() {
            ProgressManager::new(jobs.len())
        } else {
            ProgressManager::hidden()
        };
        let tiles = renderer.render_jobs_with(&jobs, |tile| progress.tile_done(tile));
        progress.finish();

        export_tiles(&tiles, &self.cli.output)?;
        if let Some(strip_path) = &self.cli.strip {
            save_image(&stitch_tiles(&tiles)?, strip_path)?;
        }

        Self::log_summary(&tiles, &self.cli.output, start_time);
        Ok(tiles)
    }

    #[cfg(feature = "rustface")]
    fn detector(&self) -> Result<Box<dyn FaceDetector>> {
        use crate::faces::seetaface::RustfaceDetector;

        match &self.cli.model {
            Some(model) => Ok(Box::new(RustfaceDetector::from_model_path(model)?)),
            None => {
                log::warn!("No face model given, every letter uses the threshold fallback");
                Ok(Box::new(NoFaceDetector))
            }
        }
    }

    #[cfg(not(feature = "rustface"))]
    fn detector(&self) -> Result<Box<dyn FaceDetector>> {
        if self.cli.model.is_some() {
            log::warn!("Built without the rustface feature, ignoring the face model");
        }
        Ok(Box::new(NoFaceDetector))
    }

    fn log_summary(tiles: &[GlyphTile], output: &Path, start_time: Instant) {
        let count = |wanted: fn(&TileState) -> bool| {
            tiles.iter().filter(|tile| wanted(&tile.state)).count()
        };
        log::info!(
            "Wrote {} tile(s) to {} in {:.1?}: {} face-aware, {} fallback, {} failed",
            tiles.len(),
            output.display(),
            start_time.elapsed(),
            count(|state| matches!(state, TileState::FaceAware { .. })),
            count(|state| matches!(state, TileState::Fallback)),
            count(|state| matches!(state, TileState::Failed { .. })),
        );
    }
}
