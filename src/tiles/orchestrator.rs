//! Per-character tile rendering and the parallel driver over a whole text
//!
//! Every character is an independent task. A space becomes a fixed blank
//! tile; any other character is cut from its photograph either at the best
//! face-revealing offset or, when the photograph has no face, from a
//! thresholded copy at the origin. Tasks share only read-only settings,
//! the outline and detector backends, and the face detection cache.

use crate::faces::cache::{FaceAnalysis, FaceCache};
use crate::faces::region::FaceDetector;
use crate::glyph::crop::crop_to_content;
use crate::glyph::masker::{StrokeStyle, mask_glyph};
use crate::glyph::outline::{GlyphCoverage, GlyphOutline, OutlineProvider, resolve_outline};
use crate::io::configuration::{SPACE_TILE_HEIGHT, SPACE_TILE_WIDTH};
use crate::io::error::{Result, invalid_parameter};
use crate::io::settings::TileSettings;
use crate::placement::quality::QualityScorer;
use crate::placement::search::{PlacementCandidate, best_placement};
use crate::tiles::source::{GlyphJob, SourceImage, assign_sources};
use crate::tiles::threshold::{binarize, dump_threshold};
use image::RgbaImage;
use rayon::prelude::*;
use std::sync::Arc;

/// How a tile was produced
#[derive(Debug, Clone, PartialEq)]
pub enum TileState {
    /// Blank tile for a space character
    EmptySpace,
    /// Glyph placed to reveal detected faces
    FaceAware {
        /// Number of faces detected in the source
        faces: usize,
        /// Offset used and the quality it achieved
        candidate: PlacementCandidate,
    },
    /// Glyph cut from the thresholded source at the origin
    ///
    /// Unlike [`TileState::FaceAware`] tiles the outline is not stroked,
    /// even when a stroke width is configured.
    Fallback,
    /// Rendering failed; the tile is a blank substitute
    Failed {
        /// Description of the failure
        reason: String,
    },
}

/// Final raster for one character position
#[derive(Debug, Clone)]
pub struct GlyphTile {
    /// Zero-based position in the text
    pub position: usize,
    /// Character the tile represents
    pub character: char,
    /// Rendered pixels
    pub image: RgbaImage,
    /// Branch that produced the tile
    pub state: TileState,
}

/// Fully transparent tile emitted for spaces and failed characters
pub fn blank_tile() -> RgbaImage {
    RgbaImage::new(SPACE_TILE_WIDTH, SPACE_TILE_HEIGHT)
}

/// Renders glyph tiles on a dedicated worker pool
pub struct TileRenderer {
    settings: TileSettings,
    outlines: Box<dyn OutlineProvider>,
    detector: Box<dyn FaceDetector>,
    cache: FaceCache,
    pool: rayon::ThreadPool,
}

impl TileRenderer {
    /// Validate `settings` and build the worker pool
    ///
    /// # Errors
    ///
    /// Returns an error if the settings are invalid or the pool cannot be built
    pub fn new(
        settings: TileSettings,
        outlines: Box<dyn OutlineProvider>,
        detector: Box<dyn FaceDetector>,
    ) -> Result<Self> {
        settings.validate()?;

        let mut builder = rayon::ThreadPoolBuilder::new();
        if let Some(threads) = settings.threads {
            builder = builder.num_threads(threads);
        }
        let pool = builder
            .build()
            .map_err(|e| invalid_parameter("threads", &format!("{:?}", settings.threads), &e))?;

        Ok(Self {
            settings,
            outlines,
            detector,
            cache: FaceCache::new(),
            pool,
        })
    }

    /// Settings every task reads
    pub const fn settings(&self) -> &TileSettings {
        &self.settings
    }

    /// Face detection cache shared by all tasks
    pub const fn cache(&self) -> &FaceCache {
        &self.cache
    }

    /// Render one character, surfacing any failure
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The font has no outline for the character
    /// - The masked glyph has no visible pixel to crop around
    pub fn render_job(&self, job: &GlyphJob) -> Result<GlyphTile> {
        if job.character == ' ' {
            log::info!("Empty space at position {}", job.position + 1);
            return Ok(GlyphTile {
                position: job.position,
                character: job.character,
                image: blank_tile(),
                state: TileState::EmptySpace,
            });
        }

        let analysis = self.face_analysis(&job.source);
        let outline = resolve_outline(self.outlines.as_ref(), job.character)?;
        let coverage = outline.coverage();

        if analysis.has_no_faces() {
            self.render_fallback(job, &outline, &coverage)
        } else {
            self.render_face_aware(job, &analysis, &outline, &coverage)
        }
    }

    /// Render one character, replacing a failure with a blank tile
    pub fn render_tile(&self, job: &GlyphJob) -> GlyphTile {
        self.render_job(job).unwrap_or_else(|err| {
            log::warn!(
                "Letter {} at position {} could not be rendered: {err}",
                job.character,
                job.position + 1
            );
            GlyphTile {
                position: job.position,
                character: job.character,
                image: blank_tile(),
                state: TileState::Failed {
                    reason: err.to_string(),
                },
            }
        })
    }

    /// Render every job in parallel, returning tiles in job order
    pub fn render_jobs(&self, jobs: &[GlyphJob]) -> Vec<GlyphTile> {
        self.render_jobs_with(jobs, |_| {})
    }

    /// Render every job in parallel, calling `on_tile` as each one finishes
    ///
    /// `on_tile` runs on worker threads in completion order; the returned
    /// tiles are still in job order.
    pub fn render_jobs_with<F>(&self, jobs: &[GlyphJob], on_tile: F) -> Vec<GlyphTile>
    where
        F: Fn(&GlyphTile) + Sync,
    {
        self.pool.install(|| {
            jobs.par_iter()
                .map(|job| {
                    let tile = self.render_tile(job);
                    on_tile(&tile);
                    tile
                })
                .collect()
        })
    }

    /// Render `text`, cycling through `sources` position by position
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `sources` is empty while `text` is not
    pub fn render_text(&self, text: &str, sources: &[Arc<SourceImage>]) -> Result<Vec<GlyphTile>> {
        if sources.is_empty() && !text.is_empty() {
            return Err(invalid_parameter(
                "sources",
                &0,
                &"at least one source image is required",
            ));
        }
        Ok(self.render_jobs(&assign_sources(text, sources)))
    }

    fn face_analysis(&self, source: &SourceImage) -> Arc<FaceAnalysis> {
        self.cache.get_or_compute(source.key(), || {
            log::debug!("Detecting faces in {}", source.name());
            FaceAnalysis::detect(self.detector.as_ref(), source.pixels())
        })
    }

    fn stroke(&self) -> StrokeStyle {
        StrokeStyle {
            width: self.settings.stroke_width,
            color: self.settings.stroke_color,
        }
    }

    fn render_face_aware(
        &self,
        job: &GlyphJob,
        analysis: &FaceAnalysis,
        outline: &GlyphOutline,
        coverage: &GlyphCoverage,
    ) -> Result<GlyphTile> {
        let pixels = job.source.pixels();
        let scale = self.settings.scale;
        let canvas_width = (pixels.width() as f32 * scale) as u32;
        let canvas_height = (pixels.height() as f32 * scale) as u32;

        let scorer = QualityScorer::new(analysis, coverage, scale);
        let candidate = best_placement(
            &scorer,
            canvas_width,
            canvas_height,
            self.settings.accuracy,
        );

        let masked = mask_glyph(
            pixels,
            outline,
            coverage,
            scale,
            candidate.offset,
            self.stroke(),
        );
        let image = crop_to_content(&masked, self.settings.margin)?;

        log::info!(
            "Letter {} at position {} contains {} face/s and has a quality of {}",
            job.character,
            job.position + 1,
            analysis.face_count(),
            candidate.quality
        );

        Ok(GlyphTile {
            position: job.position,
            character: job.character,
            image,
            state: TileState::FaceAware {
                faces: analysis.face_count(),
                candidate,
            },
        })
    }

    fn render_fallback(
        &self,
        job: &GlyphJob,
        outline: &GlyphOutline,
        coverage: &GlyphCoverage,
    ) -> Result<GlyphTile> {
        let thresholded = binarize(job.source.pixels(), self.settings.threshold);

        if let Some(dir) = &self.settings.threshold_dump {
            match dump_threshold(&thresholded, dir, job.position) {
                Ok(path) => log::debug!("Wrote threshold image {}", path.display()),
                Err(err) => log::warn!("Could not write threshold image: {err}"),
            }
        }

        // No stroke here: the fallback tile is the bare thresholded cut-out
        let masked = mask_glyph(
            &thresholded,
            outline,
            coverage,
            self.settings.scale,
            [0, 0],
            StrokeStyle::NONE,
        );
        let image = crop_to_content(&masked, self.settings.margin)?;

        log::info!(
            "Letter {} at position {} contains 0 face/s, rendered from threshold fallback",
            job.character,
            job.position + 1
        );

        Ok(GlyphTile {
            position: job.position,
            character: job.character,
            image,
            state: TileState::Fallback,
        })
    }
}
