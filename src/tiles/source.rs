//! Source photographs and their assignment to text positions

use crate::faces::cache::SourceKey;
use image::RgbaImage;
use std::sync::Arc;

/// A decoded source photograph with a stable identity
#[derive(Debug, Clone)]
pub struct SourceImage {
    key: SourceKey,
    name: String,
    pixels: RgbaImage,
}

impl SourceImage {
    /// Wrap decoded pixels; `key` must be unique within one rendering run
    pub fn new(key: usize, name: impl Into<String>, pixels: RgbaImage) -> Self {
        Self {
            key: SourceKey(key),
            name: name.into(),
            pixels,
        }
    }

    /// Identity used for the face detection cache
    pub const fn key(&self) -> SourceKey {
        self.key
    }

    /// Human readable name, usually the file name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Decoded RGBA pixels
    pub const fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }
}

/// One unit of work: a character at a text position and its photograph
#[derive(Debug, Clone)]
pub struct GlyphJob {
    /// Zero-based position in the text
    pub position: usize,
    /// Character to render
    pub character: char,
    /// Photograph the glyph is cut from
    pub source: Arc<SourceImage>,
}

/// Pair every character of `text` with a source, cycling through `sources`
///
/// Position `i` gets `sources[i % sources.len()]`. Returns no jobs when
/// `sources` is empty.
pub fn assign_sources(text: &str, sources: &[Arc<SourceImage>]) -> Vec<GlyphJob> {
    if sources.is_empty() {
        return Vec::new();
    }

    text.chars()
        .enumerate()
        .filter_map(|(position, character)| {
            sources
                .get(position % sources.len())
                .map(|source| GlyphJob {
                    position,
                    character,
                    source: Arc::clone(source),
                })
        })
        .collect()
}
