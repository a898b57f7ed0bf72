//! Brightness-threshold fallback for images without faces

use crate::io::configuration::THRESHOLD_DUMP_PREFIX;
use crate::io::error::{GlyphError, Result};
use image::{Rgba, RgbaImage};
use std::path::{Path, PathBuf};

/// Binarize `source` by luma: brighter than `threshold` becomes white
///
/// The output has the source dimensions and is fully opaque.
pub fn binarize(source: &RgbaImage, threshold: u8) -> RgbaImage {
    let luma = image::imageops::grayscale(source);
    RgbaImage::from_fn(source.width(), source.height(), |x, y| {
        if luma.get_pixel(x, y).0[0] > threshold {
            Rgba([255, 255, 255, 255])
        } else {
            Rgba([0, 0, 0, 255])
        }
    })
}

/// Path of the diagnostic threshold image for the letter at `position`
pub fn dump_path(dir: &Path, position: usize) -> PathBuf {
    dir.join(format!("{THRESHOLD_DUMP_PREFIX}_{position:03}.png"))
}

/// Write a thresholded image for inspection
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the PNG cannot be written
pub fn dump_threshold(image: &RgbaImage, dir: &Path, position: usize) -> Result<PathBuf> {
    std::fs::create_dir_all(dir).map_err(|e| GlyphError::FileSystem {
        path: dir.to_path_buf(),
        operation: "create directory",
        source: e,
    })?;

    let path = dump_path(dir, position);
    image.save(&path).map_err(|e| GlyphError::ImageExport {
        path: path.clone(),
        source: e,
    })?;
    Ok(path)
}
