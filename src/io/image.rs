//! Loading source photographs and exporting rendered tiles

use crate::io::configuration::{SOURCE_EXTENSIONS, TILE_FILE_PREFIX};
use crate::io::error::{GlyphError, Result, invalid_parameter};
use crate::tiles::orchestrator::GlyphTile;
use crate::tiles::source::SourceImage;
use image::{Rgba, RgbaImage};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Whether `path` has one of the accepted source extensions
pub fn is_source_image(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| {
            SOURCE_EXTENSIONS
                .iter()
                .any(|accepted| accepted.eq_ignore_ascii_case(ext))
        })
}

/// Source files named by `target`: the file itself, or a directory's images sorted by name
///
/// # Errors
///
/// Returns an error if:
/// - `target` is a file without an accepted image extension
/// - `target` is neither a file nor a directory
/// - The directory cannot be read
pub fn collect_source_paths(target: &Path) -> Result<Vec<PathBuf>> {
    if target.is_file() {
        if is_source_image(target) {
            Ok(vec![target.to_path_buf()])
        } else {
            Err(invalid_parameter(
                "source",
                &target.display(),
                &"file is not a supported image",
            ))
        }
    } else if target.is_dir() {
        let entries = std::fs::read_dir(target).map_err(|e| GlyphError::FileSystem {
            path: target.to_path_buf(),
            operation: "read directory",
            source: e,
        })?;
        let mut files = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.is_file() && is_source_image(&path) {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    } else {
        Err(invalid_parameter(
            "source",
            &target.display(),
            &"must be an image file or a directory",
        ))
    }
}

/// Decode one source photograph
///
/// # Errors
///
/// Returns `ImageLoad` if the file cannot be opened or decoded
pub fn load_source(path: &Path, key: usize) -> Result<SourceImage> {
    let img = image::open(path).map_err(|e| GlyphError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    let name = path
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();
    Ok(SourceImage::new(key, name, img.to_rgba8()))
}

/// Decode every path, keyed by its index
///
/// # Errors
///
/// Returns the first decoding error
pub fn load_sources(paths: &[PathBuf]) -> Result<Vec<Arc<SourceImage>>> {
    paths
        .iter()
        .enumerate()
        .map(|(key, path)| load_source(path, key).map(Arc::new))
        .collect()
}

/// Save an image, creating parent directories first
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the image cannot be encoded
pub fn save_image(image: &RgbaImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| GlyphError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }

    image.save(path).map_err(|e| GlyphError::ImageExport {
        path: path.to_path_buf(),
        source: e,
    })
}

/// File name of the tile at `position`
pub fn tile_file_name(position: usize) -> String {
    format!("{TILE_FILE_PREFIX}_{position:03}.png")
}

/// Save every tile as `tile_<position>.png` inside `dir`
///
/// # Errors
///
/// Returns the first export error
pub fn export_tiles(tiles: &[GlyphTile], dir: &Path) -> Result<Vec<PathBuf>> {
    tiles
        .iter()
        .map(|tile| {
            let path = dir.join(tile_file_name(tile.position));
            save_image(&tile.image, &path).map(|()| path)
        })
        .collect()
}

/// Lay tiles out left to right, bottom-aligned, on a transparent canvas
///
/// # Errors
///
/// Returns `InvalidParameter` if there are no tiles
pub fn stitch_tiles(tiles: &[GlyphTile]) -> Result<RgbaImage> {
    if tiles.is_empty() {
        return Err(invalid_parameter("tiles", &0, &"nothing to stitch"));
    }

    let width = tiles
        .iter()
        .map(|tile| tile.image.width())
        .fold(0u32, u32::saturating_add);
    let height = tiles
        .iter()
        .map(|tile| tile.image.height())
        .max()
        .unwrap_or(0);

    let mut strip = RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 0]));
    let mut x = 0i64;
    for tile in tiles {
        let y = i64::from(height - tile.image.height());
        image::imageops::overlay(&mut strip, &tile.image, x, y);
        x += i64::from(tile.image.width());
    }

    Ok(strip)
}
