//! Tests for source discovery, decoding, tile export and strip stitching

#[cfg(test)]
mod tests {
    use crate::solid_image;
    use faceglyph::GlyphError;
    use faceglyph::io::image::{
        collect_source_paths, export_tiles, is_source_image, load_source, load_sources,
        save_image, stitch_tiles, tile_file_name,
    };
    use faceglyph::tiles::orchestrator::{GlyphTile, TileState};
    use image::RgbaImage;
    use std::path::Path;

    fn tile(position: usize, image: RgbaImage) -> GlyphTile {
        GlyphTile {
            position,
            character: 'x',
            image,
            state: TileState::Fallback,
        }
    }

    // Tests extension matching ignores case
    // Verified by comparing extensions case-sensitively
    #[test]
    fn test_is_source_image() {
        assert!(is_source_image(Path::new("a.png")));
        assert!(is_source_image(Path::new("b.JPG")));
        assert!(is_source_image(Path::new("c.webp")));
        assert!(!is_source_image(Path::new("d.txt")));
        assert!(!is_source_image(Path::new("png")));
    }

    // Tests directory discovery keeps only images, sorted by name
    // Verified by returning directory order
    #[test]
    fn test_collect_directory() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["c.png", "a.jpg", "notes.txt", "b.jpeg"] {
            std::fs::write(dir.path().join(name), b"").unwrap();
        }
        std::fs::create_dir(dir.path().join("nested.png")).unwrap();

        let paths = collect_source_paths(dir.path()).unwrap();
        let names: Vec<_> = paths
            .iter()
            .filter_map(|p| p.file_name().and_then(|n| n.to_str()))
            .collect();
        assert_eq!(names, vec!["a.jpg", "b.jpeg", "c.png"]);
    }

    // Tests a single file target and the rejected cases
    // Verified by accepting any existing file
    #[test]
    fn test_collect_single_file_and_errors() {
        let dir = tempfile::tempdir().unwrap();
        let image_path = dir.path().join("one.png");
        let text_path = dir.path().join("one.txt");
        std::fs::write(&image_path, b"").unwrap();
        std::fs::write(&text_path, b"").unwrap();

        assert_eq!(collect_source_paths(&image_path).unwrap(), vec![image_path]);
        assert!(matches!(
            collect_source_paths(&text_path),
            Err(GlyphError::InvalidParameter { .. })
        ));
        assert!(collect_source_paths(&dir.path().join("missing")).is_err());
    }

    // Tests decoding keeps pixels and assigns keys by index
    // Verified by keying every source zero
    #[test]
    fn test_load_sources() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first.png");
        let second = dir.path().join("second.png");
        save_image(&solid_image(6, 4, [10, 20, 30, 255]), &first).unwrap();
        save_image(&solid_image(3, 3, [40, 50, 60, 128]), &second).unwrap();

        let sources = load_sources(&[first, second]).unwrap();
        assert_eq!(sources.len(), 2);
        assert_eq!(sources[0].key().0, 0);
        assert_eq!(sources[1].key().0, 1);
        assert_eq!(sources[1].name(), "second.png");
        assert_eq!(sources[0].pixels().dimensions(), (6, 4));
        assert_eq!(sources[1].pixels().get_pixel(1, 1).0, [40, 50, 60, 128]);
    }

    // Tests an undecodable file is an image load error with its path
    // Verified by skipping the path in the error
    #[test]
    fn test_load_corrupt_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"not a png").unwrap();

        match load_source(&path, 0) {
            Err(GlyphError::ImageLoad { path: reported, .. }) => assert_eq!(reported, path),
            other => unreachable!("unexpected result {other:?}"),
        }
    }

    // Tests tiles are written under position-numbered names
    // Verified by numbering tiles by completion order
    #[test]
    fn test_export_tiles() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("tiles");
        let tiles = [
            tile(0, solid_image(5, 5, [1, 1, 1, 255])),
            tile(12, solid_image(2, 7, [2, 2, 2, 255])),
        ];

        let paths = export_tiles(&tiles, &out).unwrap();
        assert_eq!(paths, vec![out.join("tile_000.png"), out.join("tile_012.png")]);
        let reloaded = image::open(&paths[1]).unwrap();
        assert_eq!((reloaded.width(), reloaded.height()), (2, 7));
        assert_eq!(tile_file_name(7), "tile_007.png");
    }

    // Tests the strip lays tiles left to right on a shared baseline
    // Verified by top-aligning tiles
    #[test]
    fn test_stitch_tiles() {
        let tiles = [
            tile(0, solid_image(10, 5, [255, 0, 0, 255])),
            tile(1, solid_image(4, 8, [0, 0, 255, 255])),
        ];
        let strip = stitch_tiles(&tiles).unwrap();

        assert_eq!(strip.dimensions(), (14, 8));
        assert_eq!(strip.get_pixel(0, 0).0[3], 0);
        assert_eq!(strip.get_pixel(0, 3).0, [255, 0, 0, 255]);
        assert_eq!(strip.get_pixel(9, 7).0, [255, 0, 0, 255]);
        assert_eq!(strip.get_pixel(10, 0).0, [0, 0, 255, 255]);
    }

    // Tests stitching nothing is rejected
    // Verified by returning a zero-sized image
    #[test]
    fn test_stitch_empty() {
        assert!(matches!(
            stitch_tiles(&[]),
            Err(GlyphError::InvalidParameter { .. })
        ));
    }
}
