//! Tests for command-line interface parsing and colour arguments

#[cfg(test)]
mod tests {
    use clap::Parser;
    use faceglyph::GlyphError;
    use faceglyph::io::cli::{Cli, TextProcessor, parse_color};
    use faceglyph::io::configuration::{
        DEFAULT_ACCURACY, DEFAULT_MARGIN, DEFAULT_POINT_SIZE, DEFAULT_THRESHOLD,
    };
    use image::Rgba;
    use std::path::PathBuf;

    // Tests CLI parsing with only the required arguments
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["program", "Hello", "-s", "photos", "-f", "font.ttf"]);

        assert_eq!(cli.text, "Hello");
        assert_eq!(cli.source, PathBuf::from("photos"));
        assert_eq!(cli.font, PathBuf::from("font.ttf"));
        assert_eq!(cli.output, PathBuf::from("tiles"));
        assert!((cli.size - DEFAULT_POINT_SIZE).abs() < f32::EPSILON);
        assert_eq!(cli.margin, DEFAULT_MARGIN);
        assert_eq!(cli.accuracy, DEFAULT_ACCURACY);
        assert_eq!(cli.threshold, DEFAULT_THRESHOLD);
        assert_eq!(cli.stroke_color, Rgba([255, 255, 255, 255]));
        assert!(cli.model.is_none());
        assert!(cli.strip.is_none());
        assert!(!cli.quiet);
    }

    // Tests CLI parsing with all available arguments
    // Verified by modifying custom parsers to ensure they're invoked
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "program",
            "Ä b",
            "--source",
            "group.jpg",
            "--font",
            "serif.otf",
            "--size",
            "120",
            "--model",
            "seeta.bin",
            "--output",
            "out",
            "--strip",
            "strip.png",
            "--margin",
            "8",
            "--stroke-width",
            "1.5",
            "--stroke-color",
            "#10203040",
            "--accuracy",
            "25",
            "--threshold",
            "90",
            "--scale",
            "0.5",
            "-j",
            "3",
            "--dump-threshold",
            "debug",
            "--quiet",
        ]);

        assert_eq!(cli.text, "Ä b");
        assert_eq!(cli.model, Some(PathBuf::from("seeta.bin")));
        assert_eq!(cli.strip, Some(PathBuf::from("strip.png")));
        assert_eq!(cli.stroke_color, Rgba([0x10, 0x20, 0x30, 0x40]));
        assert_eq!(cli.threads, Some(3));
        assert!(cli.quiet);

        let settings = cli.settings();
        assert_eq!(settings.margin, 8);
        assert_eq!(settings.accuracy, 25);
        assert_eq!(settings.threshold, 90);
        assert!((settings.scale - 0.5).abs() < f32::EPSILON);
        assert!((settings.stroke_width - 1.5).abs() < f32::EPSILON);
        assert_eq!(settings.threads, Some(3));
        assert_eq!(settings.threshold_dump, Some(PathBuf::from("debug")));
        assert!(settings.validate().is_ok());
    }

    // Tests that malformed arguments are rejected by the parser
    // Verified by accepting any colour string
    #[test]
    fn test_cli_rejects_bad_values() {
        let base = ["program", "a", "-s", "p", "-f", "f"];
        let with = move |extra: [&'static str; 2]| base.into_iter().chain(extra);

        assert!(Cli::try_parse_from(with(["--stroke-color", "red"])).is_err());
        assert!(Cli::try_parse_from(with(["--threshold", "300"])).is_err());
        assert!(Cli::try_parse_from(with(["--accuracy", "-1"])).is_err());
        assert!(Cli::try_parse_from(["program", "a", "-f", "f"]).is_err());
    }

    // Tests progress and log level follow the quiet flag
    // Verified by inverting quiet flag logic
    #[test]
    fn test_quiet_flag() {
        let loud = Cli::parse_from(["program", "a", "-s", "p", "-f", "f"]);
        assert!(loud.should_show_progress());
        assert_eq!(loud.default_log_filter(), "info");

        let quiet = Cli::parse_from(["program", "a", "-s", "p", "-f", "f", "-q"]);
        assert!(!quiet.should_show_progress());
        assert_eq!(quiet.default_log_filter(), "warn");
    }

    // Tests hex colour parsing with and without alpha
    // Verified by defaulting the alpha channel to zero
    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("#ff8000"), Ok(Rgba([255, 128, 0, 255])));
        assert_eq!(parse_color("00ff0080"), Ok(Rgba([0, 255, 0, 128])));
        assert_eq!(parse_color("#ABCDEF"), Ok(Rgba([0xAB, 0xCD, 0xEF, 255])));
        assert!(parse_color("#fff").is_err());
        assert!(parse_color("#gggggg").is_err());
        assert!(parse_color("#ff8000f").is_err());
        assert!(parse_color("#ÄÄÄ").is_err());
    }

    // Tests invalid settings stop the run before the font is read
    // Verified by loading the font first
    #[test]
    fn test_process_validates_settings_first() {
        let cli = Cli::parse_from([
            "program",
            "a",
            "-s",
            "missing",
            "-f",
            "missing.ttf",
            "--margin",
            "0",
        ]);
        let result = TextProcessor::new(cli).process();
        assert!(matches!(
            result,
            Err(GlyphError::InvalidParameter {
                parameter: "margin",
                ..
            })
        ));
    }

    // Tests a missing font file is reported
    // Verified by skipping the font load
    #[test]
    fn test_process_missing_font() {
        let dir = tempfile::tempdir().unwrap();
        let font = dir.path().join("absent.ttf");
        let cli = Cli::parse_from([
            std::ffi::OsString::from("program"),
            "a".into(),
            "-s".into(),
            dir.path().as_os_str().to_owned(),
            "-f".into(),
            font.as_os_str().to_owned(),
            "-q".into(),
        ]);
        assert!(matches!(
            TextProcessor::new(cli).process(),
            Err(GlyphError::FileSystem {
                operation: "read font",
                ..
            })
        ));
    }
}
