/// Command-line interface and run driver
pub mod cli;
/// Compile-time constants and defaults
pub mod configuration;
/// Error type and result alias
pub mod error;
/// Source loading and tile export
pub mod image;
/// Progress display over letters
pub mod progress;
/// Validated runtime settings
pub mod settings;
