//! Rendering constants and runtime configuration defaults

// Placement search
/// Number of grid steps per axis in the placement search
pub const DEFAULT_ACCURACY: u32 = 10;

// Fallback binarization
/// Luma value above which a pixel becomes white in the fallback image
pub const DEFAULT_THRESHOLD: u8 = 180;

// Tile geometry
/// Width of the blank tile emitted for a space character
pub const SPACE_TILE_WIDTH: u32 = 150;
/// Height of the blank tile emitted for a space character
pub const SPACE_TILE_HEIGHT: u32 = 1;
/// Transparent margin kept around a cropped glyph, in pixels
pub const DEFAULT_MARGIN: u32 = 5;
/// Width of the border stroked along the glyph outline, in pixels
pub const DEFAULT_STROKE_WIDTH: f32 = 3.0;
/// Colour of the stroked glyph border
pub const DEFAULT_STROKE_COLOR: [u8; 4] = [255, 255, 255, 255];
/// Scale applied to the source image before masking
pub const DEFAULT_SCALE: f32 = 1.0;

// Fonts
/// Font size in points used when the caller does not pick one
pub const DEFAULT_POINT_SIZE: f32 = 400.0;

// Desirability mask
/// Colour used to paint desirable pixels in mask visualisations
pub const MASK_MARKER_COLOR: [u8; 4] = [255, 0, 0, 255];

// Output settings
/// Prefix for individual tile files
pub const TILE_FILE_PREFIX: &str = "tile";
/// Prefix for fallback threshold diagnostic images
pub const THRESHOLD_DUMP_PREFIX: &str = "threshold";
/// Image extensions accepted as sources
pub const SOURCE_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "webp"];

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
