//! Visual and behavioral constants.

// --- Visual colors (hex) ---
pub const BG_COLOR: u32 = 0xFFFFFF;
pub const CONNECTION_COLOR: u32 = 0xC0C0C0;
pub const SPOT_COLOR: u32 = 0xFF0000;
pub const ROUTE_COLOR: u32 = 0x0000FF;
pub const LABEL_COLOR: u32 = 0xFF0000;

// --- Map drawing ---
pub const SPOT_RADIUS: f64 = 5.0;
pub const LABEL_OFFSET: f64 = 10.0;
pub const LABEL_SIZE: f64 = 12.0;
pub const CONNECTION_WIDTH: f64 = 1.0;
pub const ROUTE_WIDTH: f64 = 3.0;

// --- Zoom ---
pub const ZOOM_MIN: f64 = 0.5;
pub const ZOOM_MAX: f64 = 5.0;
pub const ZOOM_IN_STEP: f64 = 1.1;
pub const ZOOM_OUT_STEP: f64 = 0.9;
/// Zoom changes smaller than this are ignored.
pub const ZOOM_EPSILON: f64 = 0.01;

// --- Canvas ---
pub const CANVAS_WIDTH: i32 = 1200;
pub const CANVAS_HEIGHT: i32 = 800;

// --- Files ---
pub const DEFAULT_DB_PATH: &str = "travel.db";
pub const DEFAULT_PNG_PATH: &str = "route_map.png";
