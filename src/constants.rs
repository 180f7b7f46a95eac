// Drawing and DOM constants used by the web frontend.

// DOM hooks
pub const DEFAULT_CANVAS_ID: &str = "grid-canvas";
pub const VARIANT_ATTRIBUTE: &str = "data-variant";
pub const NAV_PANEL_IDS: [&str; 2] = ["nav-left", "nav-right"];
pub const PANEL_EXPANDED_CLASS: &str = "expanded";
pub const PANEL_COLLAPSED_CLASS: &str = "collapsed";
// Events that let a suspended AudioContext start
pub const AUDIO_UNLOCK_EVENTS: [&str; 3] = ["pointerdown", "touchstart", "keydown"];

// Grid lines
pub const GRID_LINE_COLOR: &str = "rgba(255, 255, 255, 0.08)";
pub const GRID_LINE_WIDTH: f64 = 1.0;
pub const DRUM_COLUMN_TINT: &str = "rgba(255, 107, 107, 0.06)";

// Cell flash
pub const HIGHLIGHT_FILL_RGB: &str = "255, 255, 255";
pub const HIGHLIGHT_MAX_ALPHA: f32 = 0.35;

// Particle glow radius relative to particle size
pub const GLOW_RADIUS_SCALE: f64 = 2.5;
pub const GLOW_EDGE_COLOR: &str = "rgba(0, 0, 0, 0)";
