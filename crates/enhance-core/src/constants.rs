// Timing and geometry constants shared by the web front-end.

// Background circles
pub const CIRCLE_SMALL_PX: f64 = 200.0;
pub const CIRCLE_MEDIUM_PX: f64 = 300.0;
pub const CIRCLE_LARGE_PX: f64 = 400.0;
pub const CIRCLE_OFFSCREEN_BUFFER_PX: f64 = 50.0; // extra gap left of the viewport at spawn
pub const CIRCLE_RESPAWN_INTERVAL_MS: i32 = 40_000;
pub const CIRCLE_ANIMATION_MS: i32 = 40_000; // duration of the `flow-movement` keyframes
pub const CIRCLE_REMOVE_AFTER_MS: i32 = 45_000; // animation plus grace period
pub const BACKGROUND_OPACITY: f32 = 0.12;
pub const BACKGROUND_RESIZE_DEBOUNCE_MS: i32 = 500;

// Spotlight
pub const SPOTLIGHT_SIZE_PX: f64 = 400.0;
pub const SPOTLIGHT_BLUR_PX: f64 = 120.0;
pub const SPOTLIGHT_IDLE_FADE_MS: i32 = 2_000;
pub const SPOTLIGHT_Z_INDEX: i32 = 9999;
/// Scale the spotlight by proximity to headings and code blocks.
pub const SPOTLIGHT_ENHANCED: bool = false;

// Enhanced spotlight intensity
pub const INTENSITY_MAX_DISTANCE_PX: f32 = 1200.0;
pub const INTENSITY_FLOOR: f32 = 0.1;
pub const INTENSITY_BOOST: f32 = 1.2;

// Line numbers
pub const GUTTER_RESIZE_DEBOUNCE_MS: i32 = 250;
pub const GUTTER_PRE_PADDING: &str = "4rem";

// Sidebar proxy buttons
pub const TOGGLE_BUTTON_PX: u32 = 44;
pub const TOGGLE_BUTTON_TABLET_PX: u32 = 40;
pub const TOGGLE_BUTTON_PHONE_PX: u32 = 36;
pub const BREAKPOINT_TABLET_PX: u32 = 768;
pub const BREAKPOINT_PHONE_PX: u32 = 480;
pub const DRAWER_WIDTH_PX: u32 = 280;
