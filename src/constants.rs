/// Page effect tuning constants.
///
/// These constants express intended behavior (thresholds, ramp steps, particle
/// limits) and keep magic numbers out of the wiring code.

// Fade-in reveal
pub const FADE_IN_SELECTOR: &str = ".fade-in-section";
pub const FADE_IN_THRESHOLD: f64 = 0.05; // fraction of the element inside the viewport
pub const FADE_IN_CUE_DELAY_MS: i32 = 150;
pub const FADE_IN_CUE_SRC: &str = "fadein-sound.mp3";
pub const VISIBLE_CLASS: &str = "visible";
pub const FADE_INDEX_ATTR: &str = "data-fade-index";

// Lazy images
pub const LAZY_IMAGE_SELECTOR: &str = "img[loading=\"lazy\"]";
pub const DEFERRED_SRC_ATTR: &str = "data-src";

// Background gradient
pub const GRADIENT_SELECTOR: &str = ".animated-gradient-bg";
pub const GRADIENT_STEP: f64 = 0.05; // percent per frame
pub const GRADIENT_PERIOD: f64 = 600.0; // wrap modulus, percent

// Navigation
pub const ANCHOR_LINK_SELECTOR: &str = "a[href^='#']";
pub const NAV_LINK_SELECTOR: &str = "nav a";
pub const PAGE_SECTION_SELECTOR: &str = ".page-section";
pub const HOME_SECTION_ID: &str = "home";
pub const SHOW_CLASS: &str = "show";
pub const GRADIENT_TEXT_SELECTOR: &str = "nav .gradient-text";
pub const GRADIENT_TEXT_HOVER_COLOR: &str = "#00f4f0";

// Scroll-to-top control
pub const SCROLL_TOP_THRESHOLD_PX: f64 = 300.0;
pub const SCROLL_TOP_CLASS: &str = "scroll-top-btn";
pub const SCROLL_TOP_LABEL: &str = "\u{2191}";
pub const SCROLL_TOP_STYLE: &str = "position:fixed;bottom:20px;right:20px;\
padding:10px 15px;border-radius:5px;border:none;background-color:#ffffff99;\
color:#333;cursor:pointer;z-index:999;display:none;\
box-shadow:0 2px 6px rgba(0,0,0,0.2);backdrop-filter:blur(5px)";

// Falling flowers
pub const WELCOME_BUTTON_SELECTOR: &str = ".welcome-button";
pub const FLOWER_SRC: &str = "flower.png";
pub const FLOWER_CLASS: &str = "flower";
pub const FLOWERS_PER_BATCH: usize = 30;
pub const MAX_FLOWERS: usize = 70;
pub const FLOWER_LANES: u32 = 10;
pub const FLOWER_LANE_JITTER: f64 = 0.5; // fraction of a lane used for the random offset
pub const FLOWER_START_TOP_PX: f64 = -100.0;
pub const FLOWER_FALL_EXTRA_PX: f64 = 200.0; // distance past the bottom edge
pub const FLOWER_LIFETIME_MS: u64 = 5000;
pub const FLOWER_Z_INDEX: i32 = 9999;
pub const FLOWER_FALL_EASING: &str = "ease-in";
pub const FLOWER_FADE_EASING: &str = "linear"; // opacity drops at a constant rate

// Audio crossfade
pub const AUDIO_SELECTOR: &str = "audio";
pub const VOLUME_RAMP_STEP: f64 = 0.05;
pub const VOLUME_RAMP_TICK_MS: i32 = 50;

// Tap sound
pub const TAP_SOUND_SRC: &str = "mouse-tap-single-studio-vocal-hd-379364.mp3";
pub const TAP_TARGET_SELECTOR: &str = "button, a[href]";
pub const TAP_VOLUME_MIN: f64 = 0.8;
pub const TAP_VOLUME_SPAN: f64 = 0.2;
pub const TAP_RATE_MIN: f64 = 0.9;
pub const TAP_RATE_SPAN: f64 = 0.2;
