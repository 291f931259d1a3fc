/// Gesture and animation tuning constants.
///
/// These constants express intended behavior (thresholds, phase durations)
/// and keep magic numbers out of the code, improving readability.
// Gesture thresholds as fractions of the viewport height
pub const FLIP_THRESHOLD_RATIO: f64 = 0.2; // a light gesture flips the current panel
pub const SLIDE_THRESHOLD_RATIO: f64 = 0.8; // a deliberate gesture moves between panels

// Animation timing (milliseconds)
pub const FLIP_PHASE_MS: i32 = 200; // per half-flip; a full flip is two phases
pub const SLIDE_MS: i32 = 500;
pub const SETTLE_MS: i32 = 120; // flip-lock release delay after a forced-back landing

// Scale a growing face starts from, so the grow phase has a sliver to expand
pub const FLIP_GROW_START: f64 = 0.01;

// Keyboard deltas land this far past the slide threshold so one press always acts
pub const KEY_DELTA_MARGIN: f64 = 10.0;

// Sizing
pub const VIEWPORT_FIT_RATIO: f64 = 0.9; // panels fit within this fraction of the viewport
pub const FALLBACK_PANEL_PX: u32 = 500; // stack geometry before the first image reports its size
