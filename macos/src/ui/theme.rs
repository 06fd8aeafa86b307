// Theme constants for the break overlay.
// NSColor conventions (RGB floats 0.0–1.0); the backdrop alpha comes from config.

/// Foreground / primary text: white
pub const CLR_FG: (f64, f64, f64) = (1.0, 1.0, 1.0);

/// Subtitle text: #E2E8F0
pub const CLR_MUTED: (f64, f64, f64) = (0.886, 0.910, 0.941);

/// Backdrop: black
pub const CLR_BACKDROP: (f64, f64, f64) = (0.0, 0.0, 0.0);

// ── Dimensions ──────────────────────────────────────────────────────────────

pub const GAP: f64 = 20.0;

pub const TITLE_H: f64 = 44.0;
pub const SUBTITLE_H: f64 = 22.0;
pub const RING_SIZE: f64 = 120.0;
pub const COUNT_H: f64 = 44.0;
pub const BUTTON_W: f64 = 110.0;
pub const BUTTON_H: f64 = 36.0;

pub const FONT_SIZE_TITLE: f64 = 30.0;
pub const FONT_SIZE_NORMAL: f64 = 15.0;
pub const FONT_SIZE_COUNT: f64 = 34.0;
pub const FONT_SIZE_BUTTON: f64 = 14.0;

/// Height of the whole centred stack.
pub const STACK_H: f64 = TITLE_H + GAP + SUBTITLE_H + GAP + RING_SIZE + GAP + BUTTON_H;
