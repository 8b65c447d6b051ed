//! Fixed window configuration for the desktop shell.

pub const WINDOW_TITLE: &str = "Go Frac!";

/// Logical framebuffer resolution. The fractal is rendered at this size and
/// scaled up to fill the window.
pub const SCREEN_WIDTH: u32 = 320;
pub const SCREEN_HEIGHT: u32 = 240;

/// Initial window size as a multiple of the framebuffer resolution.
pub const SCREEN_SCALE: u32 = 2;

pub const KEY_HELP: &str = "+/Z zoom in   -/X zoom out   arrows pan   C palette   R reset";
