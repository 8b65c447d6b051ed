use crate::core::data::complex::Complex;
use crate::core::data::view_command::ViewCommand;
use std::error::Error;
use std::fmt;

pub const MIN_ZOOM: u32 = 1;
pub const ZOOM_STEP: u32 = 1;
/// Focus movement per pan step, in normalized screen units at zoom 1.
pub const PAN_STEP: f64 = 0.1;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ViewStateError {
    ZeroZoom,
    NonFiniteFocus,
}

impl fmt::Display for ViewStateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroZoom => write!(f, "zoom must be at least {}", MIN_ZOOM),
            Self::NonFiniteFocus => write!(f, "focus must be a finite complex number"),
        }
    }
}

impl Error for ViewStateError {}

/// Zoom and focus for one frame.
///
/// `zoom` never drops below [`MIN_ZOOM`] and `focus` is always finite, so the
/// coordinate mapper can use both without checking.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewState {
    zoom: u32,
    focus: Complex,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            zoom: MIN_ZOOM,
            focus: Complex::ZERO,
        }
    }
}

impl ViewState {
    pub fn new(zoom: u32, focus: Complex) -> Result<Self, ViewStateError> {
        if zoom < MIN_ZOOM {
            return Err(ViewStateError::ZeroZoom);
        }

        if !focus.is_finite() {
            return Err(ViewStateError::NonFiniteFocus);
        }

        Ok(Self { zoom, focus })
    }

    #[must_use]
    pub fn zoom(&self) -> u32 {
        self.zoom
    }

    #[must_use]
    pub fn focus(&self) -> Complex {
        self.focus
    }

    pub fn zoom_in(&mut self) {
        self.zoom = self.zoom.saturating_add(ZOOM_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.zoom = self.zoom.saturating_sub(ZOOM_STEP).max(MIN_ZOOM);
    }

    /// Moves the focus by `dx`, `dy` pan steps. A move that would leave the
    /// focus non-finite is dropped.
    pub fn pan(&mut self, dx: f64, dy: f64) {
        let scale = PAN_STEP / f64::from(self.zoom);
        let focus = self.focus + Complex::new(dx * scale, dy * scale);

        if focus.is_finite() {
            self.focus = focus;
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Applies a single command. Returns `true` if the view changed.
    pub fn apply(&mut self, command: ViewCommand) -> bool {
        let before = *self;

        match command {
            ViewCommand::ZoomIn => self.zoom_in(),
            ViewCommand::ZoomOut => self.zoom_out(),
            ViewCommand::Pan { dx, dy } => self.pan(dx, dy),
            ViewCommand::Reset => self.reset(),
            ViewCommand::CyclePalette => {}
        }

        *self != before
    }
}
