use crate::controllers::frame::data::frame_data::FrameData;
use crate::core::actions::generate_field::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::frame_size::FrameSize;
use crate::core::data::view_command::ViewCommand;
use crate::core::data::view_state::ViewState;
use crate::core::fractals::escape_time::errors::EscapeTimeError;
use crate::core::fractals::escape_time::escape_time_config::{
    EscapeTimeConfig, EscapeTimeRenderer,
};
use crate::core::fractals::escape_time::palettes::kinds::PaletteKind;
use log::{debug, trace};
use std::time::Instant;

/// Drives one synchronous render per tick.
///
/// Input arrives as [`ViewCommand`]s between ticks. They are queued and applied
/// together at the start of the next tick, so each frame is rendered from a
/// single consistent view.
#[derive(Debug)]
pub struct FrameController {
    config: EscapeTimeConfig,
    view: ViewState,
    pending: Vec<ViewCommand>,
    renderer: EscapeTimeRenderer,
    tick: u64,
}

impl FrameController {
    pub fn new(frame_size: FrameSize, config: EscapeTimeConfig) -> Result<Self, EscapeTimeError> {
        Ok(Self {
            config,
            view: ViewState::default(),
            pending: Vec::new(),
            renderer: config.build_renderer(frame_size)?,
            tick: 0,
        })
    }

    pub fn queue(&mut self, command: ViewCommand) {
        self.pending.push(command);
    }

    #[must_use]
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    #[must_use]
    pub fn view(&self) -> ViewState {
        self.view
    }

    #[must_use]
    pub fn palette_kind(&self) -> PaletteKind {
        self.config.palette_kind
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.renderer.algorithm().max_iterations()
    }

    #[must_use]
    pub fn frame_size(&self) -> FrameSize {
        self.renderer.frame_size()
    }

    pub fn resize(&mut self, frame_size: FrameSize) {
        self.renderer.resize(frame_size);
    }

    /// Applies queued commands, then renders the frame.
    pub fn tick(&mut self) -> FrameData<'_> {
        self.apply_pending();

        let started = Instant::now();
        let pixel_buffer = self.renderer.render_frame(&self.view);
        let render_duration = started.elapsed();

        self.tick += 1;
        trace!("tick {} rendered in {:?}", self.tick, render_duration);

        FrameData {
            tick: self.tick,
            view: self.view,
            pixel_buffer,
            render_duration,
        }
    }

    fn apply_pending(&mut self) {
        for command in std::mem::take(&mut self.pending) {
            match command {
                ViewCommand::CyclePalette => {
                    self.config.palette_kind = self.config.palette_kind.next();
                    self.renderer.set_palette(self.config.build_palette());
                }
                command => {
                    if self.view.apply(command) {
                        debug!(
                            "view changed: zoom {}, focus {:+.4} {:+.4}i",
                            self.view.zoom(),
                            self.view.focus().real,
                            self.view.focus().imag
                        );
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;
    use crate::core::data::view_state::MIN_ZOOM;

    fn controller() -> FrameController {
        FrameController::new(FrameSize::new(32, 24).unwrap(), EscapeTimeConfig::default())
            .unwrap()
    }

    #[test]
    fn test_starts_at_default_view() {
        let controller = controller();

        assert_eq!(controller.view(), ViewState::default());
        assert_eq!(controller.palette_kind(), PaletteKind::Banded);
        assert_eq!(controller.max_iterations(), 50);
    }

    #[test]
    fn test_max_iterations_comes_from_the_built_algorithm() {
        let config = EscapeTimeConfig {
            max_iterations: 120,
            ..EscapeTimeConfig::default()
        };
        let controller = FrameController::new(FrameSize::new(4, 4).unwrap(), config).unwrap();

        assert_eq!(controller.max_iterations(), 120);
    }

    #[test]
    fn test_rejects_zero_max_iterations() {
        let config = EscapeTimeConfig {
            max_iterations: 0,
            ..EscapeTimeConfig::default()
        };

        assert!(matches!(
            FrameController::new(FrameSize::new(4, 4).unwrap(), config),
            Err(EscapeTimeError::ZeroMaxIterations)
        ));
    }

    #[test]
    fn test_queued_commands_apply_only_at_the_next_tick() {
        let mut controller = controller();

        controller.queue(ViewCommand::ZoomIn);
        controller.queue(ViewCommand::ZoomIn);
        assert_eq!(controller.view().zoom(), 1);
        assert!(controller.has_pending());

        let frame = controller.tick();
        assert_eq!(frame.view.zoom(), 3);
        assert_eq!(frame.tick, 1);
        assert!(!controller.has_pending());
    }

    #[test]
    fn test_zoom_stays_clamped_after_many_zoom_outs() {
        let mut controller = controller();

        for _ in 0..25 {
            controller.queue(ViewCommand::ZoomOut);
            let frame = controller.tick();
            assert_eq!(frame.view.zoom(), MIN_ZOOM);
        }
    }

    #[test]
    fn test_tick_renders_a_full_opaque_buffer() {
        let mut controller = controller();
        let frame = controller.tick();

        assert_eq!(frame.pixel_buffer.buffer_size(), 32 * 24 * 4);
        assert!(frame.pixel_buffer.buffer().chunks_exact(4).all(|p| p[3] == 255));
    }

    #[test]
    fn test_unchanged_view_renders_identical_frames() {
        let mut controller = controller();
        let first = controller.tick().pixel_buffer.clone();
        let second = controller.tick().pixel_buffer.clone();

        assert_eq!(first, second);
    }

    #[test]
    fn test_cycle_palette_changes_pixels_but_not_view() {
        let mut controller = controller();
        let banded = controller.tick().pixel_buffer.clone();

        controller.queue(ViewCommand::CyclePalette);
        let frame = controller.tick();

        assert_eq!(frame.view, ViewState::default());
        assert_ne!(frame.pixel_buffer, &banded);
        assert_eq!(controller.palette_kind(), PaletteKind::Monochrome);
    }

    #[test]
    fn test_pan_and_reset() {
        let mut controller = controller();

        controller.queue(ViewCommand::Pan { dx: 1.0, dy: 0.0 });
        controller.tick();
        assert!(controller.view().focus().real > 0.0);

        controller.queue(ViewCommand::Reset);
        controller.tick();
        assert_eq!(controller.view().focus(), Complex::ZERO);
    }

    #[test]
    fn test_resize_changes_next_frame_dimensions() {
        let mut controller = controller();
        let new_size = FrameSize::new(8, 6).unwrap();

        controller.resize(new_size);

        assert_eq!(controller.frame_size(), new_size);
        assert_eq!(controller.tick().pixel_buffer.frame_size(), new_size);
    }
}
