use crate::core::{
    actions::render_frame::FrameRenderer,
    data::frame_size::FrameSize,
    fractals::escape_time::{
        algorithm::EscapeTimeAlgorithm,
        errors::EscapeTimeError,
        palettes::{factory::palette_factory, kinds::PaletteKind, map::EscapeTimePalette},
    },
};

pub const DEFAULT_MAX_ITERATIONS: u32 = 50;

pub type EscapeTimeRenderer = FrameRenderer<EscapeTimeAlgorithm, Box<dyn EscapeTimePalette>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EscapeTimeConfig {
    pub max_iterations: u32,
    pub palette_kind: PaletteKind,
}

impl Default for EscapeTimeConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            palette_kind: PaletteKind::default(),
        }
    }
}

impl EscapeTimeConfig {
    pub fn build_algorithm(&self) -> Result<EscapeTimeAlgorithm, EscapeTimeError> {
        EscapeTimeAlgorithm::new(self.max_iterations)
    }

    #[must_use]
    pub fn build_palette(&self) -> Box<dyn EscapeTimePalette> {
        palette_factory(self.palette_kind)
    }

    pub fn build_renderer(&self, frame_size: FrameSize) -> Result<EscapeTimeRenderer, EscapeTimeError> {
        Ok(FrameRenderer::new(
            frame_size,
            self.build_algorithm()?,
            self.build_palette(),
        ))
    }
}
