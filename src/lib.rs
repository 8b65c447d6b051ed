mod controllers;
mod core;
mod input;
mod presenters;

pub use crate::controllers::frame::{FrameController, FrameData};
pub use crate::core::actions::composite::compositor::Compositor;
pub use crate::core::actions::composite::ports::palette::Palette;
pub use crate::core::actions::generate_field::field_generator::FieldGenerator;
pub use crate::core::actions::generate_field::generate_field::{
    generate_field, generate_field_into,
};
pub use crate::core::actions::generate_field::ports::fractal_algorithm::FractalAlgorithm;
pub use crate::core::actions::render_frame::FrameRenderer;
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::frame_size::{FrameSize, FrameSizeError};
pub use crate::core::data::grid::{Grid, GridError};
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::point::Point;
pub use crate::core::data::view_command::ViewCommand;
pub use crate::core::data::view_state::{ViewState, ViewStateError};
pub use crate::core::fractals::escape_time::algorithm::{EscapeTimeAlgorithm, INSIDE};
pub use crate::core::fractals::escape_time::errors::EscapeTimeError;
pub use crate::core::fractals::escape_time::escape_time_config::{
    DEFAULT_MAX_ITERATIONS, EscapeTimeConfig, EscapeTimeRenderer,
};
pub use crate::core::fractals::escape_time::palettes::{
    banded::BandedPalette, factory::palette_factory, kinds::PaletteKind,
    map::EscapeTimePalette, monochrome::MonochromePalette,
};
pub use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;

#[cfg(feature = "gui")]
pub use crate::input::gui::run_gui;
