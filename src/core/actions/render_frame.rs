use crate::core::actions::composite::compositor::Compositor;
use crate::core::actions::composite::ports::palette::Palette;
use crate::core::actions::generate_field::field_generator::FieldGenerator;
use crate::core::actions::generate_field::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::frame_size::FrameSize;
use crate::core::data::grid::Grid;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::view_state::ViewState;
use log::debug;

/// Per-frame pipeline: generate the field for a view, then composite it.
///
/// Output depends only on the view, the frame size, the algorithm and the
/// palette, so repeated calls with the same inputs are bit-identical.
#[derive(Debug)]
pub struct FrameRenderer<Alg: FractalAlgorithm, P: Palette> {
    generator: FieldGenerator<Alg>,
    compositor: Compositor<P>,
}

impl<Alg: FractalAlgorithm, P: Palette> FrameRenderer<Alg, P> {
    #[must_use]
    pub fn new(frame_size: FrameSize, algorithm: Alg, palette: P) -> Self {
        Self {
            generator: FieldGenerator::new(frame_size, algorithm),
            compositor: Compositor::new(frame_size, palette),
        }
    }

    /// Recomputes the grid of escape counts without touching the pixel buffer.
    pub fn advance_frame(&mut self, view: &ViewState) -> &Grid {
        self.generator.advance(view)
    }

    /// Recomputes the grid and rewrites the pixel buffer from it.
    pub fn render_frame(&mut self, view: &ViewState) -> &PixelBuffer {
        let grid = self.generator.advance(view);
        self.compositor.composite(grid);

        self.compositor.pixel_buffer()
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        self.generator.current()
    }

    #[must_use]
    pub fn pixel_buffer(&self) -> &PixelBuffer {
        self.compositor.pixel_buffer()
    }

    #[must_use]
    pub fn frame_size(&self) -> FrameSize {
        self.generator.frame_size()
    }

    #[must_use]
    pub fn algorithm(&self) -> &Alg {
        self.generator.algorithm()
    }

    #[must_use]
    pub fn palette(&self) -> &P {
        self.compositor.palette()
    }

    pub fn set_palette(&mut self, palette: P) {
        debug!("palette set to {}", palette.display_name());
        self.compositor.set_palette(palette);
    }

    pub fn resize(&mut self, frame_size: FrameSize) {
        if self.frame_size() == frame_size {
            return;
        }

        debug!(
            "resizing frame to {}x{}",
            frame_size.width(),
            frame_size.height()
        );
        self.generator.resize(frame_size);
        self.compositor.resize(frame_size);
    }
}
