use crate::core::actions::composite::ports::palette::Palette;
use crate::core::data::frame_size::FrameSize;
use crate::core::data::grid::Grid;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer};

/// Turns grids of escape counts into the RGBA buffer it owns.
#[derive(Debug)]
pub struct Compositor<P: Palette> {
    palette: P,
    buffer: PixelBuffer,
}

impl<P: Palette> Compositor<P> {
    #[must_use]
    pub fn new(frame_size: FrameSize, palette: P) -> Self {
        Self {
            palette,
            buffer: PixelBuffer::new(frame_size),
        }
    }

    /// Writes one opaque pixel per count. The buffer is resized first if the
    /// grid dimensions changed.
    pub fn composite(&mut self, grid: &Grid) {
        self.buffer.resize(grid.frame_size());

        let pixels = self.buffer.buffer_mut().chunks_exact_mut(BYTES_PER_PIXEL);

        for (pixel, &count) in pixels.zip(grid.counts()) {
            pixel.copy_from_slice(&self.palette.colour(count).to_rgba());
        }
    }

    /// Reallocates the buffer for `frame_size`. The new buffer is zeroed
    /// until the next [`Compositor::composite`].
    pub fn resize(&mut self, frame_size: FrameSize) {
        self.buffer.resize(frame_size);
    }

    #[must_use]
    pub fn pixel_buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    #[must_use]
    pub fn palette(&self) -> &P {
        &self.palette
    }

    pub fn set_palette(&mut self, palette: P) {
        self.palette = palette;
    }
}
