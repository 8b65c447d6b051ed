use crate::core::data::frame_size::FrameSize;
use std::error::Error;
use std::fmt;

pub const BYTES_PER_PIXEL: usize = 4;

fn frame_size_to_buffer_size(frame_size: FrameSize) -> usize {
    frame_size.pixel_count() * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    BoundsMismatch {
        frame_size: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                frame_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "frame size {} does not match buffer size {}",
                    frame_size, buffer_size
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<u8>;

/// RGBA8888 framebuffer, row-major, top-to-bottom and left-to-right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    frame_size: FrameSize,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(frame_size: FrameSize) -> Self {
        Self {
            frame_size,
            buffer: vec![0; frame_size_to_buffer_size(frame_size)],
        }
    }

    pub fn from_data(
        frame_size: FrameSize,
        buffer: PixelBufferData,
    ) -> Result<Self, PixelBufferError> {
        let expected = frame_size_to_buffer_size(frame_size);

        if expected != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                frame_size: expected,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { frame_size, buffer })
    }

    #[must_use]
    pub fn frame_size(&self) -> FrameSize {
        self.frame_size
    }

    #[must_use]
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    pub(crate) fn buffer_mut(&mut self) -> &mut [u8] {
        &mut self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    /// Resizes to `frame_size`, zeroing the contents if the size changed.
    pub fn resize(&mut self, frame_size: FrameSize) {
        if self.frame_size == frame_size {
            return;
        }

        self.frame_size = frame_size;
        self.buffer.clear();
        self.buffer.resize(frame_size_to_buffer_size(frame_size), 0);
    }
}
