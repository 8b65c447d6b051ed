use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FrameSizeError {
    InvalidSize { width: u32, height: u32 },
}

impl fmt::Display for FrameSizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "frame size must be non-zero: {}x{}", width, height)
            }
        }
    }
}

impl Error for FrameSizeError {}

/// Dimensions of the framebuffer in pixels. Both sides are at least one pixel.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FrameSize {
    width: u32,
    height: u32,
}

impl FrameSize {
    pub fn new(width: u32, height: u32) -> Result<Self, FrameSizeError> {
        if width == 0 || height == 0 {
            return Err(FrameSizeError::InvalidSize { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x < self.width && point.y < self.height
    }

    /// Every pixel of the frame, row-major from the top-left corner.
    pub fn points(&self) -> impl Iterator<Item = Point> + use<> {
        let width = self.width;

        (0..self.height).flat_map(move |y| (0..width).map(move |x| Point { x, y }))
    }
}
