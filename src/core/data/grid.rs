use crate::core::data::frame_size::FrameSize;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    BoundsMismatch {
        frame_size: usize,
        data_size: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                frame_size,
                data_size,
            } => {
                write!(
                    f,
                    "frame size {} does not match grid data size {}",
                    frame_size, data_size
                )
            }
        }
    }
}

impl Error for GridError {}

/// Per-pixel escape counts for one frame, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    frame_size: FrameSize,
    counts: Vec<u32>,
}

impl Grid {
    #[must_use]
    pub fn new(frame_size: FrameSize) -> Self {
        Self {
            frame_size,
            counts: vec![0; frame_size.pixel_count()],
        }
    }

    pub fn from_data(frame_size: FrameSize, counts: Vec<u32>) -> Result<Self, GridError> {
        if frame_size.pixel_count() != counts.len() {
            return Err(GridError::BoundsMismatch {
                frame_size: frame_size.pixel_count(),
                data_size: counts.len(),
            });
        }

        Ok(Self { frame_size, counts })
    }

    #[must_use]
    pub fn frame_size(&self) -> FrameSize {
        self.frame_size
    }

    #[must_use]
    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    pub(crate) fn counts_mut(&mut self) -> &mut [u32] {
        &mut self.counts
    }

    #[must_use]
    pub fn get(&self, point: Point) -> Option<u32> {
        if !self.frame_size.contains_point(point) {
            return None;
        }

        let index = point.y as usize * self.frame_size.width() as usize + point.x as usize;
        Some(self.counts[index])
    }

    /// Counts grouped by row, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.counts.chunks_exact(self.frame_size.width() as usize)
    }
}
