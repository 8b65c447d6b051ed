use crate::core::actions::generate_field::generate_field::generate_field_into;
use crate::core::actions::generate_field::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::frame_size::FrameSize;
use crate::core::data::grid::Grid;
use crate::core::data::view_state::ViewState;

/// Owns a front/back pair of grids.
///
/// Each frame is written into the back grid and then swapped to the front, so
/// the grid handed out by [`FieldGenerator::current`] is never partially written.
#[derive(Debug)]
pub struct FieldGenerator<Alg: FractalAlgorithm> {
    algorithm: Alg,
    front: Grid,
    back: Grid,
}

impl<Alg: FractalAlgorithm> FieldGenerator<Alg> {
    #[must_use]
    pub fn new(frame_size: FrameSize, algorithm: Alg) -> Self {
        Self {
            algorithm,
            front: Grid::new(frame_size),
            back: Grid::new(frame_size),
        }
    }

    pub fn advance(&mut self, view: &ViewState) -> &Grid {
        generate_field_into(&mut self.back, view, &self.algorithm);
        std::mem::swap(&mut self.front, &mut self.back);

        &self.front
    }

    #[must_use]
    pub fn current(&self) -> &Grid {
        &self.front
    }

    #[must_use]
    pub fn algorithm(&self) -> &Alg {
        &self.algorithm
    }

    #[must_use]
    pub fn frame_size(&self) -> FrameSize {
        self.front.frame_size()
    }

    /// Replaces both grids when the size changes. The new front grid is all
    /// zeros until the next [`FieldGenerator::advance`].
    pub fn resize(&mut self, frame_size: FrameSize) {
        if self.frame_size() == frame_size {
            return;
        }

        self.front = Grid::new(frame_size);
        self.back = Grid::new(frame_size);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::generate_field::generate_field::generate_field;
    use crate::core::data::complex::Complex;
    use crate::core::fractals::escape_time::algorithm::EscapeTimeAlgorithm;

    fn generator(width: u32, height: u32) -> FieldGenerator<EscapeTimeAlgorithm> {
        FieldGenerator::new(
            FrameSize::new(width, height).unwrap(),
            EscapeTimeAlgorithm::new(50).unwrap(),
        )
    }

    #[test]
    fn test_advance_matches_one_shot_generation() {
        let mut generator = generator(16, 12);
        let view = ViewState::new(2, Complex::new(-0.5, 0.0)).unwrap();
        let expected = generate_field(generator.frame_size(), &view, generator.algorithm());

        assert_eq!(generator.advance(&view), &expected);
        assert_eq!(generator.current(), &expected);
    }

    #[test]
    fn test_advance_replaces_the_previous_frame() {
        let mut generator = generator(16, 12);
        let first = generator.advance(&ViewState::default()).clone();
        let zoomed = ViewState::new(5, Complex::ZERO).unwrap();
        let second = generator.advance(&zoomed).clone();

        assert_ne!(first, second);
        assert_eq!(generator.advance(&ViewState::default()), &first);
    }

    #[test]
    fn test_resize_changes_both_grids() {
        let mut generator = generator(4, 4);
        let new_size = FrameSize::new(6, 2).unwrap();

        generator.resize(new_size);

        assert_eq!(generator.current().frame_size(), new_size);
        assert_eq!(generator.advance(&ViewState::default()).frame_size(), new_size);
    }
}
