use crate::core::actions::generate_field::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::frame_size::FrameSize;
use crate::core::data::grid::Grid;
use crate::core::data::view_state::ViewState;
use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;

/// Computes a fresh grid of escape counts for `frame_size`.
#[must_use]
pub fn generate_field<Alg: FractalAlgorithm>(
    frame_size: FrameSize,
    view: &ViewState,
    algorithm: &Alg,
) -> Grid {
    let mut grid = Grid::new(frame_size);
    generate_field_into(&mut grid, view, algorithm);
    grid
}

/// Overwrites every count in `grid` for the given view.
pub fn generate_field_into<Alg: FractalAlgorithm>(
    grid: &mut Grid,
    view: &ViewState,
    algorithm: &Alg,
) {
    let frame_size = grid.frame_size();

    for (pixel, count) in frame_size.points().zip(grid.counts_mut()) {
        *count = algorithm.compute(pixel_to_complex_coords(pixel, frame_size, view));
    }
}
