use crate::core::data::complex::Complex;

/// Per-sample iteration count for a fractal field.
pub trait FractalAlgorithm {
    fn compute(&self, c: Complex) -> u32;

    fn max_iterations(&self) -> u32;
}
