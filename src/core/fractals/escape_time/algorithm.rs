use crate::core::actions::generate_field::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::fractals::escape_time::errors::EscapeTimeError;
use std::ops::ControlFlow;

/// Count recorded for orbits that stay bounded.
pub const INSIDE: u32 = 0;

/// `|z| > 2`, compared on the squared magnitude.
const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Escape-time iteration of `z -> z² + c` starting from `z = 0`.
///
/// The escape check runs before each update, so the first check sees `z = 0`
/// and never escapes. Escaping samples therefore always have a count of at
/// least one, leaving [`INSIDE`] unambiguous.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EscapeTimeAlgorithm {
    max_iterations: u32,
}

impl FractalAlgorithm for EscapeTimeAlgorithm {
    #[inline]
    fn compute(&self, c: Complex) -> u32 {
        let escape = (0..self.max_iterations).try_fold(Complex::ZERO, |z, iteration| {
            if z.magnitude_squared() > ESCAPE_RADIUS_SQUARED {
                ControlFlow::Break(iteration)
            } else {
                ControlFlow::Continue(z * z + c)
            }
        });

        match escape {
            ControlFlow::Break(iteration) => iteration,
            ControlFlow::Continue(_) => INSIDE,
        }
    }

    fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}

impl EscapeTimeAlgorithm {
    pub fn new(max_iterations: u32) -> Result<Self, EscapeTimeError> {
        if max_iterations == 0 {
            return Err(EscapeTimeError::ZeroMaxIterations);
        }

        Ok(Self { max_iterations })
    }
}
