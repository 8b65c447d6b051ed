use crate::core::data::complex::Complex;
use crate::core::data::frame_size::FrameSize;
use crate::core::data::point::Point;
use crate::core::data::view_state::ViewState;

/// Maps an axis coordinate to `[-1, 1)`, then scales it by `1 / zoom`.
#[inline]
fn normalize_axis(coord: u32, dimension: u32, zoom: f64) -> f64 {
    ((2.0 * f64::from(coord)) / f64::from(dimension) - 1.0) / zoom
}

/// Sample point in the complex plane for `pixel`.
///
/// The real axis runs left to right and the imaginary axis runs top to bottom.
/// The focus is added after scaling, so it is always at the centre of the
/// zoomed view. `pixel` must lie inside `frame_size`.
#[must_use]
#[inline]
pub fn pixel_to_complex_coords(pixel: Point, frame_size: FrameSize, view: &ViewState) -> Complex {
    debug_assert!(
        frame_size.contains_point(pixel),
        "pixel ({}, {}) outside {}x{} frame",
        pixel.x,
        pixel.y,
        frame_size.width(),
        frame_size.height()
    );

    let zoom = f64::from(view.zoom());
    let offset = Complex {
        real: normalize_axis(pixel.x, frame_size.width(), zoom),
        imag: normalize_axis(pixel.y, frame_size.height(), zoom),
    };

    offset + view.focus()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(width: u32, height: u32) -> FrameSize {
        FrameSize::new(width, height).unwrap()
    }

    #[test]
    fn test_top_left_maps_to_minus_one() {
        let result = pixel_to_complex_coords(
            Point { x: 0, y: 0 },
            frame(100, 100),
            &ViewState::default(),
        );

        assert_eq!(result, Complex::new(-1.0, -1.0));
    }

    #[test]
    fn test_centre_maps_to_focus() {
        let focus = Complex::new(-0.75, 0.1);
        let view = ViewState::new(7, focus).unwrap();
        let result = pixel_to_complex_coords(Point { x: 50, y: 50 }, frame(100, 100), &view);

        assert_eq!(result, focus);
    }

    #[test]
    fn test_bottom_right_stays_below_one() {
        let result = pixel_to_complex_coords(
            Point { x: 99, y: 49 },
            frame(100, 50),
            &ViewState::default(),
        );

        assert!(result.real < 1.0 && result.real > 0.9);
        assert!(result.imag < 1.0 && result.imag > 0.9);
    }

    #[test]
    fn test_focus_is_added() {
        let view = ViewState::new(1, Complex::new(0.5, -0.25)).unwrap();
        let result = pixel_to_complex_coords(Point { x: 0, y: 0 }, frame(4, 4), &view);

        assert_eq!(result, Complex::new(-0.5, -1.25));
    }

    #[test]
    fn test_output_is_finite_and_deterministic() {
        let size = frame(17, 9);
        let views = [
            ViewState::default(),
            ViewState::new(u32::MAX, Complex::new(1e6, -1e6)).unwrap(),
            ViewState::new(3, Complex::new(-0.5, 0.5)).unwrap(),
        ];

        for view in &views {
            for point in size.points() {
                let first = pixel_to_complex_coords(point, size, view);
                let second = pixel_to_complex_coords(point, size, view);

                assert!(first.is_finite());
                assert_eq!(first, second);
            }
        }
    }

    #[test]
    fn test_higher_zoom_narrows_offset_from_focus() {
        let size = frame(64, 48);
        let focus = Complex::new(0.3, -0.2);
        let point = Point { x: 5, y: 40 };
        let mut previous = f64::INFINITY;

        for zoom in 1..=20 {
            let view = ViewState::new(zoom, focus).unwrap();
            let offset = (pixel_to_complex_coords(point, size, &view) - focus).magnitude();

            assert!(offset < previous, "zoom {} did not narrow the view", zoom);
            previous = offset;
        }
    }
}
