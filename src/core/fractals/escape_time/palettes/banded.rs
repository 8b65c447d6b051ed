use crate::core::actions::composite::ports::palette::Palette;
use crate::core::data::colour::Colour;
use crate::core::fractals::escape_time::palettes::kinds::PaletteKind;
use crate::core::fractals::escape_time::palettes::map::EscapeTimePalette;

const BANDS: [Colour; 6] = [
    Colour::BLACK,
    Colour::RED,
    Colour::GREEN,
    Colour::BLUE,
    Colour::MAGENTA,
    Colour::YELLOW,
];

/// Inside points are black. Escape counts cycle through five colours,
/// starting at red for a count of one.
#[derive(Debug, Default)]
pub struct BandedPalette;

impl Palette for BandedPalette {
    #[inline]
    fn band(&self, count: u32) -> usize {
        match count {
            0 => 0,
            n => 1 + ((n - 1) as usize % (BANDS.len() - 1)),
        }
    }

    fn band_count(&self) -> usize {
        BANDS.len()
    }

    fn band_colour(&self, band: usize) -> Colour {
        BANDS[band % BANDS.len()]
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl EscapeTimePalette for BandedPalette {
    fn kind(&self) -> PaletteKind {
        PaletteKind::Banded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inside_is_black() {
        assert_eq!(BandedPalette.colour(0), Colour::BLACK);
    }

    #[test]
    fn test_escape_counts_cycle_through_five_colours() {
        let palette = BandedPalette;

        assert_eq!(palette.colour(1), Colour::RED);
        assert_eq!(palette.colour(2), Colour::GREEN);
        assert_eq!(palette.colour(3), Colour::BLUE);
        assert_eq!(palette.colour(4), Colour::MAGENTA);
        assert_eq!(palette.colour(5), Colour::YELLOW);
        assert_eq!(palette.colour(6), Colour::RED);
        assert_eq!(palette.colour(49), Colour::MAGENTA);
    }

    #[test]
    fn test_escaping_counts_never_use_the_inside_band() {
        let palette = BandedPalette;

        assert!((1..=1000).all(|count| palette.band(count) != 0));
        assert_ne!(palette.band(u32::MAX), 0);
    }
}
