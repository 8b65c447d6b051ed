use crate::core::actions::composite::ports::palette::Palette;
use crate::core::data::colour::Colour;
use crate::core::fractals::escape_time::palettes::kinds::PaletteKind;
use crate::core::fractals::escape_time::palettes::map::EscapeTimePalette;

const BANDS: [Colour; 2] = [Colour::BLACK, Colour::WHITE];

/// Two-state palette: black inside the set, white for any escape.
#[derive(Debug, Default)]
pub struct MonochromePalette;

impl Palette for MonochromePalette {
    #[inline]
    fn band(&self, count: u32) -> usize {
        usize::from(count != 0)
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

impl EscapeTimePalette for MonochromePalette {
    fn kind(&self) -> PaletteKind {
        PaletteKind::Monochrome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maps_inside_to_black_and_escapes_to_white() {
        let palette = MonochromePalette;

        assert_eq!(palette.colour(0), Colour::BLACK);
        assert_eq!(palette.colour(1), Colour::WHITE);
        assert_eq!(palette.colour(49), Colour::WHITE);
    }
}
