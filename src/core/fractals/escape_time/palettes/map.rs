use crate::core::actions::composite::ports::palette::Palette;
use crate::core::data::colour::Colour;
use crate::core::fractals::escape_time::palettes::kinds::PaletteKind;

pub trait EscapeTimePalette: Palette + Send + Sync + std::fmt::Debug {
    fn kind(&self) -> PaletteKind;
}

impl Palette for Box<dyn EscapeTimePalette> {
    fn band(&self, count: u32) -> usize {
        (**self).band(count)
    }

    fn band_count(&self) -> usize {
        (**self).band_count()
    }

    fn band_colour(&self, band: usize) -> Colour {
        (**self).band_colour(band)
    }

    fn display_name(&self) -> &str {
        (**self).display_name()
    }
}
