use crate::core::data::colour::Colour;

/// Count -> band -> colour policy used by the compositor.
pub trait Palette {
    fn band(&self, count: u32) -> usize;

    fn band_count(&self) -> usize;

    fn band_colour(&self, band: usize) -> Colour;

    fn display_name(&self) -> &str;

    fn colour(&self, count: u32) -> Colour {
        self.band_colour(self.band(count))
    }
}
