use crate::core::fractals::escape_time::palettes::{
    banded::BandedPalette, kinds::PaletteKind, map::EscapeTimePalette,
    monochrome::MonochromePalette,
};

#[must_use]
pub fn palette_factory(kind: PaletteKind) -> Box<dyn EscapeTimePalette> {
    match kind {
        PaletteKind::Banded => Box::new(BandedPalette),
        PaletteKind::Monochrome => Box::new(MonochromePalette),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::composite::ports::palette::Palette;
    use crate::core::data::colour::OPAQUE;
    use std::collections::HashSet;

    #[test]
    fn test_all_array_has_default_first() {
        assert_eq!(PaletteKind::ALL.first(), Some(&PaletteKind::default()));
    }

    #[test]
    fn test_factory_round_trip_for_all_kinds() {
        for &kind in PaletteKind::ALL {
            let palette = palette_factory(kind);

            assert_eq!(palette.kind(), kind);
            assert_eq!(palette.display_name(), kind.display_name());
        }
    }

    #[test]
    fn test_every_band_has_a_distinct_opaque_colour() {
        for &kind in PaletteKind::ALL {
            let palette = palette_factory(kind);
            let colours: HashSet<[u8; 4]> = (0..palette.band_count())
                .map(|band| palette.band_colour(band).to_rgba())
                .collect();

            assert_eq!(colours.len(), palette.band_count(), "{}", kind);
            assert!(colours.iter().all(|rgba| rgba[3] == OPAQUE));
        }
    }

    #[test]
    fn test_next_cycles_through_all_kinds() {
        let mut kind = PaletteKind::default();

        for _ in 0..PaletteKind::ALL.len() {
            kind = kind.next();
        }

        assert_eq!(kind, PaletteKind::default());
        assert_eq!(PaletteKind::Banded.next(), PaletteKind::Monochrome);
    }
}
