#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaletteKind {
    #[default]
    Banded,
    Monochrome,
}

impl PaletteKind {
    pub const ALL: &'static [Self] = &[Self::Banded, Self::Monochrome];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Banded => "Six-band",
            Self::Monochrome => "Black and white",
        }
    }

    /// The following kind in [`Self::ALL`], wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|&kind| kind == self).unwrap_or(0);

        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}

impl std::fmt::Display for PaletteKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
