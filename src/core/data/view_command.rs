/// A discrete change to the view, produced by the input layer and applied
/// between ticks.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewCommand {
    ZoomIn,
    ZoomOut,
    /// Move the focus by `dx`, `dy` pan steps. Positive `dy` moves down the screen.
    Pan { dx: f64, dy: f64 },
    Reset,
    CyclePalette,
}
