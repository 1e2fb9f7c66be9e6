/// State of one square on the board. New grids start all `Dead`;
/// pointer edits flip a cell with [`Cell::toggle`].
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// Applying this twice gives back the original state
    pub const fn toggle(self) -> Self {
        match self {
            Cell::Alive => Cell::Dead,
            Cell::Dead => Cell::Alive,
        }
    }

    /// State in the next generation given the live count around the cell
    /// in the current one. Birth on 3, survival on 2 or 3.
    pub const fn evolve(self, neighbors: u8) -> Self {
        match (self, neighbors) {
            (_, 3) | (Cell::Alive, 2) => Cell::Alive,
            _ => Cell::Dead,
        }
    }
}
