/// Cell represents the fundamental unit of the 3D grid.
/// `Dead` and `Alive` are simulation states; the other three only exist
/// while the user is placing the initial seed.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
    /// Selected as part of the seed, cursor elsewhere
    UserSet,
    /// Cursor resting on an unselected cell
    UserCursor,
    /// Cursor resting on a selected cell
    CursorOnSet,
}

impl Cell {
    /// Check if the cell counts as alive for neighbor counting.
    /// Selected seed cells count; a bare cursor does not.
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive | Cell::UserSet | Cell::CursorOnSet)
    }

    /// Check if the cell is part of the user's seed selection
    pub const fn is_selected(self) -> bool {
        matches!(self, Cell::UserSet | Cell::CursorOnSet)
    }

    /// State of the cell once the seed is handed over to the simulation
    pub const fn committed(self) -> Self {
        if self.is_alive() { Cell::Alive } else { Cell::Dead }
    }

    /// Pure function to compute the next state:
    /// 1. Live cell with 5-7 neighbors survives
    /// 2. Dead cell with exactly 6 neighbors becomes alive
    /// 3. All other cases result in death, including every seed state
    pub const fn evolve(self, neighbors: u8) -> Self {
        match (self, neighbors) {
            (Cell::Alive, 5..=7) => Cell::Alive,
            (Cell::Dead, 6) => Cell::Alive,
            _ => Cell::Dead,
        }
    }
}
