use crate::domain::Dimensions;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Up/Down move along y, or along z when the depth modifier is held
    pub const fn vertical(depth_selected: bool) -> Self {
        if depth_selected { Axis::Z } else { Axis::Y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Increase,
    Decrease,
}

impl Direction {
    const fn offset(self) -> isize {
        match self {
            Direction::Increase => 1,
            Direction::Decrease => -1,
        }
    }
}

/// Seed-placement cursor. Each axis wraps independently.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cursor {
    pub x: usize,
    pub y: usize,
    pub z: usize,
}

impl Cursor {
    pub const fn centered(dims: Dimensions) -> Self {
        let (x, y, z) = dims.center();
        Self { x, y, z }
    }

    /// Move one cell along `axis`, wrapping at the grid bounds
    pub const fn step(self, axis: Axis, direction: Direction, dims: Dimensions) -> Self {
        let offset = direction.offset();
        match axis {
            Axis::X => Self {
                x: Dimensions::wrap(self.x, offset, dims.columns),
                ..self
            },
            Axis::Y => Self {
                y: Dimensions::wrap(self.y, offset, dims.rows),
                ..self
            },
            Axis::Z => Self {
                z: Dimensions::wrap(self.z, offset, dims.aisles),
                ..self
            },
        }
    }

    pub const fn position(&self) -> (usize, usize, usize) {
        (self.x, self.y, self.z)
    }
}
