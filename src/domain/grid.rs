use super::{Algorithm, Cell};
use crate::error::{Error, Result};
use rand::Rng;
use rayon::prelude::*;

/// `randomize` draws uniformly from `0..RANDOM_DRAW_RANGE` for every cell.
pub const RANDOM_DRAW_RANGE: u32 = 200;

/// Extent of the grid along each axis. Immutable once validated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    pub columns: usize,
    pub rows: usize,
    pub aisles: usize,
}

impl Dimensions {
    /// Validate dimensions: every axis non-empty and the cell count indexable
    pub fn new(columns: usize, rows: usize, aisles: usize) -> Result<Self> {
        if columns == 0 || rows == 0 || aisles == 0 {
            return Err(Error::InvalidDimensions { columns, rows, aisles });
        }
        columns
            .checked_mul(rows)
            .and_then(|n| n.checked_mul(aisles))
            .ok_or(Error::TooLarge { columns, rows, aisles })?;
        Ok(Self { columns, rows, aisles })
    }

    /// Total number of cells
    pub const fn cell_count(&self) -> usize {
        self.columns * self.rows * self.aisles
    }

    /// Convert 3D coordinates to a flat index (x fastest, then y, then z).
    /// Coordinates must already be inside the grid.
    pub const fn index(&self, x: usize, y: usize, z: usize) -> usize {
        debug_assert!(x < self.columns && y < self.rows && z < self.aisles);
        (z * self.rows + y) * self.columns + x
    }

    /// Inverse of [`Dimensions::index`]
    pub const fn coords(&self, index: usize) -> (usize, usize, usize) {
        let x = index % self.columns;
        let rest = index / self.columns;
        (x, rest % self.rows, rest / self.rows)
    }

    /// Geometric center, rounded down on every axis
    pub const fn center(&self) -> (usize, usize, usize) {
        (self.columns / 2, self.rows / 2, self.aisles / 2)
    }

    /// Move `coord` by `offset` along an axis of length `extent`, wrapping
    /// at both ends (toroidal topology).
    pub const fn wrap(coord: usize, offset: isize, extent: usize) -> usize {
        (coord as isize + offset).rem_euclid(extent as isize) as usize
    }
}

/// Grid is the authoritative store of cell state.
/// Holds the current generation plus a scratch buffer of the same size that
/// the next generation is written into before the two are swapped.
pub struct Grid {
    dims: Dimensions,
    cells: Vec<Cell>,
    scratch: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead.
    /// Both buffers are allocated up front; nothing allocates after this.
    pub fn new(dims: Dimensions) -> Result<Self> {
        Ok(Self {
            dims,
            cells: allocate(dims.cell_count())?,
            scratch: allocate(dims.cell_count())?,
        })
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> Dimensions {
        self.dims
    }

    /// Get cell at a (pre-wrapped) position
    pub fn get(&self, x: usize, y: usize, z: usize) -> Cell {
        self.cells[self.dims.index(x, y, z)]
    }

    /// Set cell at a (pre-wrapped) position
    pub fn set(&mut self, x: usize, y: usize, z: usize, cell: Cell) {
        let idx = self.dims.index(x, y, z);
        self.cells[idx] = cell;
    }

    /// Set every cell to the same state
    pub fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Independently make each cell Alive when a draw from
    /// `0..RANDOM_DRAW_RANGE` exceeds `threshold`, Dead otherwise.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R, threshold: u32) {
        self.cells.iter_mut().for_each(|cell| {
            *cell = if rng.random_range(0..RANDOM_DRAW_RANGE) > threshold {
                Cell::Alive
            } else {
                Cell::Dead
            };
        });
    }

    /// Rewrite every cell through `f`
    pub fn map_cells(&mut self, mut f: impl FnMut(Cell) -> Cell) {
        self.cells.iter_mut().for_each(|cell| *cell = f(*cell));
    }

    /// Count live neighbors in the 26-cell Moore neighborhood, wrapping
    /// every axis independently
    pub fn count_alive_neighbors(&self, x: usize, y: usize, z: usize) -> u8 {
        count_alive_in(&self.cells, self.dims, x, y, z)
    }

    /// Advance one generation with the default algorithm
    pub fn advance(&mut self) {
        self.advance_with(Algorithm::default());
    }

    /// Compute the next generation from the current snapshot into the
    /// scratch buffer, then swap the buffers.
    pub fn advance_with(&mut self, algorithm: Algorithm) {
        let dims = self.dims;
        let current = &self.cells;
        let next_state = |idx: usize| {
            let (x, y, z) = dims.coords(idx);
            current[idx].evolve(count_alive_in(current, dims, x, y, z))
        };

        match algorithm {
            Algorithm::Serial => self
                .scratch
                .iter_mut()
                .enumerate()
                .for_each(|(idx, next)| *next = next_state(idx)),
            Algorithm::Parallel => self
                .scratch
                .par_iter_mut()
                .enumerate()
                .for_each(|(idx, next)| *next = next_state(idx)),
        }

        std::mem::swap(&mut self.cells, &mut self.scratch);
    }

    /// Number of cells that count as alive
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// True when every cell is exactly `Dead`
    pub fn is_extinct(&self) -> bool {
        self.cells.iter().all(|&cell| cell == Cell::Dead)
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, usize, Cell)> + '_ {
        self.cells.iter().enumerate().map(|(idx, &cell)| {
            let (x, y, z) = self.dims.coords(idx);
            (x, y, z, cell)
        })
    }
}

fn allocate(cells: usize) -> Result<Vec<Cell>> {
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(cells)
        .map_err(|source| Error::Allocation { cells, source })?;
    buffer.resize(cells, Cell::Dead);
    Ok(buffer)
}

/// Every one of the 26 offsets is visited; on axes shorter than three the
/// same cell can be reached more than once and is counted each time.
fn count_alive_in(cells: &[Cell], dims: Dimensions, x: usize, y: usize, z: usize) -> u8 {
    (-1..=1)
        .flat_map(|dz| (-1..=1).flat_map(move |dy| (-1..=1).map(move |dx| (dx, dy, dz))))
        .filter(|&(dx, dy, dz)| dx != 0 || dy != 0 || dz != 0)
        .map(|(dx, dy, dz)| {
            let nx = Dimensions::wrap(x, dx, dims.columns);
            let ny = Dimensions::wrap(y, dy, dims.rows);
            let nz = Dimensions::wrap(z, dz, dims.aisles);
            cells[dims.index(nx, ny, nz)]
        })
        .filter(|cell| cell.is_alive())
        .count() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn grid(columns: usize, rows: usize, aisles: usize) -> Grid {
        Grid::new(Dimensions::new(columns, rows, aisles).unwrap()).unwrap()
    }

    /// Neighbors of `center`, in a fixed order
    fn neighbors_of(center: (usize, usize, usize)) -> Vec<(usize, usize, usize)> {
        let (cx, cy, cz) = center;
        let mut out = Vec::new();
        for dz in 0..3 {
            for dy in 0..3 {
                for dx in 0..3 {
                    if (dx, dy, dz) != (1, 1, 1) {
                        out.push((cx + dx - 1, cy + dy - 1, cz + dz - 1));
                    }
                }
            }
        }
        out
    }

    #[test]
    fn test_rejects_empty_axis() {
        assert!(matches!(
            Dimensions::new(4, 0, 4),
            Err(Error::InvalidDimensions { rows: 0, .. })
        ));
        assert!(Dimensions::new(0, 1, 1).is_err());
        assert!(Dimensions::new(1, 1, 0).is_err());
    }

    #[test]
    fn test_rejects_overflowing_cell_count() {
        assert!(matches!(
            Dimensions::new(usize::MAX, 2, 1),
            Err(Error::TooLarge { .. })
        ));
    }

    #[test]
    fn test_index_layout() {
        let dims = Dimensions::new(4, 3, 2).unwrap();
        assert_eq!(dims.index(0, 0, 0), 0);
        assert_eq!(dims.index(1, 0, 0), 1);
        assert_eq!(dims.index(0, 1, 0), 4);
        assert_eq!(dims.index(0, 0, 1), 12);
        assert_eq!(dims.index(3, 2, 1), 23);
        assert_eq!(dims.coords(23), (3, 2, 1));
        assert_eq!(dims.coords(13), (1, 0, 1));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic]
    fn test_index_rejects_coordinate_past_axis() {
        let dims = Dimensions::new(5, 5, 5).unwrap();
        let _ = dims.index(5, 0, 0);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic]
    fn test_get_rejects_coordinate_past_axis() {
        let g = grid(5, 5, 5);
        let _ = g.get(0, 0, 5);
    }

    #[test]
    fn test_wrap() {
        assert_eq!(Dimensions::wrap(0, -1, 5), 4);
        assert_eq!(Dimensions::wrap(4, 1, 5), 0);
        assert_eq!(Dimensions::wrap(2, 1, 5), 3);
        assert_eq!(Dimensions::wrap(0, -1, 1), 0);
    }

    #[test]
    fn test_center() {
        let dims = Dimensions::new(37, 25, 37).unwrap();
        assert_eq!(dims.center(), (18, 12, 18));
    }

    #[test]
    fn test_new_grid_is_dead() {
        let g = grid(3, 4, 5);
        assert_eq!(g.iter_cells().count(), 60);
        assert!(g.is_extinct());
        assert_eq!(g.population(), 0);
    }

    #[test]
    fn test_set_and_get() {
        let mut g = grid(4, 4, 4);
        g.set(1, 2, 3, Cell::UserSet);
        assert_eq!(g.get(1, 2, 3), Cell::UserSet);
        assert_eq!(g.get(3, 2, 1), Cell::Dead);
        assert!(!g.is_extinct());
    }

    #[test]
    fn test_fill() {
        let mut g = grid(3, 3, 3);
        g.fill(Cell::Alive);
        assert_eq!(g.population(), 27);
        g.fill(Cell::Dead);
        assert!(g.is_extinct());
    }

    #[test]
    fn test_iter_cells_reports_positions() {
        let mut g = grid(2, 3, 4);
        g.set(1, 2, 3, Cell::Alive);
        let alive: Vec<_> = g.iter_cells().filter(|(_, _, _, c)| c.is_alive()).collect();
        assert_eq!(alive, vec![(1, 2, 3, Cell::Alive)]);
    }

    #[test]
    fn test_toroidal_wrap() {
        let mut g = grid(4, 4, 4);
        g.set(0, 0, 0, Cell::Alive);
        assert_eq!(g.count_alive_neighbors(3, 3, 3), 1);
        assert_eq!(g.count_alive_neighbors(3, 0, 1), 1);
        assert_eq!(g.count_alive_neighbors(2, 2, 2), 0);
        assert_eq!(g.count_alive_neighbors(1, 1, 1), 1);
    }

    #[test]
    fn test_wrap_on_three_wide_grid() {
        let mut g = grid(3, 3, 3);
        g.set(0, 0, 0, Cell::Alive);
        assert_eq!(g.count_alive_neighbors(2, 2, 2), 1);
    }

    #[test]
    fn test_self_excluded() {
        let mut g = grid(5, 5, 5);
        g.set(2, 2, 2, Cell::Alive);
        assert_eq!(g.count_alive_neighbors(2, 2, 2), 0);
    }

    #[test]
    fn test_full_neighborhood() {
        let mut g = grid(5, 5, 5);
        for (x, y, z) in neighbors_of((2, 2, 2)) {
            g.set(x, y, z, Cell::Alive);
        }
        assert_eq!(g.count_alive_neighbors(2, 2, 2), 26);
    }

    #[test]
    fn test_cursor_is_not_counted() {
        let mut g = grid(5, 5, 5);
        g.set(1, 2, 2, Cell::UserCursor);
        g.set(3, 2, 2, Cell::UserSet);
        assert_eq!(g.count_alive_neighbors(2, 2, 2), 1);
    }

    #[test]
    fn test_single_cell_grid_counts_every_visit() {
        let mut g = grid(1, 1, 1);
        g.set(0, 0, 0, Cell::Alive);
        assert_eq!(g.count_alive_neighbors(0, 0, 0), 26);
    }

    fn center_after_advance(center: Cell, alive_neighbors: usize) -> Cell {
        let mut g = grid(5, 5, 5);
        g.set(2, 2, 2, center);
        for (x, y, z) in neighbors_of((2, 2, 2)).into_iter().take(alive_neighbors) {
            g.set(x, y, z, Cell::Alive);
        }
        assert_eq!(g.count_alive_neighbors(2, 2, 2) as usize, alive_neighbors);
        g.advance();
        g.get(2, 2, 2)
    }

    #[test]
    fn test_rule_survival() {
        assert_eq!(center_after_advance(Cell::Alive, 4), Cell::Dead);
        assert_eq!(center_after_advance(Cell::Alive, 5), Cell::Alive);
        assert_eq!(center_after_advance(Cell::Alive, 6), Cell::Alive);
        assert_eq!(center_after_advance(Cell::Alive, 7), Cell::Alive);
        assert_eq!(center_after_advance(Cell::Alive, 8), Cell::Dead);
    }

    #[test]
    fn test_rule_birth() {
        assert_eq!(center_after_advance(Cell::Dead, 5), Cell::Dead);
        assert_eq!(center_after_advance(Cell::Dead, 6), Cell::Alive);
        assert_eq!(center_after_advance(Cell::Dead, 7), Cell::Dead);
    }

    #[test]
    fn test_seed_state_center_dies_on_advance() {
        assert_eq!(center_after_advance(Cell::UserCursor, 6), Cell::Dead);
        assert_eq!(center_after_advance(Cell::UserSet, 5), Cell::Dead);
        assert_eq!(center_after_advance(Cell::CursorOnSet, 6), Cell::Dead);
    }

    #[test]
    fn test_advance_reads_only_previous_generation() {
        // A = (3,3,3) is dead with 6 neighbors; B = (4,3,3) comes right after it
        // in scan order and is alive with 7. Updating in place would make A
        // alive before B is visited, pushing B to 8 and killing it.
        let mut g = grid(7, 7, 7);
        let alive = [
            (4, 3, 3),
            (3, 2, 3),
            (3, 4, 3),
            (4, 2, 3),
            (4, 4, 3),
            (3, 3, 2),
            (5, 3, 3),
            (5, 2, 3),
        ];
        for (x, y, z) in alive {
            g.set(x, y, z, Cell::Alive);
        }
        assert_eq!(g.count_alive_neighbors(3, 3, 3), 6);
        assert_eq!(g.count_alive_neighbors(4, 3, 3), 7);

        for algorithm in Algorithm::all() {
            let mut run = grid(7, 7, 7);
            for (x, y, z) in alive {
                run.set(x, y, z, Cell::Alive);
            }
            run.advance_with(algorithm);
            assert_eq!(run.get(3, 3, 3), Cell::Alive, "{}", algorithm.name());
            assert_eq!(run.get(4, 3, 3), Cell::Alive, "{}", algorithm.name());
        }
    }

    #[test]
    fn test_advance_matches_snapshot_evaluation() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut g = grid(9, 8, 7);
        g.randomize(&mut rng, 120);

        let expected: Vec<Cell> = g
            .iter_cells()
            .map(|(x, y, z, cell)| cell.evolve(g.count_alive_neighbors(x, y, z)))
            .collect();

        g.advance_with(Algorithm::Serial);
        let actual: Vec<Cell> = g.iter_cells().map(|(_, _, _, cell)| cell).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_serial_and_parallel_agree() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut serial = grid(12, 10, 8);
        serial.randomize(&mut rng, 150);
        let mut parallel = grid(12, 10, 8);
        for (x, y, z, cell) in serial.iter_cells() {
            parallel.set(x, y, z, cell);
        }

        for _ in 0..5 {
            serial.advance_with(Algorithm::Serial);
            parallel.advance_with(Algorithm::Parallel);
        }
        assert!(serial.iter_cells().eq(parallel.iter_cells()));
    }

    #[test]
    fn test_lonely_cell_dies() {
        let mut g = grid(5, 5, 5);
        g.set(2, 2, 2, Cell::Alive);
        g.advance();
        assert!(g.is_extinct());
    }

    #[test]
    fn test_randomize_density() {
        let mut rng = StdRng::seed_from_u64(2024);
        let mut g = grid(25, 20, 20);
        g.randomize(&mut rng, 175);
        let fraction = g.population() as f64 / g.dimensions().cell_count() as f64;
        assert!((0.10..0.15).contains(&fraction), "alive fraction {fraction}");
        assert!(g.iter_cells().all(|(_, _, _, c)| matches!(c, Cell::Alive | Cell::Dead)));
    }

    #[test]
    fn test_randomize_threshold_at_top_of_range_kills_everything() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut g = grid(10, 10, 10);
        g.fill(Cell::Alive);
        g.randomize(&mut rng, RANDOM_DRAW_RANGE - 1);
        assert!(g.is_extinct());
    }

    #[test]
    fn test_randomize_is_reproducible_with_seed() {
        let mut a = grid(10, 10, 10);
        let mut b = grid(10, 10, 10);
        a.randomize(&mut StdRng::seed_from_u64(99), 175);
        b.randomize(&mut StdRng::seed_from_u64(99), 175);
        assert!(a.iter_cells().eq(b.iter_cells()));
    }

    #[test]
    fn test_map_cells() {
        let mut g = grid(3, 3, 3);
        g.set(0, 0, 0, Cell::UserSet);
        g.set(1, 0, 0, Cell::UserCursor);
        g.map_cells(Cell::committed);
        assert_eq!(g.get(0, 0, 0), Cell::Alive);
        assert_eq!(g.get(1, 0, 0), Cell::Dead);
        assert_eq!(g.population(), 1);
    }
}
