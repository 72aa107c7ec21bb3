use super::{Axis, Cursor, Direction, SimConfig};
use crate::domain::{Algorithm, Cell, Grid};
use crate::error::Result;
use log::{debug, info, trace};
use rand::{SeedableRng, rngs::StdRng};
use std::ops::ControlFlow;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// The user is placing the initial seed
    Setting,
    Running,
    Paused,
}

/// Discrete commands issued by the input layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    MoveCursor { axis: Axis, direction: Direction },
    ToggleCell,
    Start,
    Pause,
    /// Start while setting, otherwise toggle pause
    StartOrPause,
    Reset,
    RandomSeed,
    Quit,
}

/// Snapshot of the controller for the HUD
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Status {
    pub mode: Mode,
    pub cursor: Cursor,
    pub generation: u64,
    pub population: usize,
}

/// Controller orchestrates the simulation.
/// Owns the grid, the mode state machine and the seed cursor; every
/// command and tick runs to completion before the next one.
pub struct Controller {
    grid: Grid,
    mode: Mode,
    cursor: Cursor,
    generation: u64,
    update_timer: f32,
    setting_fps: f32,
    running_fps: f32,
    density_threshold: u32,
    algorithm: Algorithm,
    rng: StdRng,
}

impl Controller {
    /// Validate the config and allocate the grid, starting in setting mode
    pub fn new(config: &SimConfig) -> Result<Self> {
        config.validate()?;
        let dims = config.dimensions()?;
        let grid = Grid::new(dims)?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        info!(
            "grid {}x{}x{} ({} cells), {} advance",
            dims.columns,
            dims.rows,
            dims.aisles,
            dims.cell_count(),
            config.algorithm.name()
        );

        Ok(Self {
            grid,
            mode: Mode::Setting,
            cursor: Cursor::centered(dims),
            generation: 0,
            update_timer: 0.0,
            setting_fps: config.setting_fps as f32,
            running_fps: config.running_fps as f32,
            density_threshold: config.density_threshold,
            algorithm: config.algorithm,
            rng,
        })
    }

    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    pub const fn mode(&self) -> Mode {
        self.mode
    }

    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub const fn generation(&self) -> u64 {
        self.generation
    }

    pub const fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Dispatch one command. Breaks only on `Quit`.
    pub fn apply(&mut self, command: Command) -> ControlFlow<()> {
        match command {
            Command::MoveCursor { axis, direction } => self.move_cursor(axis, direction),
            Command::ToggleCell => self.toggle_cell(),
            Command::Start => self.start(),
            Command::Pause => self.toggle_pause(),
            Command::StartOrPause => match self.mode {
                Mode::Setting => self.start(),
                Mode::Running | Mode::Paused => self.toggle_pause(),
            },
            Command::Reset => self.reset(),
            Command::RandomSeed => self.random_seed(),
            Command::Quit => {
                info!("quit requested at generation {}", self.generation);
                return ControlFlow::Break(());
            }
        }
        ControlFlow::Continue(())
    }

    /// Move the seed cursor one cell, wrapping at the bounds
    pub fn move_cursor(&mut self, axis: Axis, direction: Direction) {
        if self.mode != Mode::Setting {
            debug!("ignoring cursor move while {:?}", self.mode);
            return;
        }
        self.cursor = self.cursor.step(axis, direction, self.grid.dimensions());
    }

    /// Select or deselect the cell under the cursor
    pub fn toggle_cell(&mut self) {
        if self.mode != Mode::Setting {
            debug!("ignoring toggle while {:?}", self.mode);
            return;
        }
        let (x, y, z) = self.cursor.position();
        let toggled = if self.grid.get(x, y, z).is_selected() {
            Cell::Dead
        } else {
            Cell::UserSet
        };
        self.grid.set(x, y, z, toggled);
    }

    /// Hand the selected seed over to the simulation
    pub fn start(&mut self) {
        if self.mode != Mode::Setting {
            debug!("ignoring start while {:?}", self.mode);
            return;
        }
        self.grid.map_cells(Cell::committed);
        self.mode = Mode::Running;
        self.generation = 0;
        self.update_timer = 0.0;
        info!("simulation started with {} seed cells", self.grid.population());
    }

    /// Toggle between running and paused
    pub fn toggle_pause(&mut self) {
        self.mode = match self.mode {
            Mode::Running => Mode::Paused,
            Mode::Paused => Mode::Running,
            Mode::Setting => {
                debug!("ignoring pause while setting");
                return;
            }
        };
        info!("{:?} at generation {}", self.mode, self.generation);
    }

    /// Clear the grid and go back to placing a seed
    pub fn reset(&mut self) {
        self.grid.fill(Cell::Dead);
        self.enter_setting();
        info!("reset to setting mode");
    }

    /// Replace the grid with a random population and run it
    pub fn random_seed(&mut self) {
        self.grid.fill(Cell::Dead);
        self.grid.randomize(&mut self.rng, self.density_threshold);
        self.mode = Mode::Running;
        self.generation = 0;
        self.update_timer = 0.0;
        debug!("random seed with {} alive cells", self.grid.population());
    }

    /// Seconds between ticks in the current mode
    pub fn tick_interval(&self) -> f32 {
        match self.mode {
            Mode::Setting => 1.0 / self.setting_fps,
            Mode::Running | Mode::Paused => 1.0 / self.running_fps,
        }
    }

    /// Accumulate frame time and run at most one tick once the current
    /// mode's interval has elapsed. Returns whether a tick ran.
    pub fn update(&mut self, delta_time: f32) -> bool {
        self.update_timer += delta_time;
        if self.update_timer < self.tick_interval() {
            return false;
        }
        self.update_timer = 0.0;
        self.tick();
        true
    }

    /// One scheduled step: redraw the cursor while setting, advance one
    /// generation while running, nothing while paused.
    pub fn tick(&mut self) {
        match self.mode {
            Mode::Setting => self.render_cursor(),
            Mode::Running => {
                self.grid.advance_with(self.algorithm);
                self.generation += 1;
                trace!("generation {}: {} alive", self.generation, self.grid.population());
                self.restart_if_extinct();
            }
            Mode::Paused => {}
        }
    }

    /// Query pass for the renderer. Applies the extinction restart first.
    pub fn status(&mut self) -> Status {
        self.restart_if_extinct();
        Status {
            mode: self.mode,
            cursor: self.cursor,
            generation: self.generation,
            population: self.grid.population(),
        }
    }

    /// Rewrite setting-phase states so exactly the cell under the cursor
    /// carries a cursor state.
    fn render_cursor(&mut self) {
        let (x, y, z) = self.cursor.position();
        if self.grid.get(x, y, z) == Cell::CursorOnSet {
            return;
        }

        self.grid.map_cells(|cell| {
            if cell.is_selected() { Cell::UserSet } else { Cell::Dead }
        });
        let promoted = if self.grid.get(x, y, z) == Cell::UserSet {
            Cell::CursorOnSet
        } else {
            Cell::UserCursor
        };
        self.grid.set(x, y, z, promoted);
    }

    fn restart_if_extinct(&mut self) {
        if self.mode == Mode::Setting || !self.grid.is_extinct() {
            return;
        }
        info!("all cells died after {} generations", self.generation);
        self.enter_setting();
    }

    fn enter_setting(&mut self) {
        self.mode = Mode::Setting;
        self.cursor = Cursor::centered(self.grid.dimensions());
        self.generation = 0;
        self.update_timer = 0.0;
    }
}
