//! Startup error types.
//!
//! Once a [`Controller`](crate::Controller) exists the simulation is
//! infallible; everything here is raised while validating configuration or
//! allocating the grid.

use std::collections::TryReserveError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Every axis of the grid must hold at least one cell.
    #[error("grid dimensions must be positive, got {columns}x{rows}x{aisles}")]
    InvalidDimensions {
        columns: usize,
        rows: usize,
        aisles: usize,
    },

    /// The cell count does not fit in `usize`.
    #[error("grid of {columns}x{rows}x{aisles} cells is too large to index")]
    TooLarge {
        columns: usize,
        rows: usize,
        aisles: usize,
    },

    /// The current or next-generation buffer could not be allocated.
    #[error("could not allocate a buffer of {cells} cells")]
    Allocation {
        cells: usize,
        #[source]
        source: TryReserveError,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to read config file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
