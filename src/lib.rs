// Domain layer - grid store and the fixed rule
pub mod domain;

// Application layer - simulation controller and configuration
pub mod application;

pub mod error;

// Infrastructure layer - rendering, input
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Algorithm, Cell, Dimensions, Grid};
pub use application::{Axis, Camera, Command, Controller, Cursor, Direction, Mode, SimConfig, Status};
pub use error::{Error, Result};
