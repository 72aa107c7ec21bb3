mod camera;
mod config;
mod controller;
mod cursor;

pub use camera::Camera;
pub use config::SimConfig;
pub use controller::{Command, Controller, Mode, Status};
pub use cursor::{Axis, Cursor, Direction};
