mod algorithm;
mod cell;
mod grid;

pub use algorithm::Algorithm;
pub use cell::Cell;
pub use grid::{Dimensions, Grid, RANDOM_DRAW_RANGE};
