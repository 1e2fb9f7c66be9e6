mod cell;
mod grid;
pub mod rules;

pub use cell::Cell;
pub use grid::Grid;
pub use rules::{step, step_into};
