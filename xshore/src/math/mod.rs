mod grid;
mod trapezoid;

pub use {
    grid::{linspace, step_grid, validate_spacing},
    trapezoid::split_trapezoid,
};
