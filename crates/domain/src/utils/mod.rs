//! Pure domain utilities

pub mod week_grid;
