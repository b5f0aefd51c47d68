pub mod grid;
pub mod theme;

pub use grid::{grid_widget, skeleton_slot_count, GridDisplay, GRID_COLUMNS};
