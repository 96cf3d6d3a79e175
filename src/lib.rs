//! Snake on a 20x20 wrap-around grid, rendered with macroquad.
//!
//! The rules live in [`game`] and know nothing about the window; [`app`]
//! wires them to the frame clock, the keyboard and the on-screen buttons.

pub mod app;
pub mod consts;
pub mod direction;
pub mod game;
pub mod grid;
pub mod input;
pub mod layout;
pub mod render;
pub mod settings;
pub mod ticker;
pub mod toast;

pub use app::App;
pub use direction::Direction;
pub use game::{CellIndex, CellSource, Game, Snapshot, StepOutcome};
pub use grid::Grid;
