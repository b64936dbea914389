//! This crate contains the maze model and the game loop for the terminal game mazerun.
//!
//! A maze is a rectangular text grid read from a file, where `#` marks walls, `S` the start and
//! `E` the exit. The player walks it one cell per command until reaching the exit or quitting.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]

mod app;
mod cli;
mod error;
mod events;
mod file_loader;
mod maze;
mod types;
mod ui;

pub use app::App;
pub use cli::{run, run_from};
pub use error::{CommandError, MazeError};
pub use maze::{Maze, EXIT, MAX_SIDE, MIN_SIDE, PLAYER, START, WALL};
pub use types::{Direction, GameState, MoveOutcome, Position};
