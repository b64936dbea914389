//! Error types for maze loading, validation and command parsing.

use std::{io, path::PathBuf};

use thiserror::Error;

use crate::maze::{MAX_SIDE, MIN_SIDE};

/// Errors that keep a maze from being loaded or played.
///
/// Every variant is fatal to the game: no partially loaded maze is ever handed to the game loop.
#[derive(Debug, Error)]
pub enum MazeError {
    /// The maze file is missing or could not be read.
    #[error("unable to find the file {}", path.display())]
    NotFound {
        /// Path that was handed to the loader.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// A row does not share the width of the first row.
    #[error("the maze is not rectangular (row {row} has {found} columns, expected {expected})")]
    Shape {
        /// Zero-based index of the offending row.
        row: usize,
        /// Width fixed by the first row.
        expected: usize,
        /// Width of the offending row.
        found: usize,
    },
    /// The maze source contained no rows at all.
    #[error("the maze is empty")]
    Empty,
    /// The maze dimensions fall outside the allowed range.
    #[error(
        "the maze size must be between {min}x{min} and {max}x{max}, found {width}x{height}",
        min = MIN_SIDE,
        max = MAX_SIDE
    )]
    Size {
        /// Number of columns.
        width: usize,
        /// Number of rows.
        height: usize,
    },
    /// No start marker was found in the grid.
    #[error("the maze must contain a starting point (S)")]
    MissingStart,
    /// No exit marker was found in the grid.
    #[error("the maze must contain an exit point (E)")]
    MissingExit,
}

/// Errors raised while interpreting a single turn's input.
///
/// These never end the game; the loop reports them to the player and asks for another command.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    /// The token does not name any known command.
    #[error("invalid command '{0}'")]
    Invalid(char),
}
