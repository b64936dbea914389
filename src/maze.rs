//! Maze data and movement module.
//!
//! This module contains the `Maze` struct, which owns the character grid together with the start
//! and exit coordinates, and the operations to parse, validate, render and walk it.

use log::{debug, trace};

use crate::{
    error::MazeError,
    types::{Direction, MoveOutcome, Position},
};

/// Smallest allowed number of rows or columns.
pub const MIN_SIDE: usize = 5;

/// Largest allowed number of rows or columns.
pub const MAX_SIDE: usize = 100;

/// Cell character that blocks movement.
pub const WALL: char = '#';

/// Cell character marking where the player starts.
pub const START: char = 'S';

/// Cell character marking the exit.
pub const EXIT: char = 'E';

/// Glyph drawn over the player's cell when rendering; never stored in the grid.
pub const PLAYER: char = 'X';

/// Rectangular labyrinth with a player walking through it.
///
/// The grid is stored exactly as read. The player position starts on the start marker and is the
/// only part of the maze that changes once it has been loaded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    /// Cells of the maze, one vector per row.
    grid: Vec<Vec<char>>,
    /// Number of columns shared by every row.
    width: usize,
    /// Number of rows.
    height: usize,
    /// Current position of the player, unset until a start marker is found.
    player: Option<Position>,
    /// Position of the exit, unset until an exit marker is found.
    exit: Option<Position>,
}

impl Maze {
    /// Builds a maze from multiline text, one grid row per line.
    ///
    /// The first line fixes the width of the maze and every following line must match it. Both
    /// `\n` and `\r\n` line endings are stripped. The grid is then scanned row by row for the
    /// start and exit markers; when a marker appears several times, the last one scanned wins.
    ///
    /// # Errors
    ///
    /// - [`MazeError::Empty`] if the text has no lines.
    /// - [`MazeError::Shape`] if a line differs in length from the first one.
    pub fn parse(data: &str) -> Result<Self, MazeError> {
        let mut grid: Vec<Vec<char>> = Vec::new();
        let mut width = 0;

        for (row, line) in data.lines().enumerate() {
            let cells: Vec<char> = line.chars().collect();

            if row == 0 {
                width = cells.len();
            } else if cells.len() != width {
                return Err(MazeError::Shape {
                    row,
                    expected: width,
                    found: cells.len(),
                });
            }

            grid.push(cells);
        }

        if grid.is_empty() {
            return Err(MazeError::Empty);
        }

        let mut player = None;
        let mut exit = None;
        for (row, cells) in grid.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                match *cell {
                    START => player = Some(Position::new(row, col)),
                    EXIT => exit = Some(Position::new(row, col)),
                    _ => {}
                }
            }
        }

        let height = grid.len();
        debug!("parsed {width}x{height} maze, start at {player:?}, exit at {exit:?}");

        Ok(Self {
            grid,
            width,
            height,
            player,
            exit,
        })
    }

    /// Checks that the maze is playable.
    ///
    /// Checks run in a fixed order and the first failing one is reported: the dimensions, then the
    /// start marker, then the exit marker.
    ///
    /// # Errors
    ///
    /// - [`MazeError::Size`] if either dimension lies outside [`MIN_SIDE`]..=[`MAX_SIDE`].
    /// - [`MazeError::MissingStart`] if no start marker was found.
    /// - [`MazeError::MissingExit`] if no exit marker was found.
    pub fn validate(&self) -> Result<(), MazeError> {
        let allowed = MIN_SIDE..=MAX_SIDE;
        if !allowed.contains(&self.width) || !allowed.contains(&self.height) {
            return Err(MazeError::Size {
                width: self.width,
                height: self.height,
            });
        }

        if self.player.is_none() {
            return Err(MazeError::MissingStart);
        }

        if self.exit.is_none() {
            return Err(MazeError::MissingExit);
        }

        Ok(())
    }

    /// Renders the grid as text, one newline-terminated line per row.
    ///
    /// With `show_player` set, the player's cell is drawn as [`PLAYER`] instead of its stored
    /// character. Start and exit markers elsewhere are drawn as stored.
    pub fn render(&self, show_player: bool) -> String {
        let overlay = self.player.filter(|_| show_player);
        let mut out = String::with_capacity(self.height * (self.width + 1));

        for (row, cells) in self.grid.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                if overlay == Some(Position::new(row, col)) {
                    out.push(PLAYER);
                } else {
                    out.push(*cell);
                }
            }
            out.push('\n');
        }

        out
    }

    /// Tries to move the player one cell in the given direction.
    ///
    /// Moves that would leave the grid or land on a [`WALL`] are rejected and leave the player
    /// where it was. Any other cell, start and exit markers included, counts as open floor.
    pub fn attempt_move(&mut self, direction: Direction) -> MoveOutcome {
        let Some(current) = self.player else {
            return MoveOutcome::Blocked;
        };

        let Some(target) = current
            .step(direction)
            .filter(|target| self.cell(*target).is_some_and(|cell| cell != WALL))
        else {
            trace!("blocked moving {direction:?} from {current:?}");
            return MoveOutcome::Blocked;
        };

        self.player = Some(target);
        trace!("moved {direction:?} to {target:?}");

        if self.exit == Some(target) {
            MoveOutcome::Won
        } else {
            MoveOutcome::Moved
        }
    }

    /// Returns the stored character at a position, or [`None`] if it lies outside the grid.
    pub fn cell(&self, position: Position) -> Option<char> {
        self.grid
            .get(position.row)
            .and_then(|cells| cells.get(position.col))
            .copied()
    }

    /// Number of columns.
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Current player position.
    pub const fn player(&self) -> Option<Position> {
        self.player
    }

    /// Exit position.
    pub const fn exit(&self) -> Option<Position> {
        self.exit
    }
}
