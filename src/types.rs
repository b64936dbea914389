//! Type definitions and enums for the game state, commands and movement.

use crate::error::CommandError;

/// Enumeration of the states the game loop can be in.
///
/// Loading happens before an [`App`](crate::App) exists, so the loop always starts in
/// [`Playing`](GameState::Playing). Both other states are terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameState {
    /// The player is still walking the maze.
    Playing,
    /// The player stepped onto the exit cell.
    Won,
    /// The player asked to quit, or the input ran out.
    Quit,
}

impl GameState {
    /// Returns whether the game loop should stop in this state.
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Quit)
    }
}

/// Cell coordinates within the maze grid.
///
/// Coordinates are zero-based and unsigned, so a position can never point above or to the left of
/// the grid. Bounds on the other two sides are checked against the maze dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    /// Zero-based row index, counted from the top of the grid.
    pub row: usize,
    /// Zero-based column index, counted from the left of the grid.
    pub col: usize,
}

impl Position {
    /// Builds a new position from a row and a column.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the neighbouring position in the given direction.
    ///
    /// This function returns [`None`] when the step would leave the grid through its top or left
    /// edge. Steps past the bottom or right edge are left for the caller to check, as those
    /// depend on the maze dimensions.
    pub fn step(self, direction: Direction) -> Option<Self> {
        match direction {
            Direction::Up => self.row.checked_sub(1).map(|row| Self::new(row, self.col)),
            Direction::Down => self.row.checked_add(1).map(|row| Self::new(row, self.col)),
            Direction::Left => self.col.checked_sub(1).map(|col| Self::new(self.row, col)),
            Direction::Right => self.col.checked_add(1).map(|col| Self::new(self.row, col)),
        }
    }
}

/// One of the four directions the player can walk in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Towards the previous row.
    Up,
    /// Towards the next row.
    Down,
    /// Towards the previous column.
    Left,
    /// Towards the next column.
    Right,
}

/// Result of a single movement attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The target cell was a wall or outside the grid; the player did not move.
    Blocked,
    /// The player moved onto an open cell that is not the exit.
    Moved,
    /// The player moved onto the exit cell.
    Won,
}

/// Command entered by the player for a single turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Command {
    /// Walk one cell in a direction (`w`, `a`, `s`, `d`).
    Move(Direction),
    /// Print the maze with the player overlaid (`m`).
    Map,
    /// Print the command summary (`h`).
    Help,
    /// Leave the game (`q`).
    Quit,
}

impl TryFrom<char> for Command {
    type Error = CommandError;

    fn try_from(token: char) -> Result<Self, Self::Error> {
        match token.to_ascii_lowercase() {
            'w' => Ok(Self::Move(Direction::Up)),
            'a' => Ok(Self::Move(Direction::Left)),
            's' => Ok(Self::Move(Direction::Down)),
            'd' => Ok(Self::Move(Direction::Right)),
            'm' => Ok(Self::Map),
            'h' => Ok(Self::Help),
            'q' => Ok(Self::Quit),
            _ => Err(CommandError::Invalid(token)),
        }
    }
}
