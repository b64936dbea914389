//! Text rendering functions for everything the game prints to the player.

use std::io::Write;

use color_eyre::eyre::Result;

use crate::{error::CommandError, maze::Maze};

/// Greeting printed once the maze has loaded and validated.
pub(crate) const LOADED: &str = "The maze is loaded successfully!";

/// Prompt printed before every command read.
pub(crate) const PROMPT: &str = "Please enter a command: ";

/// Feedback for a move into a wall or off the grid.
pub(crate) const BLOCKED: &str = "Cannot move to this position!";

/// Message printed when the player reaches the exit.
pub(crate) const WON: &str = "Congratulations! You have reached the exit!";

/// Message printed when the game ends without a win.
pub(crate) const QUIT: &str = "The game is exiting.";

/// Command summary shown on start, on request and after an invalid command.
static HELP: &str = "\
Commands:
  W - Move up
  A - Move left
  S - Move down
  D - Move right
  M - View map
  H - Show help
  Q - Quit game";

/// Prints a single line of text.
pub(crate) fn line<W: Write>(out: &mut W, text: &str) -> Result<()> {
    writeln!(out, "{text}")?;

    Ok(())
}

/// Prints the command prompt and flushes it so it shows before input is read.
pub(crate) fn prompt<W: Write>(out: &mut W) -> Result<()> {
    write!(out, "{PROMPT}")?;
    out.flush()?;

    Ok(())
}

/// Prints the command summary block.
pub(crate) fn help<W: Write>(out: &mut W) -> Result<()> {
    line(out, HELP)
}

/// Reports an unrecognised command followed by the command summary.
pub(crate) fn invalid<W: Write>(out: &mut W, err: &CommandError) -> Result<()> {
    let CommandError::Invalid(token) = err;
    writeln!(out, "Invalid command '{token}'.")?;
    help(out)
}

/// Prints the maze with the player drawn over its current cell.
pub(crate) fn map<W: Write>(out: &mut W, maze: &Maze) -> Result<()> {
    write!(out, "{}", maze.render(true))?;

    Ok(())
}
