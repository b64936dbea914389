//! Event handling functions for player input and game state updates.

use std::io::{BufRead, Write};

use color_eyre::eyre::Result;
use log::{debug, info};

use crate::{
    error::CommandError,
    types::{Command, Direction, GameState, MoveOutcome},
    ui, App,
};

/// Reads the next command token from the input.
///
/// Each call consumes whole lines. The first non-whitespace character of a line is the token and
/// the rest of that line is discarded; blank lines are skipped. Bytes that are not valid UTF-8
/// read as the replacement character, which no command uses. Returns [`None`] once the input is
/// exhausted.
///
/// # Errors
///
/// - [`std::io::Error`]
pub(crate) fn read_token<R: BufRead>(input: &mut R) -> Result<Option<char>> {
    let mut buffer = Vec::new();

    loop {
        buffer.clear();
        if input.read_until(b'\n', &mut buffer)? == 0 {
            return Ok(None);
        }

        if let Some(token) = String::from_utf8_lossy(&buffer)
            .chars()
            .find(|character| !character.is_whitespace())
        {
            return Ok(Some(token));
        }
    }
}

/// Handles a single turn of input and updates the game state accordingly.
///
/// This function reads one command and dispatches it to the matching handler. Running out of
/// input counts as quitting.
///
/// # Errors
///
/// - [`std::io::Error`]
pub(crate) fn handle_events<R: BufRead, W: Write>(
    app: &mut App,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    let Some(token) = read_token(input)? else {
        debug!("input closed, quitting");
        // Keep the farewell off the prompt line.
        writeln!(out)?;
        return handle_quit(app, out);
    };

    match Command::try_from(token) {
        Ok(Command::Move(direction)) => handle_move(app, direction, out)?,
        Ok(Command::Map) => ui::map(out, &app.maze)?,
        Ok(Command::Help) => ui::help(out)?,
        Ok(Command::Quit) => handle_quit(app, out)?,
        Err(err) => handle_invalid(&err, out)?,
    }

    Ok(())
}

/// Handles movement commands.
///
/// Blocked moves are reported and leave the game running; reaching the exit ends it.
pub(crate) fn handle_move<W: Write>(
    app: &mut App,
    direction: Direction,
    out: &mut W,
) -> Result<()> {
    match app.maze.attempt_move(direction) {
        MoveOutcome::Blocked => ui::line(out, ui::BLOCKED)?,
        MoveOutcome::Moved => {}
        MoveOutcome::Won => {
            info!("player reached the exit");
            app.state = GameState::Won;
            ui::line(out, ui::WON)?;
        }
    }

    Ok(())
}

/// Handles the quit command and the end of input.
pub(crate) fn handle_quit<W: Write>(app: &mut App, out: &mut W) -> Result<()> {
    info!("player quit");
    app.state = GameState::Quit;
    ui::line(out, ui::QUIT)
}

/// Handles unrecognised tokens by reminding the player of the available commands.
pub(crate) fn handle_invalid<W: Write>(err: &CommandError, out: &mut W) -> Result<()> {
    debug!("{err}");
    ui::invalid(out, err)
}
