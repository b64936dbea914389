//! Core game state and loop for the maze game.

use std::{
    io::{BufRead, Write},
    path::Path,
};

use color_eyre::eyre::Result;
use log::debug;

use crate::{error::MazeError, events, file_loader, maze::Maze, types::GameState, ui};

/// Game state container for a single run through a maze.
///
/// This structure owns the maze being played and the state of the game loop. It is the only owner
/// of the maze, so every move goes through it.
#[derive(Debug)]
pub struct App {
    /// Current state of the game loop.
    ///
    /// This field starts off as [`GameState::Playing`] and the loop stops as soon as it holds a
    /// terminal state.
    pub(crate) state: GameState,
    /// Maze being played.
    ///
    /// This field holds the grid and the player position, which is the only part that changes
    /// while the game runs.
    pub(crate) maze: Maze,
}

impl App {
    /// Creates a new game for an already loaded maze.
    ///
    /// The maze is expected to have passed [`Maze::validate`]. A maze without a start marker is
    /// still accepted, but every move in it is blocked.
    pub const fn new(maze: Maze) -> Self {
        Self {
            state: GameState::Playing,
            maze,
        }
    }

    /// Loads and validates a maze file, then creates a new game for it.
    ///
    /// # Errors
    ///
    /// Any [`MazeError`] raised while loading or validating the file.
    pub fn load(path: &Path) -> Result<Self, MazeError> {
        let maze = file_loader::load_playable(path)?;

        Ok(Self::new(maze))
    }

    /// Runs the main loop of the game.
    ///
    /// This function greets the player, then prompts for and handles one command per iteration
    /// until the player wins, quits or the input runs out. The final state is returned to the call
    /// site.
    ///
    /// # Errors
    ///
    /// - [`std::io::Error`]
    pub fn run<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> Result<GameState> {
        ui::line(out, ui::LOADED)?;
        ui::help(out)?;

        while !self.state.is_terminal() {
            ui::prompt(out)?;
            events::handle_events(self, input, out)?;
        }

        debug!("game loop finished in state {:?}", self.state);

        Ok(self.state)
    }

    /// Current state of the game loop.
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Maze being played.
    pub const fn maze(&self) -> &Maze {
        &self.maze
    }
}
