//! File loading utilities for maze files.

use std::{fs, path::Path};

use log::{debug, info};

use crate::{error::MazeError, maze::Maze};

/// Reads a maze file from disk and parses it.
///
/// The whole file is read in one go and the handle is released before parsing starts, so no file
/// stays open past this call regardless of the outcome. Validation is left to the caller.
///
/// # Errors
///
/// - [`MazeError::NotFound`] if the file is missing or unreadable, including when it is not valid
///   UTF-8.
/// - Any error returned by [`Maze::parse`].
pub(crate) fn load(path: &Path) -> Result<Maze, MazeError> {
    debug!("reading maze file {}", path.display());

    let contents = fs::read_to_string(path).map_err(|source| MazeError::NotFound {
        path: path.to_path_buf(),
        source,
    })?;
    let maze = Maze::parse(&contents)?;

    info!(
        "loaded {}x{} maze from {}",
        maze.width(),
        maze.height(),
        path.display()
    );

    Ok(maze)
}

/// Loads a maze file and checks that it can be played.
///
/// # Errors
///
/// Any error returned by [`load`] or [`Maze::validate`].
pub(crate) fn load_playable(path: &Path) -> Result<Maze, MazeError> {
    let maze = load(path)?;
    maze.validate()?;

    Ok(maze)
}
