//! Command-line entry point: argument parsing, logging setup and the game session.

use std::{
    ffi::OsString,
    io::{self, BufRead, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr as _};
use env_logger::Env;
use log::debug;

use crate::App;

/// Walk through a text maze one step at a time.
///
/// The maze file holds one row per line: `#` for walls, `S` for the start, `E` for the exit and
/// anything else for open floor. Set `RUST_LOG` to see diagnostics on stderr.
#[derive(Debug, Parser)]
#[command(version, about)]
pub(crate) struct Cli {
    /// Path to the maze file.
    maze: PathBuf,
}

/// Parses the process arguments and plays a game on standard input and output.
///
/// Logging is set up here, once per process, before handing over to [`run_from`].
///
/// # Errors
///
/// Any error returned by [`run_from`].
pub fn run() -> Result<ExitCode> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    run_from(std::env::args_os(), &mut io::stdin().lock(), &mut io::stdout().lock())
}

/// Parses the given arguments and plays a game on the given input and output.
///
/// Usage errors are printed to stderr and reported as a failure exit code, while `--help` and
/// `--version` output is reported as a success. A maze that fails to load or validate is returned
/// as an error before anything is written to `out`.
///
/// # Errors
///
/// - [`MazeError`](crate::MazeError) if the maze cannot be loaded or is not playable.
/// - [`std::io::Error`] if the input cannot be read or the output written.
pub fn run_from<I, T, R, W>(args: I, input: &mut R, out: &mut W) -> Result<ExitCode>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    R: BufRead,
    W: Write,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) => {
            let code = if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
            err.print()?;
            return Ok(code);
        }
    };
    debug!("starting with {cli:?}");

    let mut app = App::load(&cli.maze)
        .wrap_err_with(|| format!("failed to load maze from {}", cli.maze.display()))?;
    let state = app.run(input, out)?;
    debug!("exiting after {state:?}");

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use clap::{error::ErrorKind, CommandFactory as _};

    use super::*;
    use crate::MazeError;

    /// Runs the entry point with in-memory terminal streams.
    fn run_with(args: &[&str], input: &str) -> (Result<ExitCode>, String) {
        let mut out = Vec::new();
        let result = run_from(args.iter().copied(), &mut Cursor::new(input), &mut out);

        (result, String::from_utf8(out).expect("Output should be UTF-8"))
    }

    /// Writes a maze file into a fresh temporary directory.
    fn maze_file(contents: &str) -> (tempfile::TempDir, String) {
        let dir = tempfile::tempdir().expect("Failed to create temporary directory");
        let path = dir.path().join("maze.txt");
        std::fs::write(&path, contents).expect("Failed to write maze file");
        let path = path.to_str().expect("Temporary path should be UTF-8").to_owned();

        (dir, path)
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_single_positional() {
        let cli = Cli::try_parse_from(["mazerun", "level.txt"]).expect("Arguments should parse");

        assert_eq!(cli.maze, PathBuf::from("level.txt"));
    }

    #[test]
    fn test_cli_missing_path() {
        let err = Cli::try_parse_from(["mazerun"]).expect_err("A path should be required");

        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert!(err.use_stderr());
    }

    #[test]
    fn test_cli_too_many_arguments() {
        let err = Cli::try_parse_from(["mazerun", "one.txt", "two.txt"])
            .expect_err("Only one path should be accepted");

        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
        assert!(err.use_stderr());
    }

    #[test]
    fn test_cli_help_is_not_an_error() {
        let err =
            Cli::try_parse_from(["mazerun", "--help"]).expect_err("Help should short-circuit");

        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        assert!(!err.use_stderr());
    }

    #[test]
    fn test_run_from_missing_path_fails() {
        let (result, out) = run_with(&["mazerun"], "");

        assert_eq!(result.ok(), Some(ExitCode::FAILURE));
        assert!(out.is_empty());
    }

    #[test]
    fn test_run_from_extra_path_fails() {
        let (result, out) = run_with(&["mazerun", "one.txt", "two.txt"], "");

        assert_eq!(result.ok(), Some(ExitCode::FAILURE));
        assert!(out.is_empty());
    }

    #[test]
    fn test_run_from_help_succeeds() {
        let (result, _) = run_with(&["mazerun", "--help"], "");

        assert_eq!(result.ok(), Some(ExitCode::SUCCESS));
    }

    #[test]
    fn test_run_from_ragged_maze_never_starts_the_game() {
        let (_dir, path) = maze_file("#####\n#S E#\n###\n#####\n#####\n");

        let (result, out) = run_with(&["mazerun", path.as_str()], "q\n");

        let err = result.expect_err("A ragged maze should not load");
        assert!(matches!(
            err.downcast_ref::<MazeError>(),
            Some(MazeError::Shape { row: 2, .. })
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn test_run_from_missing_exit_never_starts_the_game() {
        let (_dir, path) = maze_file("#####\n#S  #\n#   #\n#   #\n#####\n");

        let (result, out) = run_with(&["mazerun", path.as_str()], "q\n");

        let err = result.expect_err("A maze without an exit should not load");
        assert!(matches!(
            err.downcast_ref::<MazeError>(),
            Some(MazeError::MissingExit)
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn test_run_from_plays_until_win() {
        let (_dir, path) = maze_file("#####\n#S  #\n#   #\n#  E#\n#####\n");

        let (result, out) = run_with(&["mazerun", path.as_str()], "s\ns\nd\nd\n");

        assert_eq!(result.ok(), Some(ExitCode::SUCCESS));
        assert!(out.ends_with("Congratulations! You have reached the exit!\n"));
    }

    #[test]
    fn test_run_from_quit_succeeds() {
        let (_dir, path) = maze_file("#####\n#S  #\n#   #\n#  E#\n#####\n");

        let (result, out) = run_with(&["mazerun", path.as_str()], "q\n");

        assert_eq!(result.ok(), Some(ExitCode::SUCCESS));
        assert!(out.ends_with("The game is exiting.\n"));
    }
}
