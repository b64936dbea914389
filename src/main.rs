//! This crate contains the source code for the binary for the game mazerun.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]
#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use std::process::ExitCode;

use color_eyre::{eyre::Result, install};

fn main() -> Result<ExitCode> {
    install()?;

    mazerun::run()
}
