//! Implementation of `folio position`.

use std::process::ExitCode;

use crate::cli::{args::PositionCommand, context::CommandContext};

/// Prints the flat position of the last document with the given url.
pub fn run(ctx: &CommandContext, cmd: &PositionCommand) -> ExitCode {
    let index = match ctx.index() {
        Ok(index) => index,
        Err(code) => return code,
    };

    let url = match index.canonicalize(&cmd.url) {
        Ok(url) => url,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match index.position_of(url.as_str()) {
        Some(position) => {
            println!("{position}");
            ExitCode::SUCCESS
        }
        None => {
            eprintln!("error: not found: {url}");
            ExitCode::FAILURE
        }
    }
}
