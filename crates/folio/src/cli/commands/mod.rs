//! Command implementations and dispatch.

pub mod at;
pub mod check;
pub mod config;
pub mod get;
pub mod init;
pub mod ls;
pub mod position;
pub mod status;

use std::process::ExitCode;

use super::{args::Commands, context::CommandContext};

/// Dispatches to the selected subcommand.
pub fn run(command: Commands, ctx: &CommandContext) -> ExitCode {
    match command {
        Commands::Ls(cmd) => ls::run(ctx, &cmd),
        Commands::At(cmd) => at::run(ctx, &cmd),
        Commands::Get(cmd) => get::run(ctx, &cmd),
        Commands::Position(cmd) => position::run(ctx, &cmd),
        Commands::Status => status::run(ctx),
        Commands::Check => check::run(ctx),
        Commands::Init(cmd) => init::run(ctx, &cmd),
        Commands::Config => config::run(ctx),
    }
}
