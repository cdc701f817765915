//! Command-line interface for the `folio` catalog browser.

use std::process::ExitCode;

use clap::Parser;
use folio::cli::{
    args::{Cli, Commands},
    commands,
    context::CommandContext,
    logging,
};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // `init` must work even when an existing config file is broken.
    let ctx = if matches!(cli.command, Commands::Init(_)) {
        CommandContext::load_cwd_only(cli.catalog)
    } else {
        CommandContext::load(cli.catalog)
    };
    let ctx = match ctx {
        Ok(ctx) => ctx,
        Err(code) => return code,
    };

    logging::init(&ctx.config.log.level);
    commands::run(cli.command, &ctx)
}
