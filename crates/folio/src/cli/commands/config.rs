//! Implementation of `folio config`.

use std::process::ExitCode;

use crate::cli::{context::CommandContext, output::print_toml};

/// Shows effective configuration settings.
pub fn run(ctx: &CommandContext) -> ExitCode {
    print_toml(&ctx.config.settings_to_toml());
    ExitCode::SUCCESS
}
