//! Implementation of `folio init`.

use std::{fs, path::PathBuf, process::ExitCode};

use folio_config::{CONFIG_FILENAME, ConfigTemplate, global_config_path};

use crate::cli::{
    args::InitCommand,
    context::CommandContext,
    output::{dim, print_toml, subheader},
};

/// Writes a starter `.folio.toml` with every setting commented out.
///
/// Run from the home directory, or with `--global`, it writes `~/.folio.toml`.
pub fn run(ctx: &CommandContext, cmd: &InitCommand) -> ExitCode {
    let (template, target) = match destination(ctx, cmd.global) {
        Ok(found) => found,
        Err(code) => return code,
    };

    if target.exists() && !cmd.force {
        eprintln!("error: {} already exists", target.display());
        eprintln!("Pass --force to replace it.");
        return ExitCode::FAILURE;
    }

    let contents = template.render();
    if let Err(e) = fs::write(&target, &contents) {
        eprintln!("error: cannot write {}: {e}", target.display());
        return ExitCode::FAILURE;
    }

    println!("Created {}", target.display());
    println!();
    println!("{}", subheader("Configuration written:"));
    print_toml(&contents);
    if template == ConfigTemplate::Project {
        println!();
        println!(
            "{}",
            dim("Uncomment [catalog] path to point folio at a catalog, then run 'folio check'.")
        );
    }

    ExitCode::SUCCESS
}

/// Picks the template and the file it goes to.
fn destination(ctx: &CommandContext, global: bool) -> Result<(ConfigTemplate, PathBuf), ExitCode> {
    let home_config = global_config_path();
    let in_home = home_config
        .as_deref()
        .and_then(|path| path.parent())
        .is_some_and(|home| home == ctx.cwd);

    if !(global || in_home) {
        return Ok((ConfigTemplate::Project, ctx.cwd.join(CONFIG_FILENAME)));
    }
    home_config
        .map(|path| (ConfigTemplate::Global, path))
        .ok_or_else(|| {
            eprintln!("error: no home directory for ~/{CONFIG_FILENAME}");
            ExitCode::FAILURE
        })
}
