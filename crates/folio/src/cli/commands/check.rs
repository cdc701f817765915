//! Implementation of `folio check`.

use std::process::ExitCode;

use folio_config::{ConfigWarning, discover_config_files};
use folio_index::Index;
use serde_json::Value;

use crate::cli::{
    context::{CatalogOrigin, CommandContext},
    output::{dim, subheader, success, warning},
};

/// Exit codes for `folio check`.
mod exit_codes {
    use std::process::ExitCode;

    /// Configuration and catalog are valid.
    pub const OK: ExitCode = ExitCode::SUCCESS;
    /// At least one issue was found.
    pub const ISSUES: ExitCode = ExitCode::FAILURE;
}

/// Validates configuration and catalog, reporting every issue found.
pub fn run(ctx: &CommandContext) -> ExitCode {
    println!("Checking configuration...");
    println!();

    let config_files = discover_config_files(&ctx.cwd);
    if config_files.is_empty() {
        println!("{}", dim("No configuration files found."));
    } else {
        println!("{}", subheader("Config files:"));
        for path in &config_files {
            println!("   {}", path.display());
        }
    }
    println!();

    let warnings: Vec<ConfigWarning> = ctx
        .config
        .validate()
        .into_iter()
        .filter(|w| !superseded(ctx, w))
        .collect();

    let catalog_issues = match ctx.catalog_path() {
        Some((path, CatalogOrigin::Flag)) if !path.is_file() => {
            vec![format!("catalog path is not a file: {}", path.display())]
        }
        Some((path, _)) if path.is_file() => check_catalog(ctx),
        _ => Vec::new(),
    };

    let total = warnings.len() + catalog_issues.len();
    if total == 0 {
        println!("{}", success("No issues found."));
        return exit_codes::OK;
    }

    println!("{}", subheader(&format!("Issues ({total}):")));
    for w in &warnings {
        println!("   {}", warning(&w.to_string()));
    }
    for issue in &catalog_issues {
        println!("   {}", warning(issue));
    }
    println!();

    print_hints(&warnings);

    exit_codes::ISSUES
}

/// Returns true if a command-line flag replaces the setting a warning is about.
fn superseded(ctx: &CommandContext, w: &ConfigWarning) -> bool {
    let catalog_flag = matches!(ctx.catalog_path(), Some((_, CatalogOrigin::Flag)));
    match w {
        ConfigWarning::NoCatalogDefined
        | ConfigWarning::CatalogPathMissing { .. }
        | ConfigWarning::CatalogPathNotFile { .. } => catalog_flag,
        ConfigWarning::InvalidBaseUrl { .. } => ctx.base_overridden(),
        ConfigWarning::InvalidLogLevel { .. } => false,
    }
}

/// Loads the catalog strictly and reports decode, shape, and entry problems.
fn check_catalog(ctx: &CommandContext) -> Vec<String> {
    let source = match ctx.read_catalog() {
        Ok(source) => source,
        Err(_) => return vec![String::from("catalog could not be read")],
    };

    let value: Value = match serde_json::from_str(&source.text) {
        Ok(value) => value,
        Err(e) => return vec![format!("catalog is not valid JSON: {e}")],
    };

    let mut index = Index::new(source.base);
    if let Err(e) = index.try_parse(&value) {
        return vec![format!("catalog cannot be loaded: {e}")];
    }
    index.update();

    let entries = value.as_array().map_or(0, |items| count_entries(items));
    let loaded = index.document_count();
    println!(
        "{} {} {}",
        subheader("Catalog:"),
        source.path.display(),
        dim(&format!("({loaded} documents)"))
    );

    let duplicates = index.cache().duplicates();
    if !duplicates.is_empty() {
        println!(
            "   {}",
            dim(&format!(
                "{} urls occur more than once; lookups by url return the last",
                duplicates.len()
            ))
        );
    }
    println!();

    if loaded < entries {
        vec![format!(
            "{} of {entries} catalog entries were not loaded (missing or unresolvable url)",
            entries - loaded
        )]
    } else {
        Vec::new()
    }
}

/// Counts entries recursively, following `children` arrays.
fn count_entries(entries: &[Value]) -> usize {
    entries
        .iter()
        .map(|entry| {
            let nested = entry
                .get("children")
                .and_then(Value::as_array)
                .map_or(0, |children| count_entries(children));
            1 + nested
        })
        .sum()
}

/// Prints hints for resolving common warnings.
fn print_hints(warnings: &[ConfigWarning]) {
    let mut hints: Vec<&str> = warnings
        .iter()
        .map(|w| match w {
            ConfigWarning::NoCatalogDefined => {
                "Hint: set [catalog] path in .folio.toml, or pass --catalog."
            }
            ConfigWarning::CatalogPathMissing { .. } | ConfigWarning::CatalogPathNotFile { .. } => {
                "Hint: point [catalog] path at an existing JSON file."
            }
            ConfigWarning::InvalidBaseUrl { .. } => {
                "Hint: the base must be an absolute url such as https://example.com/docs/."
            }
            ConfigWarning::InvalidLogLevel { .. } => {
                "Hint: use a filter such as \"warn\" or \"folio_index=debug\"."
            }
        })
        .collect();

    hints.sort_unstable();
    hints.dedup();
    for hint in hints {
        println!("{}", dim(hint));
    }
}
