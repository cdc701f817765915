//! Implementation of `folio status`.

use std::process::ExitCode;

use folio_config::discover_config_files;

use crate::cli::{
    context::{CatalogOrigin, CommandContext},
    output::{dim, subheader, warning},
};

/// Shows configuration files, the catalog in effect, and document counts.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let config_files = discover_config_files(&ctx.cwd);

    println!("{}", subheader("Config files:"));
    if config_files.is_empty() {
        println!("   {}", dim("(none found)"));
    } else {
        for path in &config_files {
            println!("   {}", path.display());
        }
    }
    println!();

    println!("{}", subheader("Catalog:"));
    let Some((path, origin)) = ctx.catalog_path() else {
        println!("   {}", dim("(none defined)"));
        println!();
        println!(
            "Run {} to create a configuration file.",
            subheader("folio init")
        );
        return ExitCode::SUCCESS;
    };

    let scope = match origin {
        CatalogOrigin::Flag => "--catalog",
        CatalogOrigin::Config if ctx.config.catalog.is_global() => "global",
        CatalogOrigin::Config => "local",
    };
    if !path.is_file() {
        println!(
            "   {} {} {}",
            path.display(),
            dim(&format!("({scope})")),
            warning("[missing]")
        );
        return ExitCode::SUCCESS;
    }
    println!("   {} {}", path.display(), dim(&format!("({scope})")));
    println!();

    let base = match ctx.base_url(&path) {
        Ok(base) => base,
        Err(code) => return code,
    };
    println!("{}", subheader("Base url:"));
    if ctx.base_setting().is_some() {
        println!("   {}", base.as_url());
    } else {
        println!(
            "   {} {}",
            base.as_url(),
            dim("(derived from catalog location)")
        );
    }
    println!();

    let index = match ctx.index() {
        Ok(index) => index,
        Err(code) => return code,
    };
    println!("{}", subheader("Documents:"));
    println!(
        "   {} total, {} top level, {} distinct urls",
        index.document_count(),
        index.roots().len(),
        index.cache().url_count()
    );

    let duplicates = index.cache().duplicates();
    if !duplicates.is_empty() {
        println!();
        println!(
            "{}",
            subheader(&format!("Duplicate urls ({}):", duplicates.len()))
        );
        for (url, count) in duplicates {
            println!("   {url} {}", dim(&format!("x{count}")));
        }
    }

    ExitCode::SUCCESS
}
