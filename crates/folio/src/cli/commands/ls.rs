//! Implementation of `folio ls`.

use std::process::ExitCode;

use comfy_table::{Cell, Table, presets::UTF8_FULL_CONDENSED};
use folio_index::Index;

use crate::cli::{
    args::LsCommand,
    context::CommandContext,
    output::{DocumentView, dim, header, print_json, print_meta},
};

/// Lists the flat document sequence as an indented tree.
pub fn run(ctx: &CommandContext, cmd: &LsCommand) -> ExitCode {
    let index = match ctx.index() {
        Ok(index) => index,
        Err(code) => return code,
    };

    if cmd.json {
        let views: Vec<DocumentView<'_>> = index
            .documents()
            .iter()
            .enumerate()
            .filter_map(|(position, &id)| {
                index
                    .document(id)
                    .map(|doc| DocumentView::new(&index, doc, Some(position)))
            })
            .collect();
        return print_json(&views);
    }

    if index.document_count() == 0 {
        println!("{}", dim("No documents in catalog."));
        return ExitCode::SUCCESS;
    }

    let width = index.document_count().saturating_sub(1).to_string().len();
    for (position, &id) in index.documents().iter().enumerate() {
        let Some(doc) = index.document(id) else {
            continue;
        };
        let indent = "  ".repeat(index.depth(id));
        let number = dim(&format!("{position:>width$}"));
        match doc.title() {
            Some(title) => println!("{number} {indent}{} {}", header(title), dim(doc.url())),
            None => println!("{number} {indent}{}", header(doc.url())),
        }
        if cmd.long {
            print_meta(doc, &format!("{:width$}   {indent}", ""));
        }
    }

    if cmd.long {
        println!();
        println!("{}", summary_table(&index));
    }

    ExitCode::SUCCESS
}

/// Builds the catalog summary shown by `ls --long`.
fn summary_table(index: &Index) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["Documents", "Top level", "Distinct urls", "Duplicated urls"]);
    table.add_row(vec![
        Cell::new(index.document_count()),
        Cell::new(index.roots().len()),
        Cell::new(index.cache().url_count()),
        Cell::new(index.cache().duplicates().len()),
    ]);
    table
}
