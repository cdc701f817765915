//! Implementation of `folio at`.

use std::process::ExitCode;

use crate::cli::{
    args::AtCommand,
    context::CommandContext,
    output::{DocumentView, print_document, print_json},
};

/// Shows the document at a flat position.
pub fn run(ctx: &CommandContext, cmd: &AtCommand) -> ExitCode {
    let index = match ctx.index() {
        Ok(index) => index,
        Err(code) => return code,
    };

    let Some(doc) = index.document_at(cmd.position) else {
        eprintln!(
            "error: no document at position {} (catalog has {})",
            cmd.position,
            index.document_count()
        );
        return ExitCode::FAILURE;
    };

    if cmd.json {
        return print_json(&DocumentView::new(&index, doc, Some(cmd.position)));
    }

    print_document(&index, doc);
    ExitCode::SUCCESS
}
