//! Implementation of `folio get`.

use std::process::ExitCode;

use serde::Serialize;

use crate::cli::{
    args::GetCommand,
    context::CommandContext,
    output::{DocumentView, print_document, print_json},
};

/// JSON output for `folio get`.
#[derive(Serialize)]
struct JsonGetOutput<'a> {
    /// Canonical url that was looked up.
    url: &'a str,
    /// Cached flat positions of that url.
    positions: &'a [usize],
    /// Matching documents in traversal order.
    matches: Vec<DocumentView<'a>>,
}

/// Shows every document whose canonical url matches.
pub fn run(ctx: &CommandContext, cmd: &GetCommand) -> ExitCode {
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

    let matches = index.get(url.as_str());
    if matches.is_empty() {
        eprintln!("error: not found: {url}");
        return ExitCode::FAILURE;
    }

    if cmd.json {
        let output = JsonGetOutput {
            url: &url,
            positions: index.positions_of(&url),
            matches: matches
                .iter()
                .map(|doc| DocumentView::new(&index, doc, None))
                .collect(),
        };
        return print_json(&output);
    }

    for (i, doc) in matches.iter().enumerate() {
        if i > 0 {
            println!();
        }
        print_document(&index, doc);
    }

    ExitCode::SUCCESS
}
