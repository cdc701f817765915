//! Rendering and JSON serialization for CLI output.

use std::{
    io::{self, IsTerminal},
    process::ExitCode,
};

pub use folio_highlight::{breadcrumb, dim, header, subheader, success, warning};
use folio_highlight::Highlighter;
use folio_index::{Document, Index, Meta};
use serde::Serialize;
use serde_json::Value;

/// JSON view of one document.
#[derive(Serialize)]
pub struct DocumentView<'a> {
    /// Flat position, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<usize>,
    /// Nesting depth (0 for top level).
    pub depth: usize,
    /// Canonical url.
    pub url: &'a str,
    /// Ancestor urls, outermost first.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ancestors: Vec<&'a str>,
    /// Descriptor metadata.
    pub meta: &'a Meta,
}

impl<'a> DocumentView<'a> {
    /// Builds the view of a document attached to `index`.
    pub fn new(index: &'a Index, doc: &'a Document, position: Option<usize>) -> Self {
        let ancestors: Vec<&str> = ancestry(index, doc)
            .into_iter()
            .map(Document::url)
            .collect();
        Self {
            position,
            depth: ancestors.len(),
            url: doc.url(),
            ancestors,
            meta: doc.meta(),
        }
    }
}

/// Returns the ancestors of a document, outermost first.
pub fn ancestry<'a>(index: &'a Index, doc: &Document) -> Vec<&'a Document> {
    let Some(parent) = doc.parent() else {
        return Vec::new();
    };
    let mut chain = index.ancestors(parent);
    chain.push(parent);
    chain.into_iter().filter_map(|id| index.document(id)).collect()
}

/// Returns the display label of a document: its title, or else its url.
pub fn label(doc: &Document) -> &str {
    doc.title().unwrap_or_else(|| doc.url())
}

/// Renders a metadata value on a single line.
pub fn meta_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => format!("[{} items]", items.len()),
        Value::Object(fields) => format!("{{{} fields}}", fields.len()),
        other => other.to_string(),
    }
}

/// Prints the metadata fields of a document except `url` and `children`.
pub fn print_meta(doc: &Document, indent: &str) {
    for (key, value) in doc.meta() {
        if key == "url" || key == "children" {
            continue;
        }
        println!("{indent}{} {}", dim(&format!("{key}:")), meta_value(value));
    }
}

/// Prints a document with its ancestor breadcrumb and metadata.
pub fn print_document(index: &Index, doc: &Document) {
    println!("{}", header(label(doc)));
    let ancestors = ancestry(index, doc);
    if !ancestors.is_empty() {
        let labels: Vec<&str> = ancestors.iter().map(|d| label(d)).collect();
        println!("  {} {}", dim("in:"), breadcrumb(&labels));
    }
    println!("  {} {}", dim("url:"), doc.url());
    print_meta(doc, "  ");
}

/// Prints a value as pretty JSON, highlighted when stdout is a terminal.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            if io::stdout().is_terminal() {
                println!("{}", Highlighter::new().highlight_json(&json));
            } else {
                println!("{json}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to serialize JSON: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Prints TOML, highlighted when stdout is a terminal.
pub fn print_toml(content: &str) {
    if io::stdout().is_terminal() {
        print!("{}", Highlighter::new().highlight_toml(content));
    } else {
        print!("{content}");
    }
}
