//! Terminal styling for folio output.
//!
//! Two concerns live here: coloring the JSON views and TOML configuration the CLI
//! prints, and the handful of ANSI styles used for catalog listings and reports.

#![warn(missing_docs)]

use syntect::{
    easy::HighlightLines,
    highlighting::{Style, Theme},
    parsing::{SyntaxReference, SyntaxSet},
    util::{LinesWithEndings, as_24_bit_terminal_escaped},
};
use two_face::{
    syntax::extra_newlines,
    theme::{EmbeddedThemeName, extra},
};

/// Escape sequence that clears every attribute.
const RESET: &str = "\x1b[0m";

/// Document formats the CLI prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Syntax {
    /// Document views and query results.
    Json,
    /// Configuration files and templates.
    Toml,
}

impl Syntax {
    /// File extension syntect knows the format by.
    fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Toml => "toml",
        }
    }
}

/// Colors JSON and TOML for a 24-bit terminal.
pub struct Highlighter {
    /// Language definitions; two-face's set carries TOML, which syntect's does not.
    syntaxes: SyntaxSet,
    /// Resolved color theme.
    theme: Theme,
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl Highlighter {
    /// Creates a highlighter using the Dracula theme.
    pub fn new() -> Self {
        Self {
            syntaxes: extra_newlines(),
            theme: extra().get(EmbeddedThemeName::Dracula).clone(),
        }
    }

    /// Renders `content` with escape codes, ending with a reset.
    ///
    /// Lines the highlighter cannot parse are emitted unstyled.
    pub fn render(&self, syntax: Syntax, content: &str) -> String {
        let mut lines = HighlightLines::new(self.syntax(syntax), &self.theme);
        let mut out = String::with_capacity(content.len() * 2);
        for line in LinesWithEndings::from(content) {
            match lines.highlight_line(line, &self.syntaxes) {
                Ok(ranges) => out.push_str(&as_24_bit_terminal_escaped(&ranges, false)),
                Err(_) => out.push_str(&as_24_bit_terminal_escaped(
                    &[(Style::default(), line)],
                    false,
                )),
            }
        }
        out.push_str(RESET);
        out
    }

    /// Renders JSON.
    pub fn highlight_json(&self, content: &str) -> String {
        self.render(Syntax::Json, content)
    }

    /// Renders TOML.
    pub fn highlight_toml(&self, content: &str) -> String {
        self.render(Syntax::Toml, content)
    }

    /// Looks up the definition for a format, falling back to plain text.
    fn syntax(&self, syntax: Syntax) -> &SyntaxReference {
        self.syntaxes
            .find_syntax_by_extension(syntax.extension())
            .unwrap_or_else(|| self.syntaxes.find_syntax_plain_text())
    }
}

/// Text styles used in listings and reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paint {
    /// Document titles.
    Title,
    /// Section labels in reports.
    Label,
    /// Positions, separators and secondary detail.
    Muted,
    /// Clean results.
    Good,
    /// Issues found by `check` and missing files.
    Issue,
}

impl Paint {
    /// Returns the SGR sequence that starts this style.
    pub fn code(self) -> &'static str {
        match self {
            Self::Title => "\x1b[1;36m",
            Self::Label => "\x1b[1m",
            Self::Muted => "\x1b[2m",
            Self::Good => "\x1b[32m",
            Self::Issue => "\x1b[33m",
        }
    }

    /// Wraps `text` in this style.
    pub fn apply(self, text: &str) -> String {
        format!("{}{text}{RESET}", self.code())
    }
}

/// Styles a document title.
pub fn header(text: &str) -> String {
    Paint::Title.apply(text)
}

/// Styles a section label.
pub fn subheader(text: &str) -> String {
    Paint::Label.apply(text)
}

/// Styles secondary detail.
pub fn dim(text: &str) -> String {
    Paint::Muted.apply(text)
}

/// Styles a clean result.
pub fn success(text: &str) -> String {
    Paint::Good.apply(text)
}

/// Styles an issue.
pub fn warning(text: &str) -> String {
    Paint::Issue.apply(text)
}

/// Joins ancestor labels outermost first, with muted separators.
pub fn breadcrumb(parts: &[&str]) -> String {
    parts.join(&dim(" › "))
}
