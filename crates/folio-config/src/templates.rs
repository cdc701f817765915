//! Starter files written by `folio init`.
//!
//! Each template is kept as live TOML under `templates/` so it can be checked against
//! the parser, and is handed out with every setting disabled.

/// Which `.folio.toml` a template is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigTemplate {
    /// A project file next to (or above) a catalog.
    Project,
    /// `~/.folio.toml`.
    Global,
}

impl ConfigTemplate {
    /// Returns the template as it is stored, with settings enabled.
    fn source(self) -> &'static str {
        match self {
            Self::Project => include_str!("../templates/config.toml"),
            Self::Global => include_str!("../templates/config-global.toml"),
        }
    }

    /// Returns the file contents to write: every setting and table header is turned
    /// into a comment, so the new file changes nothing until the user edits it.
    pub fn render(self) -> String {
        self.source()
            .lines()
            .map(|line| match line.chars().next() {
                None | Some('#') => format!("{line}\n"),
                Some(_) => format!("# {line}\n"),
            })
            .collect()
    }
}
