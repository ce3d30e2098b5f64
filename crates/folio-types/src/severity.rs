//! Presentation category of a scrollback entry.

use serde::Deserialize;

/// Severity / category tag of a rendered output entry.
///
/// Used purely for styling; it never changes how a command is dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Normal,
    Error,
    Success,
    Info,
    Warning,
}

impl Severity {
    /// The style class name front-ends key their colors on.
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Error => "error",
            Self::Success => "success",
            Self::Info => "info",
            Self::Warning => "warning",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.class_name())
    }
}
