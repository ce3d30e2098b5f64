//! Error types for the folio console.

use std::io;

/// Errors produced by the folio console.
///
/// The first three variants are the command-level failures a user can
/// trigger from the prompt; their `Display` text is exactly what lands in
/// the scrollback.
#[derive(Debug, thiserror::Error)]
pub enum FolioError {
    #[error("Command not found: {0}. Type 'help' for available commands.")]
    UnknownCommand(String),

    #[error("{usage}")]
    MissingArgument { usage: String },

    #[error("{0}")]
    LookupMiss(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("platform error: {0}")]
    Platform(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl FolioError {
    /// Build a `MissingArgument` error from a usage string.
    pub fn usage(usage: impl Into<String>) -> Self {
        Self::MissingArgument {
            usage: usage.into(),
        }
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, FolioError>;
