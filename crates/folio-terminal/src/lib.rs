//! Command interpreter for the folio console.
//!
//! The terminal is a registry-based dispatch system. Commands implement the
//! `Command` trait and are registered by name. The registry parses
//! submitted lines, resolves the command name, and dispatches `execute()`.
//! Commands report back only through render effects.

mod commands;
mod content_commands;
mod file_commands;
mod fun_commands;
mod interpreter;
mod link_commands;
mod system_commands;

/// Register every built-in command into a registry.
pub use commands::register_builtins;
/// A single executable command trait.
pub use interpreter::Command;
/// Read-only description of a registered command.
pub use interpreter::CommandSummary;
/// Registry of available commands with dispatch.
pub use interpreter::CommandRegistry;
/// What a command may read, and where it sends its effects.
pub use interpreter::Environment;
/// Separator between names in `ls` output.
pub use interpreter::LS_SEPARATOR;
/// One visible consequence of running a command.
pub use interpreter::RenderEffect;
