//! Folio console core.
//!
//! Owns one interactive session: the input line with its history, command
//! suggestions, the scrollback of echoed commands and outputs, and the
//! scheduler for deferred output. Front-ends feed [`Key`]s in, call
//! [`Console::tick`] from their poll loop, and draw [`Console::scrollback`].
//!
//! [`Key`]: folio_types::input::Key

// Re-exports so front-ends only need this crate plus a platform.
pub use folio_terminal as terminal;
pub use folio_types::config;
pub use folio_types::error;
pub use folio_types::input;
pub use folio_types::severity;

pub mod console;
pub mod editor;
pub mod scheduler;
pub mod scrollback;
pub mod suggest;

pub use console::Console;
