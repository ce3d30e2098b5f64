//! Front-end agnostic key events.
//!
//! Every front-end maps its native keyboard input to [`Key`]. The console
//! never sees raw terminal or browser events.

/// A key delivered to the console's input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Enter: submit the current line.
    Submit,
    /// Arrow up: step back to an older history entry.
    HistoryPrevious,
    /// Arrow down: step forward to a newer history entry.
    HistoryNext,
    /// Tab: complete the command name.
    Autocomplete,
    /// Escape: hide the suggestion list.
    DismissSuggestions,
    /// Character typed.
    Char(char),
    /// Backspace / delete-left.
    Backspace,
}

/// Direction of a history step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryDirection {
    /// Toward older entries.
    Previous,
    /// Toward newer entries.
    Next,
}
