//! crossterm key events to console keys.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use folio_types::input::Key;

/// Lines moved per PageUp / PageDown.
const PAGE_STEP: isize = 10;

/// What the main loop should do with one key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Forward to the console.
    Key(Key),
    /// Page the scrollback by this many lines.
    Scroll(isize),
    /// Leave the session.
    Quit,
    Ignore,
}

/// Translate a crossterm key event.
pub fn translate(event: KeyEvent) -> Action {
    // Windows reports releases too.
    if event.kind == KeyEventKind::Release {
        return Action::Ignore;
    }
    match (event.code, event.modifiers) {
        (KeyCode::Char('c' | 'd'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Enter, _) => Action::Key(Key::Submit),
        (KeyCode::Up, _) => Action::Key(Key::HistoryPrevious),
        (KeyCode::Down, _) => Action::Key(Key::HistoryNext),
        (KeyCode::Tab, _) => Action::Key(Key::Autocomplete),
        (KeyCode::Esc, _) => Action::Key(Key::DismissSuggestions),
        (KeyCode::Backspace, _) => Action::Key(Key::Backspace),
        (KeyCode::PageUp, _) => Action::Scroll(-PAGE_STEP),
        (KeyCode::PageDown, _) => Action::Scroll(PAGE_STEP),
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => Action::Key(Key::Char(c)),
        _ => Action::Ignore,
    }
}
