//! The input line and its command history.

use folio_types::input::HistoryDirection;

/// Single-line text input with a browsable history of submitted lines.
///
/// The history cursor counts back from the newest entry: `Some(0)` is the
/// most recent submission and `None` means the user is not browsing.
#[derive(Debug, Default)]
pub struct LineEditor {
    input: String,
    history: Vec<String>,
    cursor: Option<usize>,
}

impl LineEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current contents of the input line.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Replace the input line.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Append a typed character.
    pub fn insert(&mut self, ch: char) {
        self.input.push(ch);
    }

    /// Delete the last character. Returns whether anything was removed.
    pub fn backspace(&mut self) -> bool {
        self.input.pop().is_some()
    }

    /// Submitted lines, oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Position while browsing history, counted back from the newest entry.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Step through history and load the landed-on entry into the input.
    ///
    /// Going back past the oldest entry stays on it. Going forward past the
    /// newest leaves history browsing and empties the input.
    pub fn navigate_history(&mut self, direction: HistoryDirection) {
        if self.history.is_empty() {
            return;
        }
        let oldest = self.history.len() - 1;
        self.cursor = match (direction, self.cursor) {
            (HistoryDirection::Previous, None) => Some(0),
            (HistoryDirection::Previous, Some(back)) => Some((back + 1).min(oldest)),
            (HistoryDirection::Next, None | Some(0)) => None,
            (HistoryDirection::Next, Some(back)) => Some(back - 1),
        };
        match self.cursor {
            Some(back) => {
                let entry = &self.history[self.history.len() - 1 - back];
                self.input.clone_from(entry);
            },
            None => self.input.clear(),
        }
        log::debug!("history cursor {:?}", self.cursor);
    }

    /// Take the input line for execution.
    ///
    /// Blank input is left untouched and yields `None`. Otherwise the
    /// trimmed line is recorded in history, browsing stops, and the input
    /// is cleared.
    pub fn commit(&mut self) -> Option<String> {
        let line = self.input.trim();
        if line.is_empty() {
            return None;
        }
        let line = line.to_string();
        self.history.push(line.clone());
        self.cursor = None;
        self.input.clear();
        Some(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use HistoryDirection::{Next, Previous};

    fn with_history(lines: &[&str]) -> LineEditor {
        let mut ed = LineEditor::new();
        for line in lines {
            ed.set_input(*line);
            assert!(ed.commit().is_some());
        }
        ed
    }

    #[test]
    fn typing_and_backspace() {
        let mut ed = LineEditor::new();
        ed.insert('h');
        ed.insert('i');
        assert_eq!(ed.input(), "hi");
        assert!(ed.backspace());
        assert!(ed.backspace());
        assert!(!ed.backspace());
        assert_eq!(ed.input(), "");
    }

    #[test]
    fn commit_trims_and_records() {
        let mut ed = LineEditor::new();
        ed.set_input("  Echo Hi  ");
        assert_eq!(ed.commit().as_deref(), Some("Echo Hi"));
        assert_eq!(ed.history(), ["Echo Hi"]);
        assert_eq!(ed.input(), "");
        assert_eq!(ed.cursor(), None);
    }

    #[test]
    fn blank_commit_is_a_noop() {
        let mut ed = LineEditor::new();
        ed.set_input("   ");
        assert_eq!(ed.commit(), None);
        assert!(ed.history().is_empty());
        assert_eq!(ed.input(), "   ");
    }

    #[test]
    fn navigation_on_empty_history_is_a_noop() {
        let mut ed = LineEditor::new();
        ed.set_input("draft");
        ed.navigate_history(Previous);
        ed.navigate_history(Next);
        assert_eq!(ed.input(), "draft");
        assert_eq!(ed.cursor(), None);
    }

    #[test]
    fn previous_walks_back_and_clamps_at_oldest() {
        let mut ed = with_history(&["a", "b", "c"]);
        ed.navigate_history(Previous);
        assert_eq!(ed.input(), "c");
        ed.navigate_history(Previous);
        assert_eq!(ed.input(), "b");
        ed.navigate_history(Previous);
        ed.navigate_history(Previous);
        assert_eq!(ed.input(), "a");
        assert_eq!(ed.cursor(), Some(2));
    }

    #[test]
    fn clamp_then_next() {
        let mut ed = with_history(&["a", "b", "c"]);
        for _ in 0..4 {
            ed.navigate_history(Previous);
        }
        assert_eq!(ed.input(), "a");
        ed.navigate_history(Next);
        assert_eq!(ed.input(), "b");
    }

    #[test]
    fn next_past_newest_clears_input() {
        let mut ed = with_history(&["a", "b"]);
        ed.navigate_history(Previous);
        assert_eq!(ed.input(), "b");
        ed.navigate_history(Next);
        assert_eq!(ed.input(), "");
        assert_eq!(ed.cursor(), None);
    }

    #[test]
    fn next_when_not_browsing_clears_input() {
        let mut ed = with_history(&["a"]);
        ed.set_input("half typed");
        ed.navigate_history(Next);
        assert_eq!(ed.input(), "");
    }

    #[test]
    fn commit_resets_cursor() {
        let mut ed = with_history(&["a", "b"]);
        ed.navigate_history(Previous);
        ed.navigate_history(Previous);
        assert_eq!(ed.commit().as_deref(), Some("a"));
        assert_eq!(ed.history(), ["a", "b", "a"]);
        ed.navigate_history(Previous);
        assert_eq!(ed.input(), "a");
        assert_eq!(ed.cursor(), Some(0));
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn cursor_always_in_bounds(
                lines in proptest::collection::vec("[a-z]{1,5}", 1..6),
                steps in proptest::collection::vec(any::<bool>(), 0..30),
            ) {
                let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
                let mut ed = with_history(&refs);
                for back in steps {
                    ed.navigate_history(if back { Previous } else { Next });
                    match ed.cursor() {
                        Some(c) => {
                            prop_assert!(c < lines.len());
                            prop_assert_eq!(ed.input(), lines[lines.len() - 1 - c].as_str());
                        },
                        None => prop_assert_eq!(ed.input(), ""),
                    }
                }
            }
        }
    }
}
