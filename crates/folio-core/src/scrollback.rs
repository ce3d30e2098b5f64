//! The rendered log of echoed commands and their outputs.

use folio_types::severity::Severity;

/// One rendered unit in the scrollback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrollbackEntry {
    /// A submitted line, shown after the prompt exactly as typed (trimmed).
    Echo { text: String },
    /// Command output. The payload may contain HTML markup.
    Output { payload: String, severity: Severity },
}

/// Append-only entry log with a fixed-height viewport.
///
/// The only removal is a full [`clear`](Self::clear).
#[derive(Debug)]
pub struct Scrollback {
    entries: Vec<ScrollbackEntry>,
    rows: usize,
    top: usize,
}

impl Scrollback {
    /// Create an empty scrollback showing `rows` entries at a time.
    pub fn new(rows: usize) -> Self {
        Self {
            entries: Vec::new(),
            rows: rows.max(1),
            top: 0,
        }
    }

    pub fn append_echo(&mut self, text: impl Into<String>) {
        self.entries.push(ScrollbackEntry::Echo { text: text.into() });
    }

    pub fn append_output(&mut self, payload: impl Into<String>, severity: Severity) {
        self.entries.push(ScrollbackEntry::Output {
            payload: payload.into(),
            severity,
        });
    }

    /// Drop every entry and reset the viewport.
    pub fn clear(&mut self) {
        let dropped = std::mem::take(&mut self.entries);
        self.top = 0;
        log::debug!("scrollback cleared ({} entries)", dropped.len());
    }

    /// Move the viewport so the newest entry is on screen.
    pub fn scroll_to_end(&mut self) {
        self.top = self.max_top();
    }

    /// Move the viewport by `delta` entries (negative scrolls up), clamped
    /// to the ends.
    pub fn scroll_by(&mut self, delta: isize) {
        self.top = self.top.saturating_add_signed(delta).min(self.max_top());
    }

    /// Whether the newest entry is in view.
    pub fn at_end(&self) -> bool {
        self.top >= self.max_top()
    }

    fn max_top(&self) -> usize {
        self.entries.len().saturating_sub(self.rows)
    }

    /// Entries currently in view, oldest first.
    pub fn visible(&self) -> &[ScrollbackEntry] {
        let end = (self.top + self.rows).min(self.entries.len());
        let start = self.top.min(end);
        &self.entries[start..end]
    }

    /// Every entry, oldest first.
    pub fn entries(&self) -> &[ScrollbackEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Viewport height in entries.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Index of the first entry in view.
    pub fn top(&self) -> usize {
        self.top
    }

    /// Change the viewport height, keeping the newest entry in view if it
    /// already was.
    pub fn set_rows(&mut self, rows: usize) {
        let follow = self.at_end();
        self.rows = rows.max(1);
        if follow {
            self.scroll_to_end();
        } else {
            self.top = self.top.min(self.max_top());
        }
    }
}
