//! Plain-text rendering of the console into a raw-mode terminal.
//!
//! Output payloads are HTML fragments meant for a browser. Here they are
//! flattened to text: tags are dropped, line-breaking tags become newlines
//! and the common entities are decoded.

use std::io::{self, Write};
use std::ops::Range;

use crossterm::cursor::MoveTo;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::queue;
use folio_core::Console;
use folio_core::scrollback::ScrollbackEntry;
use folio_types::severity::Severity;

/// Rows reserved below the scrollback: suggestions, then the input line.
const RESERVED_ROWS: u16 = 2;

/// Foreground color for an output severity.
pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Normal => Color::Reset,
        Severity::Error => Color::Red,
        Severity::Success => Color::Green,
        Severity::Info => Color::Cyan,
        Severity::Warning => Color::Yellow,
    }
}

const ECHO_COLOR: Color = Color::DarkGrey;

/// Tags that end a line when they open or close.
fn is_block_tag(name: &str) -> bool {
    matches!(
        name,
        "div" | "p" | "li" | "ul" | "ol" | "h1" | "h2" | "h3" | "h4" | "h5" | "h6" | "pre"
    )
}

fn push_break(out: &mut String) {
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
}

/// Flatten an HTML fragment to plain text lines.
pub fn html_to_text(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut chars = html.chars();
    // A raw newline directly after `<br>` is source formatting, not a
    // second break.
    let mut after_br = false;

    while let Some(ch) = chars.next() {
        match ch {
            '<' => {
                let tag: String = chars.by_ref().take_while(|&c| c != '>').collect();
                let closing = tag.starts_with('/');
                let name = tag
                    .trim_start_matches('/')
                    .split(|c: char| c.is_whitespace() || c == '/')
                    .next()
                    .unwrap_or_default()
                    .to_ascii_lowercase();
                if name == "br" {
                    out.push('\n');
                    after_br = true;
                    continue;
                }
                if is_block_tag(&name) {
                    push_break(&mut out);
                } else if closing && name == "span" && !out.ends_with(char::is_whitespace) {
                    out.push(' ');
                }
            },
            '\n' if after_br => {},
            '\r' => {},
            c => out.push(c),
        }
        after_br = false;
    }

    let decoded = decode_entities(&out);
    let mut lines: Vec<&str> = Vec::new();
    for line in decoded.lines().map(str::trim_end) {
        // Collapse runs of blank lines.
        if line.trim().is_empty() && lines.last().is_none_or(|l| l.is_empty()) {
            continue;
        }
        lines.push(if line.trim().is_empty() { "" } else { line });
    }
    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    lines.join("\n")
}

fn decode_entities(text: &str) -> String {
    const ENTITIES: &[(&str, &str)] = &[
        ("&lt;", "<"),
        ("&gt;", ">"),
        ("&quot;", "\""),
        ("&#39;", "'"),
        ("&apos;", "'"),
        ("&nbsp;", " "),
        ("&bull;", "•"),
        // Last, so `&amp;lt;` stays `&lt;`.
        ("&amp;", "&"),
    ];
    ENTITIES
        .iter()
        .fold(text.to_string(), |acc, (entity, plain)| acc.replace(entity, plain))
}

/// The colored text lines one entry renders as.
pub fn entry_lines(entry: &ScrollbackEntry, prompt: &str) -> Vec<(String, Color)> {
    match entry {
        ScrollbackEntry::Echo { text } => vec![(format!("{prompt} {text}"), ECHO_COLOR)],
        ScrollbackEntry::Output { payload, severity } => {
            let color = severity_color(*severity);
            let text = html_to_text(payload);
            if text.is_empty() {
                return vec![(String::new(), color)];
            }
            text.lines().map(|l| (l.to_string(), color)).collect()
        },
    }
}

/// Every scrollback entry flattened to colored lines, oldest first.
pub fn scrollback_lines(console: &Console<'_>) -> Vec<(String, Color)> {
    let prompt = console.content().console.prompt.as_str();
    console
        .scrollback()
        .entries()
        .iter()
        .flat_map(|e| entry_lines(e, prompt))
        .collect()
}

/// Scroll position of the terminal view, counted in rendered lines.
///
/// One entry can flatten to dozens of lines, so paging works on lines
/// rather than on scrollback entries.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    /// Lines hidden below the bottom row.
    back: usize,
}

impl Pager {
    /// Move by `delta` lines; negative pages toward older output.
    pub fn scroll_by(&mut self, delta: isize) {
        self.back = if delta < 0 {
            self.back.saturating_add(delta.unsigned_abs())
        } else {
            self.back.saturating_sub(delta.unsigned_abs())
        };
    }

    /// Show the newest line again.
    pub fn follow_tail(&mut self) {
        self.back = 0;
    }

    /// Lines of `total` that fit in `rows`. Clamps the offset so the
    /// oldest line is as far as paging goes.
    pub fn window(&mut self, total: usize, rows: usize) -> Range<usize> {
        self.back = self.back.min(total.saturating_sub(rows));
        let end = total - self.back;
        end.saturating_sub(rows)..end
    }
}

fn clip(line: &str, width: usize) -> String {
    line.chars().take(width).collect()
}

/// Redraw the whole screen from the console state.
pub fn draw(out: &mut impl Write, console: &Console<'_>, pager: &mut Pager) -> io::Result<()> {
    let (width, height) = terminal::size()?;
    let width = usize::from(width);
    let body_rows = usize::from(height.saturating_sub(RESERVED_ROWS));
    let prompt = console.content().console.prompt.as_str();

    let lines = scrollback_lines(console);
    let window = pager.window(lines.len(), body_rows);

    queue!(out, Clear(ClearType::All))?;
    for (row, (text, color)) in lines[window].iter().enumerate() {
        queue!(
            out,
            MoveTo(0, row as u16),
            SetForegroundColor(*color),
            Print(clip(text, width)),
            ResetColor
        )?;
    }

    let suggestions_row = height.saturating_sub(RESERVED_ROWS);
    if !console.suggestions().is_empty() {
        queue!(
            out,
            MoveTo(0, suggestions_row),
            SetForegroundColor(ECHO_COLOR),
            Print(clip(&console.suggestions().join("  "), width)),
            ResetColor
        )?;
    }

    let input_line = format!("{prompt} {}", console.editor().input());
    let input_row = height.saturating_sub(1);
    let cursor_col = input_line.chars().count().min(width.saturating_sub(1));
    queue!(
        out,
        MoveTo(0, input_row),
        Print(clip(&input_line, width)),
        MoveTo(cursor_col as u16, input_row)
    )?;
    out.flush()
}
