//! One interactive console session.
//!
//! Ties the line editor, suggestion list, command registry, scrollback and
//! scheduler together. Front-ends deliver keys, poll [`Console::tick`], and
//! draw from the accessors; they never reach the pieces directly.

use folio_platform::{LinkService, TimeService};
use folio_terminal::{CommandRegistry, Environment, RenderEffect};
use folio_types::config::ContentTable;
use folio_types::input::{HistoryDirection, Key};
use folio_types::severity::Severity;

use crate::editor::LineEditor;
use crate::scheduler::{ScheduledTask, Scheduler, TaskId};
use crate::scrollback::Scrollback;
use crate::suggest;

/// A console session borrowing its platform services.
pub struct Console<'a> {
    registry: CommandRegistry,
    content: ContentTable,
    time: &'a dyn TimeService,
    links: &'a dyn LinkService,
    editor: LineEditor,
    /// Visible suggestions; empty means the list is hidden.
    suggestions: Vec<String>,
    scrollback: Scrollback,
    scheduler: Scheduler,
    closed: bool,
}

impl<'a> Console<'a> {
    pub fn new(
        registry: CommandRegistry,
        content: ContentTable,
        time: &'a dyn TimeService,
        links: &'a dyn LinkService,
    ) -> Self {
        let scrollback = Scrollback::new(content.console.viewport_rows);
        log::info!("Console session started ({} commands)", registry.len());
        Self {
            registry,
            content,
            time,
            links,
            editor: LineEditor::new(),
            suggestions: Vec::new(),
            scrollback,
            scheduler: Scheduler::new(),
            closed: false,
        }
    }

    /// Feed one key from the front-end.
    ///
    /// Keys arriving after [`shutdown`](Self::shutdown) are ignored.
    pub fn handle_key(&mut self, key: Key) {
        if self.closed {
            return;
        }
        match key {
            Key::Submit => self.submit(),
            Key::HistoryPrevious => self.navigate_history(HistoryDirection::Previous),
            Key::HistoryNext => self.navigate_history(HistoryDirection::Next),
            Key::Autocomplete => self.request_autocomplete(),
            Key::DismissSuggestions => self.suggestions.clear(),
            Key::Char(ch) => {
                self.editor.insert(ch);
                self.refresh_suggestions();
            },
            Key::Backspace => {
                if self.editor.backspace() {
                    self.refresh_suggestions();
                }
            },
        }
    }

    /// Replace the input with `line` and submit it.
    pub fn submit_line(&mut self, line: &str) {
        if self.closed {
            return;
        }
        self.editor.set_input(line);
        self.submit();
    }

    /// Replace the input with the suggestion at `index` and hide the list.
    /// Returns `false` if no such suggestion is showing.
    pub fn accept_suggestion(&mut self, index: usize) -> bool {
        let Some(name) = self.suggestions.get(index).cloned() else {
            return false;
        };
        self.editor.set_input(name);
        self.suggestions.clear();
        true
    }

    /// Render every deferred entry that has come due. Returns how many
    /// were rendered.
    pub fn tick(&mut self) -> usize {
        if self.closed {
            return 0;
        }
        let Some(next) = self.scheduler.next_due() else {
            return 0;
        };
        let now = match self.time.elapsed() {
            Ok(now) => now,
            Err(e) => {
                log::warn!("Session clock unavailable: {e}");
                return 0;
            },
        };
        if now < next {
            return 0;
        }
        let due = self.scheduler.take_due(now);
        let fired = due.len();
        for task in due {
            self.scrollback.append_output(task.payload, task.severity);
        }
        if fired > 0 {
            log::debug!("{fired} deferred entries fired");
            self.scrollback.scroll_to_end();
        }
        fired
    }

    /// Drop pending deferred entries and stop accepting input.
    pub fn shutdown(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        let dropped = self.scheduler.clear();
        if dropped > 0 {
            log::warn!("Dropping {dropped} pending deferred entries");
        }
        log::info!("Console session closed");
    }

    pub fn editor(&self) -> &LineEditor {
        &self.editor
    }

    pub fn scrollback(&self) -> &Scrollback {
        &self.scrollback
    }

    /// Mutable scrollback for paging and resizing the viewport.
    pub fn scrollback_mut(&mut self) -> &mut Scrollback {
        &mut self.scrollback
    }

    /// Suggestions currently showing, in registry order.
    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn pending_tasks(&self) -> usize {
        self.scheduler.pending()
    }

    /// Deferred entries still waiting to fire.
    pub fn deferred(&self) -> &[ScheduledTask] {
        self.scheduler.tasks()
    }

    /// Withdraw a deferred entry before it fires. Returns `false` if it
    /// already fired, was cancelled, or the session is closed.
    pub fn cancel_deferred(&mut self, id: TaskId) -> bool {
        self.scheduler.cancel(id)
    }

    pub fn content(&self) -> &ContentTable {
        &self.content
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    fn submit(&mut self) {
        let Some(line) = self.editor.commit() else {
            return;
        };
        log::debug!("submit {line:?}");
        self.scrollback.append_echo(line.as_str());

        let effects = {
            let mut env =
                Environment::new(&self.content, Some(self.time), self.registry.catalog());
            self.registry.dispatch(&line, &mut env);
            env.take_effects()
        };
        self.apply(effects);

        self.suggestions.clear();
        self.scrollback.scroll_to_end();
    }

    fn apply(&mut self, effects: Vec<RenderEffect>) {
        for effect in effects {
            match effect {
                RenderEffect::Output { payload, severity } => {
                    self.scrollback.append_output(payload, severity);
                },
                RenderEffect::Clear => self.scrollback.clear(),
                RenderEffect::OpenUrl(url) => match self.links.open_url(&url) {
                    Ok(()) => log::debug!("link service accepted {url}"),
                    Err(e) => {
                        log::warn!("Failed to open {url}: {e}");
                        self.scrollback.append_output(e.to_string(), Severity::Error);
                    },
                },
                RenderEffect::Defer {
                    delay,
                    payload,
                    severity,
                } => match self.time.elapsed() {
                    Ok(now) => {
                        self.scheduler.schedule(delay, now, payload, severity);
                    },
                    Err(e) => {
                        log::warn!("Cannot schedule deferred entry: {e}");
                        self.scrollback.append_output(e.to_string(), Severity::Error);
                    },
                },
            }
            self.scrollback.scroll_to_end();
        }
    }

    fn navigate_history(&mut self, direction: HistoryDirection) {
        self.editor.navigate_history(direction);
        self.refresh_suggestions();
    }

    fn request_autocomplete(&mut self) {
        let completed = suggest::autocomplete(self.editor.input(), self.registry.names());
        if let Some(completed) = completed {
            self.editor.set_input(completed);
            self.refresh_suggestions();
        }
    }

    fn refresh_suggestions(&mut self) {
        self.suggestions = suggest::suggestions(self.editor.input(), self.registry.names())
            .into_iter()
            .map(str::to_string)
            .collect();
    }
}

impl Drop for Console<'_> {
    fn drop(&mut self) {
        self.shutdown();
    }
}
