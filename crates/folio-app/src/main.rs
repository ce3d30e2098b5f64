//! Folio console terminal entry point.
//!
//! Runs the portfolio console full-screen in a raw-mode terminal.
//! Enter submits, Up/Down browse history, Tab completes, Esc hides
//! suggestions, PageUp/PageDown page the scrollback, Ctrl-C or Ctrl-D quits.
//!
//! Usage: `folio [content.toml]` (or set `FOLIO_CONTENT`).

mod input;
mod render;

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use crossterm::{cursor, execute, terminal};

use folio_core::Console;
use folio_platform::DesktopPlatform;
use folio_terminal::{CommandRegistry, register_builtins};
use folio_types::config::ContentTable;
use folio_types::input::Key;

use input::Action;
use render::Pager;

/// stderr shares the tty with the raw-mode screen, so routine events stay
/// below the default filter.
const DEFAULT_LOG_FILTER: &str = "warn";

/// How long to wait for input before checking deferred output again.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER))
        .init();

    let content = load_content()?;
    log::info!(
        "Starting folio console for {} ({} sections, {} files)",
        content.profile.user,
        content.sections.len(),
        content.files.len(),
    );

    let platform = DesktopPlatform::new();
    let mut registry = CommandRegistry::new();
    register_builtins(&mut registry);
    let mut console = Console::new(registry, content, &platform, &platform);

    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    execute!(stdout, terminal::EnterAlternateScreen, cursor::Show)?;

    let result = run(&mut console, &mut stdout);

    // Restore the terminal before reporting any loop error.
    execute!(stdout, terminal::LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    console.shutdown();
    result
}

/// Content table from the first argument, `FOLIO_CONTENT`, or the
/// built-in document.
fn load_content() -> Result<ContentTable> {
    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("FOLIO_CONTENT").ok())
        .map(PathBuf::from);
    match path {
        Some(path) => {
            log::info!("Loading content from {}", path.display());
            ContentTable::load(&path)
                .with_context(|| format!("failed to load content from {}", path.display()))
        },
        None => ContentTable::builtin().context("built-in content table is invalid"),
    }
}

fn run(console: &mut Console<'_>, out: &mut impl Write) -> Result<()> {
    let mut pager = Pager::default();
    render::draw(out, console, &mut pager)?;

    loop {
        let mut dirty = false;
        if console.tick() > 0 {
            pager.follow_tail();
            dirty = true;
        }

        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) => match input::translate(key) {
                    Action::Quit => break,
                    Action::Key(key) => {
                        console.handle_key(key);
                        if key == Key::Submit {
                            pager.follow_tail();
                        }
                        dirty = true;
                    },
                    Action::Scroll(delta) => {
                        pager.scroll_by(delta);
                        dirty = true;
                    },
                    Action::Ignore => {},
                },
                Event::Resize(..) => dirty = true,
                _ => {},
            }
        }

        if dirty {
            render::draw(out, console, &mut pager)?;
        }
    }
    Ok(())
}
