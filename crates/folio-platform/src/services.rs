//! Platform service traits and desktop implementation.

use std::cell::Cell;
use std::time::{Duration, Instant};

use folio_types::error::{FolioError, Result};

// ---------------------------------------------------------------------------
// Time service
// ---------------------------------------------------------------------------

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// A simple UTC wall-clock timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemTime {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    /// Day of week, 0 = Sunday.
    pub weekday: u8,
}

impl SystemTime {
    /// Break a Unix timestamp (seconds) into calendar fields.
    pub fn from_unix_secs(secs: u64) -> Self {
        let days = secs / 86400;
        let time_of_day = secs % 86400;
        let (year, month, day) = days_to_ymd(days);
        Self {
            year,
            month,
            day,
            hour: (time_of_day / 3600) as u8,
            minute: ((time_of_day % 3600) / 60) as u8,
            second: (time_of_day % 60) as u8,
            // 1970-01-01 was a Thursday.
            weekday: ((days + 4) % 7) as u8,
        }
    }
}

/// Renders in the browser's default `Date` string shape, pinned to UTC.
impl std::fmt::Display for SystemTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let weekday = WEEKDAYS[(self.weekday % 7) as usize];
        let month = MONTHS[(self.month.clamp(1, 12) - 1) as usize];
        write!(
            f,
            "{weekday} {month} {:02} {:04} {:02}:{:02}:{:02} GMT+0000 (UTC)",
            self.day, self.year, self.hour, self.minute, self.second,
        )
    }
}

/// Abstraction over the session clock.
pub trait TimeService {
    /// Current wall-clock time.
    fn now(&self) -> Result<SystemTime>;

    /// Time elapsed since the console session started.
    fn elapsed(&self) -> Result<Duration>;
}

// ---------------------------------------------------------------------------
// Link service
// ---------------------------------------------------------------------------

/// Opens external URLs in a new browsing context.
///
/// The console decides *that* a link opens and *which* one; how navigation
/// happens is entirely up to the implementation.
pub trait LinkService {
    fn open_url(&self, url: &str) -> Result<()>;
}

// ---------------------------------------------------------------------------
// Desktop implementation
// ---------------------------------------------------------------------------

/// Default platform implementation using `std` facilities.
pub struct DesktopPlatform {
    start_time: Instant,
}

impl DesktopPlatform {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
        }
    }
}

impl Default for DesktopPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeService for DesktopPlatform {
    fn now(&self) -> Result<SystemTime> {
        let secs = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        Ok(SystemTime::from_unix_secs(secs))
    }

    fn elapsed(&self) -> Result<Duration> {
        Ok(self.start_time.elapsed())
    }
}

impl LinkService for DesktopPlatform {
    fn open_url(&self, url: &str) -> Result<()> {
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(FolioError::Platform(format!("refusing to open '{url}'")));
        }
        log::debug!("Opening {url}");
        let mut opener = opener_command(url);
        opener
            .stdin(std::process::Stdio::null())
            .stdout(std::process::Stdio::null())
            .stderr(std::process::Stdio::null());
        // The child is detached; its exit status is not interesting.
        opener
            .spawn()
            .map(drop)
            .map_err(|e| FolioError::Platform(format!("cannot launch browser: {e}")))
    }
}

#[cfg(target_os = "macos")]
fn opener_command(url: &str) -> std::process::Command {
    let mut cmd = std::process::Command::new("open");
    cmd.arg(url);
    cmd
}

#[cfg(target_os = "windows")]
fn opener_command(url: &str) -> std::process::Command {
    let mut cmd = std::process::Command::new("cmd");
    cmd.args(["/C", "start", "", url]);
    cmd
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn opener_command(url: &str) -> std::process::Command {
    let mut cmd = std::process::Command::new("xdg-open");
    cmd.arg(url);
    cmd
}

// ---------------------------------------------------------------------------
// Manual clock
// ---------------------------------------------------------------------------

/// A clock that only moves when told to.
///
/// Used by tests and by headless replays of recorded sessions.
pub struct ManualTime {
    start_secs: u64,
    elapsed: Cell<Duration>,
}

impl ManualTime {
    /// Start at the given Unix timestamp with zero elapsed time.
    pub fn at_unix_secs(secs: u64) -> Self {
        Self {
            start_secs: secs,
            elapsed: Cell::new(Duration::ZERO),
        }
    }

    /// Move the session clock forward.
    pub fn advance(&self, by: Duration) {
        self.elapsed.set(self.elapsed.get() + by);
    }
}

impl TimeService for ManualTime {
    fn now(&self) -> Result<SystemTime> {
        Ok(SystemTime::from_unix_secs(
            self.start_secs + self.elapsed.get().as_secs(),
        ))
    }

    fn elapsed(&self) -> Result<Duration> {
        Ok(self.elapsed.get())
    }
}

// ---------------------------------------------------------------------------
// Calendar helpers
// ---------------------------------------------------------------------------

fn is_leap(year: u16) -> bool {
    (year.is_multiple_of(4) && !year.is_multiple_of(100)) || year.is_multiple_of(400)
}

fn month_len(year: u16, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ if is_leap(year) => 29,
        _ => 28,
    }
}

/// Convert days since 1970-01-01 to (year, month, day).
pub(crate) fn days_to_ymd(mut days: u64) -> (u16, u8, u8) {
    let mut year = 1970u16;
    loop {
        let year_days = if is_leap(year) { 366 } else { 365 };
        if days < year_days {
            break;
        }
        days -= year_days;
        year += 1;
    }
    let mut month = 1u8;
    while month < 12 {
        let len = month_len(year, month) as u64;
        if days < len {
            break;
        }
        days -= len;
        month += 1;
    }
    (year, month, days as u8 + 1)
}
