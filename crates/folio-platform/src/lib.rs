//! Platform services the console depends on.
//!
//! The console core only talks to these traits; front-ends pick the
//! implementation (`DesktopPlatform` for a real session, `ManualTime` for
//! tests and headless replays).

mod services;

pub use services::{DesktopPlatform, LinkService, ManualTime, SystemTime, TimeService};
