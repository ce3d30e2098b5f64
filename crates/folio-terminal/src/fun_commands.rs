//! Game-console easter eggs: disconnect, connect, fps_max, bind, sv_cheats,
//! noclip, quit.
//!
//! All of these are hidden from `help` but show up in `ls`.

use std::time::Duration;

use folio_types::error::Result;
use folio_types::severity::Severity;

use crate::interpreter::{Command, CommandRegistry, Environment, require_args};

/// Values above this trip the "too high" warning.
const FPS_CEILING: f64 = 400.0;
/// Values below this trip the "too low" warning.
const FPS_FLOOR: f64 = 30.0;

// ---------------------------------------------------------------------------
// disconnect
// ---------------------------------------------------------------------------

struct DisconnectCmd;
impl Command for DisconnectCmd {
    fn name(&self) -> &str {
        "disconnect"
    }
    fn description(&self) -> &str {
        "Leave the server"
    }
    fn usage(&self) -> &str {
        "disconnect"
    }
    fn hidden(&self) -> bool {
        true
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<()> {
        let delay = Duration::from_millis(env.content.console.disconnect_delay_ms);
        env.print("Disconnected from portfolio server.", Severity::Warning);
        env.defer(
            delay,
            "Reconnected to portfolio server. Welcome back!",
            Severity::Success,
        );
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// connect
// ---------------------------------------------------------------------------

struct ConnectCmd;
impl Command for ConnectCmd {
    fn name(&self) -> &str {
        "connect"
    }
    fn description(&self) -> &str {
        "Join a server"
    }
    fn usage(&self) -> &str {
        "connect <address>"
    }
    fn hidden(&self) -> bool {
        true
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<()> {
        require_args(self, args)?;
        let address = args[0];
        let delay = Duration::from_millis(env.content.console.connect_delay_ms);
        env.print(format!("Connecting to {address}..."), Severity::Info);
        env.defer(
            delay,
            format!("Connection to {address} failed: server is full."),
            Severity::Error,
        );
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// fps_max
// ---------------------------------------------------------------------------

struct FpsMaxCmd;
impl Command for FpsMaxCmd {
    fn name(&self) -> &str {
        "fps_max"
    }
    fn description(&self) -> &str {
        "Cap the frame rate"
    }
    fn usage(&self) -> &str {
        "fps_max <n>"
    }
    fn hidden(&self) -> bool {
        true
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<()> {
        require_args(self, args)?;
        let raw = args[0];
        let value = parse_fps(raw);
        // An unparsable value fails both checks.
        let too_high = value.is_some_and(|v| v > FPS_CEILING);
        let too_low = value.is_some_and(|v| v < FPS_FLOOR);

        if too_high {
            env.print(
                format!("fps_max {raw}: your monitor called, it can't keep up."),
                Severity::Warning,
            );
        } else if too_low {
            env.print(
                format!("fps_max {raw}: that's a slideshow, not a game."),
                Severity::Warning,
            );
        } else {
            env.print(format!("fps_max set to {raw}"), Severity::Success);
        }
        Ok(())
    }
}

/// Parse a frame-rate argument; `None` for anything that is not a finite
/// number.
fn parse_fps(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|v| v.is_finite())
}

// ---------------------------------------------------------------------------
// bind
// ---------------------------------------------------------------------------

struct BindCmd;
impl Command for BindCmd {
    fn name(&self) -> &str {
        "bind"
    }
    fn description(&self) -> &str {
        "Bind a key to a command"
    }
    fn usage(&self) -> &str {
        "bind <key> [command]"
    }
    fn hidden(&self) -> bool {
        true
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<()> {
        require_args(self, args)?;
        let key = args[0];
        if args.len() == 1 {
            env.print(format!("\"{key}\" is not bound"), Severity::Info);
        } else {
            let command = args[1..].join(" ");
            env.print(format!("\"{key}\" = \"{command}\""), Severity::Success);
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// sv_cheats
// ---------------------------------------------------------------------------

struct SvCheatsCmd;
impl Command for SvCheatsCmd {
    fn name(&self) -> &str {
        "sv_cheats"
    }
    fn description(&self) -> &str {
        "Toggle cheats"
    }
    fn usage(&self) -> &str {
        "sv_cheats <0|1>"
    }
    fn hidden(&self) -> bool {
        true
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<()> {
        require_args(self, args)?;
        match args[0] {
            "0" => env.print("sv_cheats 0", Severity::Success),
            "1" => env.print(
                "sv_cheats 1: cheats are disabled on this VAC-secured portfolio. Nice try.",
                Severity::Error,
            ),
            other => env.print(
                format!("sv_cheats: expected 0 or 1, got '{other}'"),
                Severity::Warning,
            ),
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// noclip
// ---------------------------------------------------------------------------

struct NoclipCmd;
impl Command for NoclipCmd {
    fn name(&self) -> &str {
        "noclip"
    }
    fn description(&self) -> &str {
        "Fly through walls"
    }
    fn usage(&self) -> &str {
        "noclip"
    }
    fn hidden(&self) -> bool {
        true
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<()> {
        env.print(
            "Can't use cheat command noclip in multiplayer, unless the server has sv_cheats set to 1.",
            Severity::Warning,
        );
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// quit
// ---------------------------------------------------------------------------

struct QuitCmd;
impl Command for QuitCmd {
    fn name(&self) -> &str {
        "quit"
    }
    fn description(&self) -> &str {
        "Quit the game"
    }
    fn usage(&self) -> &str {
        "quit"
    }
    fn hidden(&self) -> bool {
        true
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<()> {
        env.print(
            "You can check out any time you like, but you can never leave. Try 'help' instead.",
            Severity::Info,
        );
        Ok(())
    }
}

/// Register the game-console commands.
pub fn register_fun_commands(reg: &mut CommandRegistry) {
    reg.register(Box::new(DisconnectCmd));
    reg.register(Box::new(ConnectCmd));
    reg.register(Box::new(FpsMaxCmd));
    reg.register(Box::new(BindCmd));
    reg.register(Box::new(SvCheatsCmd));
    reg.register(Box::new(NoclipCmd));
    reg.register(Box::new(QuitCmd));
}
