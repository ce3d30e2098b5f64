//! Session and identity commands: clear, whoami, pwd, date, uptime, version.

use folio_types::error::Result;
use folio_types::severity::Severity;

use crate::interpreter::{Command, CommandRegistry, Environment};

// ---------------------------------------------------------------------------
// clear
// ---------------------------------------------------------------------------

struct ClearCmd;
impl Command for ClearCmd {
    fn name(&self) -> &str {
        "clear"
    }
    fn description(&self) -> &str {
        "Clear the console"
    }
    fn usage(&self) -> &str {
        "clear"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<()> {
        env.clear();
        env.print("Console cleared.", Severity::Success);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// whoami
// ---------------------------------------------------------------------------

struct WhoamiCmd;
impl Command for WhoamiCmd {
    fn name(&self) -> &str {
        "whoami"
    }
    fn description(&self) -> &str {
        "Display current user"
    }
    fn usage(&self) -> &str {
        "whoami"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<()> {
        let user = env.content.profile.user.clone();
        env.print(user, Severity::Success);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// pwd
// ---------------------------------------------------------------------------

struct PwdCmd;
impl Command for PwdCmd {
    fn name(&self) -> &str {
        "pwd"
    }
    fn description(&self) -> &str {
        "Print working directory"
    }
    fn usage(&self) -> &str {
        "pwd"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<()> {
        let home = env.content.profile.home.clone();
        env.print(home, Severity::Info);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// date
// ---------------------------------------------------------------------------

struct DateCmd;
impl Command for DateCmd {
    fn name(&self) -> &str {
        "date"
    }
    fn description(&self) -> &str {
        "Show current date and time"
    }
    fn usage(&self) -> &str {
        "date"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<()> {
        match env.time {
            Some(time) => {
                let now = time.now()?;
                env.print(now.to_string(), Severity::Info);
            },
            None => env.print("date: no time service available", Severity::Warning),
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// uptime
// ---------------------------------------------------------------------------

struct UptimeCmd;
impl Command for UptimeCmd {
    fn name(&self) -> &str {
        "uptime"
    }
    fn description(&self) -> &str {
        "Show how long this console has been open"
    }
    fn usage(&self) -> &str {
        "uptime"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<()> {
        match env.time {
            Some(time) => {
                let secs = time.elapsed()?.as_secs();
                env.print(
                    format!("Portfolio uptime: {}m {}s", secs / 60, secs % 60),
                    Severity::Info,
                );
            },
            None => env.print("uptime: no time service available", Severity::Warning),
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// version
// ---------------------------------------------------------------------------

struct VersionCmd;
impl Command for VersionCmd {
    fn name(&self) -> &str {
        "version"
    }
    fn description(&self) -> &str {
        "Show portfolio version"
    }
    fn usage(&self) -> &str {
        "version"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<()> {
        let version = env.content.profile.version.clone();
        env.print(version, Severity::Success);
        Ok(())
    }
}

/// Register session and identity commands.
pub fn register_system_commands(reg: &mut CommandRegistry) {
    reg.register(Box::new(ClearCmd));
    reg.register(Box::new(WhoamiCmd));
    reg.register(Box::new(PwdCmd));
    reg.register(Box::new(DateCmd));
    reg.register(Box::new(UptimeCmd));
    reg.register(Box::new(VersionCmd));
}
