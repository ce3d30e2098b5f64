//! Profile link commands: github, linkedin, clips.
//!
//! These only decide that a link should open and which one; the session's
//! link service does the opening.

use folio_types::error::Result;
use folio_types::severity::Severity;

use crate::interpreter::{Command, CommandRegistry, Environment};

struct GithubCmd;
impl Command for GithubCmd {
    fn name(&self) -> &str {
        "github"
    }
    fn description(&self) -> &str {
        "Open GitHub profile"
    }
    fn usage(&self) -> &str {
        "github"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<()> {
        let url = env.content.profile.github_url.clone();
        env.open_url(url);
        env.print("Opening GitHub profile...", Severity::Success);
        Ok(())
    }
}

struct LinkedinCmd;
impl Command for LinkedinCmd {
    fn name(&self) -> &str {
        "linkedin"
    }
    fn description(&self) -> &str {
        "Open LinkedIn profile"
    }
    fn usage(&self) -> &str {
        "linkedin"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<()> {
        let note = env.content.profile.linkedin.clone();
        env.print(note, Severity::Info);
        Ok(())
    }
}

struct ClipsCmd;
impl Command for ClipsCmd {
    fn name(&self) -> &str {
        "clips"
    }
    fn description(&self) -> &str {
        "Watch gameplay highlights"
    }
    fn usage(&self) -> &str {
        "clips"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<()> {
        match env.content.profile.clips_url.clone() {
            Some(url) => {
                env.open_url(url);
                env.print("Opening clips...", Severity::Success);
            },
            None => env.print(
                "No clips uploaded yet. Check back after the next major.",
                Severity::Info,
            ),
        }
        Ok(())
    }
}

/// Register link commands.
pub fn register_link_commands(reg: &mut CommandRegistry) {
    reg.register(Box::new(GithubCmd));
    reg.register(Box::new(LinkedinCmd));
    reg.register(Box::new(ClipsCmd));
}
