//! Pseudo file commands: cat, echo.

use folio_types::error::{FolioError, Result};
use folio_types::severity::Severity;

use crate::interpreter::{Command, CommandRegistry, Environment, require_args};

// ---------------------------------------------------------------------------
// cat
// ---------------------------------------------------------------------------

struct CatCmd;
impl Command for CatCmd {
    fn name(&self) -> &str {
        "cat"
    }
    fn description(&self) -> &str {
        "Print a file"
    }
    fn usage(&self) -> &str {
        "cat [file]"
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<()> {
        require_args(self, args)?;
        let file = args[0];
        let text = env.content.file(file).ok_or_else(|| {
            FolioError::LookupMiss(format!("cat: {file}: No such file or directory"))
        })?;
        env.print(text.replace('\n', "<br>"), Severity::Normal);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// echo
// ---------------------------------------------------------------------------

struct EchoCmd;
impl Command for EchoCmd {
    fn name(&self) -> &str {
        "echo"
    }
    fn description(&self) -> &str {
        "Print arguments"
    }
    fn usage(&self) -> &str {
        "echo [text...]"
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<()> {
        env.print(args.join(" "), Severity::Normal);
        Ok(())
    }
}

/// Register file commands.
pub fn register_file_commands(reg: &mut CommandRegistry) {
    reg.register(Box::new(CatCmd));
    reg.register(Box::new(EchoCmd));
}
