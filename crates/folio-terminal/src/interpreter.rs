//! Command trait, registry, and dispatch logic.
//!
//! A submitted line is lower-cased, split on whitespace runs, and resolved
//! against an insertion-ordered registry. Handlers never touch the
//! scrollback directly: they push [`RenderEffect`]s into the
//! [`Environment`] and the session applies them afterwards.

use std::collections::HashMap;
use std::time::Duration;

use folio_platform::TimeService;
use folio_types::config::ContentTable;
use folio_types::error::{FolioError, Result};
use folio_types::severity::Severity;

/// One visible consequence of running a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderEffect {
    /// Append an HTML payload to the scrollback.
    Output { payload: String, severity: Severity },
    /// Drop every scrollback entry.
    Clear,
    /// Ask the link service to open a URL in a new browsing context.
    OpenUrl(String),
    /// Append an entry once `delay` has elapsed on the session clock.
    Defer {
        delay: Duration,
        payload: String,
        severity: Severity,
    },
}

/// Read-only description of a registered command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSummary {
    pub name: String,
    pub description: String,
    pub hidden: bool,
}

/// Everything a command may read, plus the sink for its effects.
///
/// Deliberately exposes no way to reach the line editor or the registry.
pub struct Environment<'a> {
    /// Static content the informational commands render.
    pub content: &'a ContentTable,
    /// Session clock for `date`, `uptime` and quote selection.
    pub time: Option<&'a dyn TimeService>,
    /// Every registered command, in registry order.
    pub catalog: &'a [CommandSummary],
    effects: Vec<RenderEffect>,
}

impl<'a> Environment<'a> {
    pub fn new(
        content: &'a ContentTable,
        time: Option<&'a dyn TimeService>,
        catalog: &'a [CommandSummary],
    ) -> Self {
        Self {
            content,
            time,
            catalog,
            effects: Vec::new(),
        }
    }

    /// Render an output entry.
    pub fn print(&mut self, payload: impl Into<String>, severity: Severity) {
        self.effects.push(RenderEffect::Output {
            payload: payload.into(),
            severity,
        });
    }

    /// Wipe the scrollback.
    pub fn clear(&mut self) {
        self.effects.push(RenderEffect::Clear);
    }

    /// Open an external link.
    pub fn open_url(&mut self, url: impl Into<String>) {
        self.effects.push(RenderEffect::OpenUrl(url.into()));
    }

    /// Render an output entry after `delay`.
    pub fn defer(&mut self, delay: Duration, payload: impl Into<String>, severity: Severity) {
        self.effects.push(RenderEffect::Defer {
            delay,
            payload: payload.into(),
            severity,
        });
    }

    /// Drain the emitted effects in order.
    pub fn take_effects(&mut self) -> Vec<RenderEffect> {
        std::mem::take(&mut self.effects)
    }
}

/// A single executable command.
pub trait Command {
    /// The command name (what the user types). Must be lowercase.
    fn name(&self) -> &str;

    /// One-line description for `help`.
    fn description(&self) -> &str;

    /// Usage string (e.g. "cat \[file\]").
    fn usage(&self) -> &str;

    /// Hidden commands are listed by `ls` but left out of `help`.
    fn hidden(&self) -> bool {
        false
    }

    /// Execute the command with the given arguments and environment.
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<()>;
}

/// Fail with the command's usage line when no argument was given.
pub(crate) fn require_args(cmd: &dyn Command, args: &[&str]) -> Result<()> {
    if args.is_empty() {
        return Err(FolioError::usage(format!("Usage: {}", cmd.usage())));
    }
    Ok(())
}

/// Registry of available commands with dispatch.
///
/// Iteration order is registration order; suggestions and `help` rely on it.
pub struct CommandRegistry {
    commands: Vec<Box<dyn Command>>,
    catalog: Vec<CommandSummary>,
    index: HashMap<String, usize>,
}

impl CommandRegistry {
    /// Create an empty command registry.
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            catalog: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Register a command.
    ///
    /// A name that is already taken is replaced in place, keeping its
    /// position. Names that could never be typed (empty, upper-case, or
    /// containing whitespace) are rejected.
    pub fn register(&mut self, cmd: Box<dyn Command>) {
        let name = cmd.name().to_string();
        if name.is_empty()
            || name.chars().any(char::is_whitespace)
            || name != name.to_lowercase()
        {
            log::warn!("Ignoring command with untypeable name {name:?}");
            return;
        }
        let summary = CommandSummary {
            name: name.clone(),
            description: cmd.description().to_string(),
            hidden: cmd.hidden(),
        };
        match self.index.get(&name) {
            Some(&slot) => {
                log::warn!("Command '{name}' registered twice; replacing");
                self.commands[slot] = cmd;
                self.catalog[slot] = summary;
            },
            None => {
                self.index.insert(name, self.commands.len());
                self.commands.push(cmd);
                self.catalog.push(summary);
            },
        }
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Whether `name` is registered (exact, already lower-cased).
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Registered names in registry order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.catalog.iter().map(|c| c.name.as_str())
    }

    /// Summaries of every command in registry order.
    pub fn catalog(&self) -> &[CommandSummary] {
        &self.catalog
    }

    /// Parse and run one submitted line.
    ///
    /// Never fails: an unknown name or a failing handler becomes a single
    /// error-severity output effect in `env`.
    pub fn dispatch(&self, line: &str, env: &mut Environment<'_>) {
        let Some((name, args)) = parse_line(line) else {
            return;
        };
        let args: Vec<&str> = args.iter().map(String::as_str).collect();

        let result = match self.index.get(&name) {
            Some(&slot) => {
                log::debug!("dispatch {name} ({} args)", args.len());
                self.commands[slot].execute(&args, env)
            },
            None => Err(FolioError::UnknownCommand(name)),
        };

        if let Err(e) = result {
            log::debug!("command failed: {e}");
            env.print(e.to_string(), Severity::Error);
        }
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Split a submitted line into a command name and its arguments.
///
/// The whole line is lower-cased first, so arguments are lower-case too.
/// Runs of whitespace collapse. Returns `None` for a blank line.
fn parse_line(line: &str) -> Option<(String, Vec<String>)> {
    let lowered = line.trim().to_lowercase();
    let mut tokens = lowered.split_whitespace().map(str::to_string);
    let name = tokens.next()?;
    Some((name, tokens.collect()))
}

// ---------------------------------------------------------------------------
// help / ls
// ---------------------------------------------------------------------------

struct HelpCmd;
impl Command for HelpCmd {
    fn name(&self) -> &str {
        "help"
    }
    fn description(&self) -> &str {
        "Show this help message"
    }
    fn usage(&self) -> &str {
        "help"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<()> {
        let rows: Vec<String> = env
            .catalog
            .iter()
            .filter(|c| !c.hidden)
            .map(|c| {
                format!(
                    "<div class=\"help-command\"><span class=\"help-command-name\">{}</span>\
                     <span class=\"help-command-desc\">{}</span></div>",
                    c.name, c.description
                )
            })
            .collect();
        env.print(rows.join("\n"), Severity::Normal);
        Ok(())
    }
}

/// Separator between names in `ls` output.
pub const LS_SEPARATOR: &str = "  ";

struct LsCmd;
impl Command for LsCmd {
    fn name(&self) -> &str {
        "ls"
    }
    fn description(&self) -> &str {
        "List available commands"
    }
    fn usage(&self) -> &str {
        "ls"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<()> {
        let mut names: Vec<&str> = env.catalog.iter().map(|c| c.name.as_str()).collect();
        names.sort_unstable();
        env.print(names.join(LS_SEPARATOR), Severity::Info);
        Ok(())
    }
}

/// Register `help`.
pub(crate) fn register_help(reg: &mut CommandRegistry) {
    reg.register(Box::new(HelpCmd));
}

/// Register `ls`.
pub(crate) fn register_ls(reg: &mut CommandRegistry) {
    reg.register(Box::new(LsCmd));
}

#[cfg(test)]
mod tests {
    use super::*;

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

    struct NamedCmd(&'static str, &'static str);
    impl Command for NamedCmd {
        fn name(&self) -> &str {
            self.0
        }
        fn description(&self) -> &str {
            self.1
        }
        fn usage(&self) -> &str {
            self.0
        }
        fn execute(&self, _: &[&str], env: &mut Environment<'_>) -> Result<()> {
            env.print(self.1, Severity::Normal);
            Ok(())
        }
    }

    fn content() -> ContentTable {
        ContentTable::builtin().unwrap()
    }

    fn run(reg: &CommandRegistry, line: &str) -> Vec<RenderEffect> {
        let content = content();
        let mut env = Environment::new(&content, None, reg.catalog());
        reg.dispatch(line, &mut env);
        env.take_effects()
    }

    fn output(payload: &str, severity: Severity) -> RenderEffect {
        RenderEffect::Output {
            payload: payload.to_string(),
            severity,
        }
    }

    #[test]
    fn register_and_dispatch() {
        let mut reg = CommandRegistry::new();
        reg.register(Box::new(EchoCmd));
        assert_eq!(
            run(&reg, "echo hello world"),
            vec![output("hello world", Severity::Normal)]
        );
    }

    #[test]
    fn unknown_command_renders_one_error() {
        let reg = CommandRegistry::new();
        assert_eq!(
            run(&reg, "sudo rm -rf /"),
            vec![output(
                "Command not found: sudo. Type 'help' for available commands.",
                Severity::Error
            )]
        );
    }

    #[test]
    fn unknown_command_name_is_lowercased() {
        let reg = CommandRegistry::new();
        assert_eq!(
            run(&reg, "SUDO"),
            vec![output(
                "Command not found: sudo. Type 'help' for available commands.",
                Severity::Error
            )]
        );
    }

    #[test]
    fn blank_input_emits_nothing() {
        let mut reg = CommandRegistry::new();
        reg.register(Box::new(EchoCmd));
        assert!(run(&reg, "").is_empty());
        assert!(run(&reg, "   \t ").is_empty());
    }

    #[test]
    fn whitespace_runs_collapse() {
        let mut reg = CommandRegistry::new();
        reg.register(Box::new(EchoCmd));
        assert_eq!(
            run(&reg, "  echo a b   c  "),
            vec![output("a b c", Severity::Normal)]
        );
    }

    #[test]
    fn tab_separated_args() {
        let mut reg = CommandRegistry::new();
        reg.register(Box::new(EchoCmd));
        assert_eq!(run(&reg, "echo\ta\tb"), vec![output("a b", Severity::Normal)]);
    }

    #[test]
    fn command_case_insensitive_and_args_lowercased() {
        let mut reg = CommandRegistry::new();
        reg.register(Box::new(EchoCmd));
        assert_eq!(run(&reg, "ECHO Hi"), vec![output("hi", Severity::Normal)]);
    }

    #[test]
    fn failing_handler_renders_usage_error() {
        struct NeedsArg;
        impl Command for NeedsArg {
            fn name(&self) -> &str {
                "need"
            }
            fn description(&self) -> &str {
                ""
            }
            fn usage(&self) -> &str {
                "need <thing>"
            }
            fn execute(&self, args: &[&str], _: &mut Environment<'_>) -> Result<()> {
                require_args(self, args)
            }
        }
        let mut reg = CommandRegistry::new();
        reg.register(Box::new(NeedsArg));
        assert_eq!(
            run(&reg, "need"),
            vec![output("Usage: need <thing>", Severity::Error)]
        );
        assert!(run(&reg, "need x").is_empty());
    }

    #[test]
    fn register_replaces_in_place() {
        let mut reg = CommandRegistry::new();
        reg.register(Box::new(NamedCmd("a", "first")));
        reg.register(Box::new(NamedCmd("b", "b")));
        reg.register(Box::new(NamedCmd("a", "second")));
        assert_eq!(reg.len(), 2);
        assert_eq!(reg.names().collect::<Vec<_>>(), ["a", "b"]);
        assert_eq!(run(&reg, "a"), vec![output("second", Severity::Normal)]);
        assert_eq!(reg.catalog()[0].description, "second");
    }

    #[test]
    fn untypeable_names_are_rejected() {
        let mut reg = CommandRegistry::new();
        reg.register(Box::new(NamedCmd("", "empty")));
        reg.register(Box::new(NamedCmd("Upper", "upper")));
        reg.register(Box::new(NamedCmd("two words", "space")));
        assert!(reg.is_empty());
    }

    #[test]
    fn names_keep_registration_order() {
        let mut reg = CommandRegistry::new();
        for name in ["zeta", "alpha", "mid"] {
            reg.register(Box::new(NamedCmd(name, "")));
        }
        assert_eq!(reg.names().collect::<Vec<_>>(), ["zeta", "alpha", "mid"]);
        assert!(reg.contains("alpha"));
        assert!(!reg.contains("beta"));
    }

    #[test]
    fn default_creates_empty_registry() {
        assert!(CommandRegistry::default().is_empty());
    }

    #[test]
    fn parse_line_splits_name_and_args() {
        assert_eq!(
            parse_line("  Cat  README.txt "),
            Some(("cat".to_string(), vec!["readme.txt".to_string()]))
        );
        assert_eq!(parse_line(" \t "), None);
    }

    #[test]
    fn unicode_args() {
        let mut reg = CommandRegistry::new();
        reg.register(Box::new(EchoCmd));
        assert_eq!(
            run(&reg, "echo ÉCOLE 日本"),
            vec![output("école 日本", Severity::Normal)]
        );
    }

    #[test]
    fn ls_lists_sorted_names_once() {
        let mut reg = CommandRegistry::new();
        reg.register(Box::new(NamedCmd("zeta", "")));
        register_ls(&mut reg);
        reg.register(Box::new(NamedCmd("alpha", "")));
        assert_eq!(
            run(&reg, "ls"),
            vec![output("alpha  ls  zeta", Severity::Info)]
        );
    }

    #[test]
    fn help_skips_hidden_commands() {
        struct Secret;
        impl Command for Secret {
            fn name(&self) -> &str {
                "noclip"
            }
            fn description(&self) -> &str {
                "secret"
            }
            fn usage(&self) -> &str {
                "noclip"
            }
            fn hidden(&self) -> bool {
                true
            }
            fn execute(&self, _: &[&str], _: &mut Environment<'_>) -> Result<()> {
                Ok(())
            }
        }
        let mut reg = CommandRegistry::new();
        register_help(&mut reg);
        reg.register(Box::new(Secret));
        let effects = run(&reg, "help");
        let RenderEffect::Output { payload, severity } = &effects[0] else {
            panic!("expected output, got {effects:?}");
        };
        assert_eq!(*severity, Severity::Normal);
        assert!(payload.contains("<span class=\"help-command-name\">help</span>"));
        assert!(!payload.contains("noclip"));
    }

    #[test]
    fn environment_effects_keep_order() {
        let content = content();
        let mut env = Environment::new(&content, None, &[]);
        env.clear();
        env.print("x", Severity::Success);
        env.open_url("https://example.com");
        env.defer(Duration::from_secs(2), "later", Severity::Info);
        let effects = env.take_effects();
        assert_eq!(effects.len(), 4);
        assert_eq!(effects[0], RenderEffect::Clear);
        assert_eq!(effects[2], RenderEffect::OpenUrl("https://example.com".into()));
        assert!(env.take_effects().is_empty());
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn unknown_first_token_always_one_error(
                token in "[a-z]{1,12}",
                rest in "( [a-z0-9]{0,6}){0,4}",
            ) {
                let mut reg = CommandRegistry::new();
                reg.register(Box::new(EchoCmd));
                prop_assume!(token != "echo");
                let effects = run(&reg, &format!("{token}{rest}"));
                prop_assert_eq!(
                    effects,
                    vec![output(
                        &format!("Command not found: {token}. Type 'help' for available commands."),
                        Severity::Error,
                    )]
                );
            }
        }
    }
}
