//! Built-in command registration.

use crate::interpreter::{self, CommandRegistry};
use crate::{content_commands, file_commands, fun_commands, link_commands, system_commands};

/// Register every built-in command.
///
/// Order matters: it is the order `help` lists commands in and the order
/// suggestions are offered.
pub fn register_builtins(reg: &mut CommandRegistry) {
    interpreter::register_help(reg);
    content_commands::register_content_commands(reg);
    link_commands::register_link_commands(reg);
    system_commands::register_system_commands(reg);
    interpreter::register_ls(reg);
    file_commands::register_file_commands(reg);
    fun_commands::register_fun_commands(reg);
    log::debug!("Registered {} built-in commands", reg.len());
}


#[cfg(test)]
mod tests {
    use super::test_support::Harness;
    use crate::interpreter::{LS_SEPARATOR, RenderEffect};
    use folio_types::severity::Severity;

    const EXPECTED: &[&str] = &[
        "help",
        "about",
        "projects",
        "skills",
        "experience",
        "education",
        "contact",
        "resume",
        "github",
        "linkedin",
        "clips",
        "clear",
        "whoami",
        "pwd",
        "date",
        "uptime",
        "version",
        "ls",
        "cat",
        "echo",
        "disconnect",
        "connect",
        "fps_max",
        "bind",
        "sv_cheats",
        "noclip",
        "quit",
    ];

    #[test]
    fn registers_every_builtin_in_order() {
        let h = Harness::new();
        assert_eq!(h.reg.names().collect::<Vec<_>>(), EXPECTED);
    }

    #[test]
    fn every_registered_name_dispatches() {
        let h = Harness::new();
        for name in h.reg.names() {
            for effect in h.run(name) {
                if let RenderEffect::Output { payload, .. } = effect {
                    assert!(
                        !payload.starts_with("Command not found"),
                        "{name} was not found"
                    );
                }
            }
        }
    }

    #[test]
    fn ls_matches_sorted_registry() {
        let h = Harness::new();
        let (payload, severity) = h.single("ls");
        assert_eq!(severity, Severity::Info);
        let listed: Vec<&str> = payload.split(LS_SEPARATOR).collect();
        let mut expected: Vec<&str> = h.reg.names().collect();
        expected.sort_unstable();
        assert_eq!(listed, expected);
    }

    #[test]
    fn help_lists_visible_commands_in_order() {
        let h = Harness::new();
        let (payload, _) = h.single("help");
        let about = payload.find(">about<").unwrap();
        let resume = payload.find(">resume<").unwrap();
        assert!(about < resume);
        assert!(payload.contains("Display information about William"));
        assert!(!payload.contains(">noclip<"));
        assert!(!payload.contains(">fps_max<"));
    }
}
