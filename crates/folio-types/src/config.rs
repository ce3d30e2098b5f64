//! Content table and console configuration.
//!
//! The content table is the static data every informational command looks
//! up: HTML sections, the small `cat` file table, profile strings and
//! quotes. It is read once at startup from TOML and never mutated after.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::{FolioError, Result};
use crate::severity::Severity;

/// The built-in content document compiled into the binary.
const BUILTIN_CONTENT: &str = include_str!("../content/portfolio.toml");

/// Console presentation and timing settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Prompt glyph shown before echoed commands.
    pub prompt: String,
    /// Number of scrollback entries visible at once.
    pub viewport_rows: usize,
    /// Delay before `disconnect` reports the reconnect.
    pub disconnect_delay_ms: u64,
    /// Delay before `connect` reports its result.
    pub connect_delay_ms: u64,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            prompt: "]".to_string(),
            viewport_rows: 24,
            disconnect_delay_ms: 3000,
            connect_delay_ms: 2000,
        }
    }
}

/// Fixed identity strings used by `whoami`, `pwd`, `version` and the link
/// commands.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Profile {
    pub user: String,
    pub home: String,
    pub version: String,
    pub github_url: String,
    /// Highlight reel; `clips` only prints a notice when unset.
    #[serde(default)]
    pub clips_url: Option<String>,
    pub linkedin: String,
}

/// One renderable block of static HTML.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Section {
    pub html: String,
    #[serde(default)]
    pub severity: Severity,
}

/// All static content the console renders.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContentTable {
    #[serde(default)]
    pub console: ConsoleConfig,
    pub profile: Profile,
    #[serde(default)]
    pub sections: BTreeMap<String, Section>,
    /// Files readable with `cat`, keyed by lowercase file name.
    #[serde(default)]
    pub files: BTreeMap<String, String>,
    #[serde(default)]
    pub quotes: Vec<String>,
}

impl ContentTable {
    /// Parse the content table compiled into the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_CONTENT)
    }

    /// Parse a content table from a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let table: Self = toml::from_str(source)?;
        table.validate()?;
        log::debug!(
            "Content table: {} sections, {} files, {} quotes",
            table.sections.len(),
            table.files.len(),
            table.quotes.len()
        );
        Ok(table)
    }

    /// Read and parse a content table from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    fn validate(&self) -> Result<()> {
        if self.profile.user.trim().is_empty() {
            return Err(FolioError::Config("profile.user must not be empty".into()));
        }
        if self.console.viewport_rows == 0 {
            return Err(FolioError::Config(
                "console.viewport_rows must be at least 1".into(),
            ));
        }
        // `cat` lower-cases its argument, so upper-case keys could never match.
        if let Some(name) = self.files.keys().find(|k| k.chars().any(char::is_uppercase)) {
            return Err(FolioError::Config(format!(
                "file name '{name}' must be lowercase"
            )));
        }
        Ok(())
    }

    /// Look up a named section.
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    /// Look up a `cat` file.
    pub fn file(&self, name: &str) -> Option<&str> {
        self.files.get(name).map(String::as_str)
    }

    /// Pick a quote deterministically from a seed.
    pub fn quote(&self, seed: u64) -> Option<&str> {
        if self.quotes.is_empty() {
            return None;
        }
        let idx = (seed % self.quotes.len() as u64) as usize;
        Some(self.quotes[idx].as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
        [profile]
        user = "guest"
        home = "/home/guest"
        version = "v0"
        github_url = "https://example.com"
        linkedin = "n/a"
    "#;

    #[test]
    fn builtin_parses() {
        let table = ContentTable::builtin().unwrap();
        assert_eq!(table.profile.user, "william-xu");
        assert_eq!(table.quotes.len(), 5);
    }

    #[test]
    fn builtin_has_every_info_section() {
        let table = ContentTable::builtin().unwrap();
        for name in [
            "about",
            "projects",
            "skills",
            "experience",
            "education",
            "resume",
            "contact",
        ] {
            assert!(table.section(name).is_some(), "missing section {name}");
        }
    }

    #[test]
    fn builtin_section_severities() {
        let table = ContentTable::builtin().unwrap();
        assert_eq!(table.section("about").unwrap().severity, Severity::Info);
        assert_eq!(table.section("projects").unwrap().severity, Severity::Normal);
        assert_eq!(table.section("contact").unwrap().severity, Severity::Success);
    }

    #[test]
    fn builtin_readme_has_newline() {
        let table = ContentTable::builtin().unwrap();
        let readme = table.file("readme.txt").unwrap();
        assert!(readme.starts_with("Welcome to William Xu's portfolio console!\n"));
    }

    #[test]
    fn builtin_console_defaults() {
        let table = ContentTable::builtin().unwrap();
        assert_eq!(table.console, ConsoleConfig::default());
    }

    #[test]
    fn minimal_table_uses_defaults() {
        let table = ContentTable::from_toml_str(MINIMAL).unwrap();
        assert!(table.sections.is_empty());
        assert!(table.files.is_empty());
        assert!(table.profile.clips_url.is_none());
        assert_eq!(table.console.prompt, "]");
    }

    #[test]
    fn missing_profile_is_an_error() {
        let err = ContentTable::from_toml_str("quotes = []").unwrap_err();
        assert!(matches!(err, FolioError::TomlParse(_)));
    }

    #[test]
    fn empty_user_rejected() {
        let src = MINIMAL.replace("\"guest\"", "\"  \"");
        let err = ContentTable::from_toml_str(&src).unwrap_err();
        assert!(format!("{err}").contains("profile.user"));
    }

    #[test]
    fn uppercase_file_name_rejected() {
        let src = format!("{MINIMAL}\n[files]\n\"README\" = \"hi\"\n");
        let err = ContentTable::from_toml_str(&src).unwrap_err();
        assert!(matches!(err, FolioError::Config(_)));
    }

    #[test]
    fn zero_viewport_rejected() {
        let src = format!("[console]\nviewport_rows = 0\n{MINIMAL}");
        assert!(ContentTable::from_toml_str(&src).is_err());
    }

    #[test]
    fn quote_wraps_seed() {
        let table = ContentTable::builtin().unwrap();
        assert_eq!(table.quote(0), table.quote(5));
        assert_ne!(table.quote(0), table.quote(1));
    }

    #[test]
    fn quote_none_when_empty() {
        let table = ContentTable::from_toml_str(MINIMAL).unwrap();
        assert!(table.quote(3).is_none());
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = ContentTable::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, FolioError::Io(_)));
    }
}
