//! Informational commands backed by content-table sections:
//! about, projects, skills, experience, education, contact, resume.

use folio_types::error::{FolioError, Result};

use crate::interpreter::{Command, CommandRegistry, Environment};

/// Placeholder in a section body that is swapped for a quote.
const QUOTE_MARKER: &str = "{quote}";

/// Renders the content-table section that shares its name.
struct SectionCmd {
    name: &'static str,
    description: &'static str,
}

impl Command for SectionCmd {
    fn name(&self) -> &str {
        self.name
    }
    fn description(&self) -> &str {
        self.description
    }
    fn usage(&self) -> &str {
        self.name
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<()> {
        let content = env.content;
        let section = content.section(self.name).ok_or_else(|| {
            FolioError::LookupMiss(format!("{}: no content available", self.name))
        })?;
        let mut html = section.html.trim().to_string();
        if html.contains(QUOTE_MARKER) {
            let quote = content.quote(quote_seed(env)).unwrap_or_default();
            html = html.replace(QUOTE_MARKER, quote);
        }
        env.print(html, section.severity);
        Ok(())
    }
}

/// Seed for quote selection: seconds into the current wall-clock day.
fn quote_seed(env: &Environment<'_>) -> u64 {
    env.time
        .and_then(|t| t.now().ok())
        .map(|now| now.hour as u64 * 3600 + now.minute as u64 * 60 + now.second as u64)
        .unwrap_or(0)
}

/// Register the section commands.
pub fn register_content_commands(reg: &mut CommandRegistry) {
    let sections = [
        ("about", "Display information about William"),
        ("projects", "Show featured projects"),
        ("skills", "List technical skills"),
        ("experience", "Show work experience"),
        ("education", "Display educational background"),
        ("contact", "Get contact information"),
        ("resume", "Display resume summary"),
    ];
    for (name, description) in sections {
        reg.register(Box::new(SectionCmd { name, description }));
    }
}
