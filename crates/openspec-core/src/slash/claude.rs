use super::SlashCommandConfigurator;
use crate::templates::{self, SlashCommandId};

/// Claude Code custom commands under `.claude/commands/openspec/`.
///
/// Uses the default markdown behavior: YAML frontmatter followed by the
/// marker-wrapped body.
#[derive(Debug, Default, Clone, Copy)]
pub struct ClaudeSlashCommandConfigurator;

impl SlashCommandConfigurator for ClaudeSlashCommandConfigurator {
    fn tool_id(&self) -> &'static str {
        "claude"
    }

    fn relative_path(&self, id: SlashCommandId) -> &'static str {
        match id {
            SlashCommandId::Proposal => ".claude/commands/openspec/proposal.md",
            SlashCommandId::Apply => ".claude/commands/openspec/apply.md",
            SlashCommandId::Archive => ".claude/commands/openspec/archive.md",
        }
    }

    fn frontmatter(&self, id: SlashCommandId) -> Option<String> {
        let (name, tags) = match id {
            SlashCommandId::Proposal => ("OpenSpec: Proposal", "[openspec, change]"),
            SlashCommandId::Apply => ("OpenSpec: Apply", "[openspec, apply]"),
            SlashCommandId::Archive => ("OpenSpec: Archive", "[openspec, archive]"),
        };
        Some(format!(
            "---\nname: {name}\ndescription: {}.\ncategory: OpenSpec\ntags: {tags}\n---",
            templates::description(id)
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markers::OPENSPEC_MARKERS;
    use tempfile::TempDir;

    #[test]
    fn first_generation_writes_frontmatter_and_markers() {
        let dir = TempDir::new().unwrap();
        let written = ClaudeSlashCommandConfigurator
            .generate_all(dir.path(), "openspec")
            .unwrap();
        assert_eq!(written[0], ".claude/commands/openspec/proposal.md");

        let content = std::fs::read_to_string(dir.path().join(&written[0])).unwrap();
        assert!(content.starts_with("---\nname: OpenSpec: Proposal\n"));
        assert!(content.contains(&format!("---\n\n{}\n", OPENSPEC_MARKERS.start)));
        assert!(content.ends_with(&format!("{}\n", OPENSPEC_MARKERS.end)));
    }

    #[test]
    fn regeneration_keeps_user_frontmatter_edits() {
        let dir = TempDir::new().unwrap();
        let claude = ClaudeSlashCommandConfigurator;
        claude.generate_all(dir.path(), "openspec").unwrap();

        let path = dir.path().join(".claude/commands/openspec/apply.md");
        let edited = std::fs::read_to_string(&path)
            .unwrap()
            .replace("category: OpenSpec", "category: Mine");
        std::fs::write(&path, edited).unwrap();

        let updated = claude.update_existing(dir.path(), "openspec").unwrap();

        assert_eq!(updated.len(), 3);
        assert!(std::fs::read_to_string(&path)
            .unwrap()
            .contains("category: Mine"));
    }
}
