use super::toml_command::{generate_all_toml, update_existing_toml};
use super::SlashCommandConfigurator;
use crate::error::Result;
use crate::templates::SlashCommandId;
use std::path::Path;

const HEADER_COMMENT: &str = "OpenSpec managed content - do not modify manually";

/// Gemini CLI custom commands under `.gemini/commands/`.
#[derive(Debug, Default, Clone, Copy)]
pub struct GeminiSlashCommandConfigurator;

impl SlashCommandConfigurator for GeminiSlashCommandConfigurator {
    fn tool_id(&self) -> &'static str {
        "gemini"
    }

    fn relative_path(&self, id: SlashCommandId) -> &'static str {
        match id {
            SlashCommandId::Proposal => ".gemini/commands/openspec_proposal.toml",
            SlashCommandId::Apply => ".gemini/commands/openspec_apply.toml",
            SlashCommandId::Archive => ".gemini/commands/openspec_archive.toml",
        }
    }

    // Frontmatter is embedded in the TOML prompt instead.
    fn frontmatter(&self, _id: SlashCommandId) -> Option<String> {
        None
    }

    fn generate_all(&self, root: &Path, _openspec_dir: &str) -> Result<Vec<String>> {
        generate_all_toml(self, root, HEADER_COMMENT)
    }

    fn update_existing(&self, root: &Path, _openspec_dir: &str) -> Result<Vec<String>> {
        update_existing_toml(self, root, HEADER_COMMENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markers::OPENSPEC_MARKERS;
    use crate::templates;
    use tempfile::TempDir;

    #[test]
    fn paths_name_tool_dir_and_command() {
        let gemini = GeminiSlashCommandConfigurator;
        for &id in SlashCommandId::all() {
            let path = gemini.relative_path(id);
            assert!(path.starts_with(".gemini/commands/"));
            assert!(path.ends_with(&format!("openspec_{id}.toml")));
            assert!(gemini.frontmatter(id).is_none());
        }
    }

    #[test]
    fn generate_all_writes_every_target() {
        let dir = TempDir::new().unwrap();
        let written = GeminiSlashCommandConfigurator
            .generate_all(dir.path(), "openspec")
            .unwrap();

        assert_eq!(
            written,
            vec![
                ".gemini/commands/openspec_proposal.toml",
                ".gemini/commands/openspec_apply.toml",
                ".gemini/commands/openspec_archive.toml",
            ]
        );
        let apply =
            std::fs::read_to_string(dir.path().join(".gemini/commands/openspec_apply.toml"))
                .unwrap();
        assert!(apply.contains(templates::slash_command_body(SlashCommandId::Apply)));
        assert!(apply.contains("# OpenSpec managed content - do not modify manually\n[openspec]"));
        assert!(apply.contains(OPENSPEC_MARKERS.start));
    }

    #[test]
    fn generate_all_overwrites_edits() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".gemini/commands/openspec_archive.toml");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "description = \"mine\"\n").unwrap();

        let written = GeminiSlashCommandConfigurator
            .generate_all(dir.path(), "openspec")
            .unwrap();

        assert_eq!(written.len(), 3);
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(!content.contains("mine"));
        assert!(content.starts_with(
            "description = \"Archive a deployed OpenSpec change and update specs\""
        ));
    }

    #[test]
    fn write_failure_keeps_earlier_files() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join(".gemini/commands/openspec_archive.toml")).unwrap();

        let result = GeminiSlashCommandConfigurator.generate_all(dir.path(), "openspec");

        assert!(result.is_err());
        assert!(dir
            .path()
            .join(".gemini/commands/openspec_proposal.toml")
            .is_file());
        assert!(dir
            .path()
            .join(".gemini/commands/openspec_apply.toml")
            .is_file());
    }

    #[test]
    fn update_existing_on_empty_project_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let updated = GeminiSlashCommandConfigurator
            .update_existing(dir.path(), "openspec")
            .unwrap();

        assert!(updated.is_empty());
        assert!(!dir.path().join(".gemini").exists());
    }

    #[test]
    fn update_existing_refreshes_only_present_files() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".gemini/commands/openspec_apply.toml");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "stale").unwrap();

        let updated = GeminiSlashCommandConfigurator
            .update_existing(dir.path(), "openspec")
            .unwrap();

        assert_eq!(updated, vec![".gemini/commands/openspec_apply.toml"]);
        assert!(std::fs::read_to_string(&path)
            .unwrap()
            .contains("managed = true"));
        assert!(!dir
            .path()
            .join(".gemini/commands/openspec_proposal.toml")
            .exists());
        assert!(!dir
            .path()
            .join(".gemini/commands/openspec_archive.toml")
            .exists());
    }

    #[test]
    fn generate_then_update_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let gemini = GeminiSlashCommandConfigurator;
        let written = gemini.generate_all(dir.path(), "openspec").unwrap();
        let before: Vec<String> = written
            .iter()
            .map(|p| std::fs::read_to_string(dir.path().join(p)).unwrap())
            .collect();

        let updated = gemini.update_existing(dir.path(), "openspec").unwrap();

        assert_eq!(updated, written);
        let after: Vec<String> = updated
            .iter()
            .map(|p| std::fs::read_to_string(dir.path().join(p)).unwrap())
            .collect();
        assert_eq!(before, after);
    }
}
