use super::toml_command::{generate_all_toml, update_existing_toml};
use super::SlashCommandConfigurator;
use crate::error::Result;
use crate::templates::SlashCommandId;
use std::path::Path;

const HEADER_COMMENT: &str = "OpenSpec managed content";

/// Qwen CLI custom commands under `.qwen/commands/`.
#[derive(Debug, Default, Clone, Copy)]
pub struct QwenSlashCommandConfigurator;

impl SlashCommandConfigurator for QwenSlashCommandConfigurator {
    fn tool_id(&self) -> &'static str {
        "qwen"
    }

    fn relative_path(&self, id: SlashCommandId) -> &'static str {
        match id {
            SlashCommandId::Proposal => ".qwen/commands/openspec_proposal.toml",
            SlashCommandId::Apply => ".qwen/commands/openspec_apply.toml",
            SlashCommandId::Archive => ".qwen/commands/openspec_archive.toml",
        }
    }

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
