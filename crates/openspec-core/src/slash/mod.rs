//! Slash command configurators.
//!
//! Each supported assistant gets one value implementing
//! [`SlashCommandConfigurator`]. Markdown tools rely on the trait defaults,
//! which keep the command body inside the OpenSpec marker block and refresh
//! only that block on later runs. TOML tools override generation and
//! rewrite the whole file (see [`toml_command`]).

pub mod claude;
pub mod gemini;
pub mod qwen;
pub mod registry;
pub mod toml_command;

pub use claude::ClaudeSlashCommandConfigurator;
pub use gemini::GeminiSlashCommandConfigurator;
pub use qwen::QwenSlashCommandConfigurator;
pub use registry::SlashCommandRegistry;

use crate::error::{OpenSpecError, Result};
use crate::io;
use crate::markers::OPENSPEC_MARKERS;
use crate::templates::{self, SlashCommandId};
use std::path::Path;

/// A command id paired with the file it is written to, relative to the project root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlashCommandTarget {
    pub id: SlashCommandId,
    pub path: &'static str,
}

pub trait SlashCommandConfigurator {
    fn tool_id(&self) -> &'static str;

    fn is_available(&self) -> bool {
        true
    }

    fn relative_path(&self, id: SlashCommandId) -> &'static str;

    fn frontmatter(&self, id: SlashCommandId) -> Option<String>;

    fn targets(&self) -> Vec<SlashCommandTarget> {
        SlashCommandId::all()
            .iter()
            .map(|&id| SlashCommandTarget {
                id,
                path: self.relative_path(id),
            })
            .collect()
    }

    fn body(&self, id: SlashCommandId) -> &'static str {
        templates::slash_command_body(id)
    }

    /// Write every command file. Existing files only have their marker block
    /// refreshed; missing files are created with frontmatter and markers.
    fn generate_all(&self, root: &Path, _openspec_dir: &str) -> Result<Vec<String>> {
        let mut written = Vec::new();

        for target in self.targets() {
            let body = self.body(target.id);
            let file_path = root.join(target.path);

            if io::file_exists(&file_path) {
                refresh_marker_block(&file_path, body)?;
            } else {
                let content = markdown_content(self.frontmatter(target.id), body);
                io::atomic_write(&file_path, content.as_bytes())?;
            }
            tracing::debug!(tool = self.tool_id(), path = target.path, "wrote slash command");
            written.push(target.path.to_string());
        }

        Ok(written)
    }

    /// Refresh the marker block of command files that already exist.
    fn update_existing(&self, root: &Path, _openspec_dir: &str) -> Result<Vec<String>> {
        let mut updated = Vec::new();

        for target in self.targets() {
            let file_path = root.join(target.path);
            if !io::file_exists(&file_path) {
                continue;
            }
            refresh_marker_block(&file_path, self.body(target.id))?;
            tracing::debug!(tool = self.tool_id(), path = target.path, "refreshed slash command");
            updated.push(target.path.to_string());
        }

        Ok(updated)
    }
}

fn markdown_content(frontmatter: Option<String>, body: &str) -> String {
    let managed = OPENSPEC_MARKERS.wrap(body);
    match frontmatter {
        Some(fm) => format!("{}\n\n{managed}\n", fm.trim()),
        None => format!("{managed}\n"),
    }
}

fn refresh_marker_block(path: &Path, body: &str) -> Result<()> {
    let replaced = io::replace_between_markers(
        path,
        OPENSPEC_MARKERS.start,
        OPENSPEC_MARKERS.end,
        &OPENSPEC_MARKERS.wrap(body),
    )?;
    if !replaced {
        return Err(OpenSpecError::MissingMarkers(path.to_path_buf()));
    }
    Ok(())
}
