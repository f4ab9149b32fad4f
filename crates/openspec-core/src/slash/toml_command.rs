//! TOML command files shared by Gemini-style assistants.
//!
//! The whole file is owned by openspec: `generate_all_toml` rewrites every
//! target unconditionally, `update_existing_toml` rewrites only targets that
//! are already on disk and never creates new ones.

use super::SlashCommandConfigurator;
use crate::error::Result;
use crate::io;
use crate::markers::OPENSPEC_MARKERS;
use crate::templates::{self, SlashCommandId};
use std::path::Path;

const PROMPT_DELIMITER: &str = "\"\"\"";
const MANAGED_VERSION: &str = "1.0";

/// Render the TOML command file for `id`.
///
/// `body` is embedded verbatim inside a `"""` block; a body containing that
/// delimiter produces an invalid file.
pub fn render_toml_command(id: SlashCommandId, body: &str, header_comment: &str) -> String {
    if body.contains(PROMPT_DELIMITER) {
        tracing::warn!(command = %id, "command body contains \"\"\"; generated TOML will not parse");
    }

    let description = templates::description(id);
    let markdown = format!("---\ndescription: {description}\n---\n\n{body}");

    format!(
        r#"description = "{description}"

prompt = """
{markdown}
"""

# {header_comment}
[openspec]
managed = true
version = "{MANAGED_VERSION}"
markers = {{ start = "{start}", end = "{end}" }}
"#,
        start = OPENSPEC_MARKERS.start,
        end = OPENSPEC_MARKERS.end,
    )
}

/// Render and write every target of `configurator`. Returns all target paths.
pub fn generate_all_toml<C>(configurator: &C, root: &Path, header_comment: &str) -> Result<Vec<String>>
where
    C: SlashCommandConfigurator + ?Sized,
{
    let mut written = Vec::new();

    for target in configurator.targets() {
        let body = configurator.body(target.id);
        let content = render_toml_command(target.id, body, header_comment);
        io::atomic_write(&root.join(target.path), content.as_bytes())?;
        tracing::debug!(tool = configurator.tool_id(), path = target.path, "wrote slash command");
        written.push(target.path.to_string());
    }

    Ok(written)
}

/// Re-render targets that already exist on disk. Missing targets are skipped.
pub fn update_existing_toml<C>(
    configurator: &C,
    root: &Path,
    header_comment: &str,
) -> Result<Vec<String>>
where
    C: SlashCommandConfigurator + ?Sized,
{
    let mut updated = Vec::new();

    for target in configurator.targets() {
        let file_path = root.join(target.path);
        if !io::file_exists(&file_path) {
            continue;
        }
        let body = configurator.body(target.id);
        let content = render_toml_command(target.id, body, header_comment);
        io::atomic_write(&file_path, content.as_bytes())?;
        tracing::debug!(tool = configurator.tool_id(), path = target.path, "refreshed slash command");
        updated.push(target.path.to_string());
    }

    Ok(updated)
}
