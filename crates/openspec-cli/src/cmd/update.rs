use super::{print_reports, stamp_openspec_version, FileAction, FileChange, ToolReport};
use crate::output::print_json;
use anyhow::Context;
use openspec_core::{config::Config, paths, OpenSpecError, SlashCommandRegistry};
use std::path::Path;

/// `openspec update`: refresh slash command files that already exist.
///
/// Requires an initialized project. Never creates command files for tools the
/// project has not scaffolded. A tool that fails to refresh does not stop the
/// others; failures are reported after the config is saved.
pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let mut config = match Config::load(root) {
        Ok(cfg) => cfg,
        Err(OpenSpecError::NotInitialized) => anyhow::bail!(
            "not initialized: run 'openspec init' first (no openspec/config.yaml found in {})",
            root.display()
        ),
        Err(e) => return Err(e).context("failed to load openspec/config.yaml"),
    };
    let registry = SlashCommandRegistry::new();

    if !json {
        println!("Updating OpenSpec slash commands in: {}", root.display());
    }

    let mut reports = Vec::new();
    let mut failures: Vec<(&'static str, OpenSpecError)> = Vec::new();
    for configurator in registry.available() {
        let updated = match configurator.update_existing(root, paths::OPENSPEC_DIR) {
            Ok(updated) => updated,
            Err(e) => {
                tracing::debug!(tool = configurator.tool_id(), error = %e, "update failed");
                failures.push((configurator.tool_id(), e));
                continue;
            }
        };
        if updated.is_empty() {
            continue;
        }
        config.add_tool(configurator.tool_id());
        reports.push(ToolReport {
            tool: configurator.tool_id().to_string(),
            files: updated
                .into_iter()
                .map(|path| FileChange {
                    path,
                    action: FileAction::Updated,
                })
                .collect(),
        });
    }

    let previous = stamp_openspec_version(&mut config);
    config
        .save(root)
        .context("failed to save openspec/config.yaml")?;

    if json {
        print_json(&reports)?;
    } else {
        if reports.is_empty() && failures.is_empty() {
            println!("  no slash command files found; run 'openspec init' to create them");
        } else {
            print_reports(&reports);
        }
        if failures.is_empty() {
            match previous {
                Some(previous) => println!(
                    "\nOpenSpec updated ({previous} → {}).",
                    super::OPENSPEC_BINARY_VERSION
                ),
                None => println!("\nOpenSpec slash commands are up to date."),
            }
        }
    }

    if failures.is_empty() {
        return Ok(());
    }
    for (tool, e) in &failures {
        eprintln!("  failed: {tool}: {e}");
    }
    let tools: Vec<&str> = failures.iter().map(|(tool, _)| *tool).collect();
    anyhow::bail!("failed to update slash commands for: {}", tools.join(", "))
}
