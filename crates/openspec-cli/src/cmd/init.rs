use super::{
    print_reports, project_name, stamp_openspec_version, FileAction, FileChange, ToolReport,
};
use crate::output::print_json;
use anyhow::Context;
use openspec_core::{
    config::Config, io, paths, OpenSpecError, SlashCommandConfigurator, SlashCommandRegistry,
};
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct InitReport {
    root: String,
    tools: Vec<ToolReport>,
}

/// `openspec init`: create the openspec directory tree and write slash
/// commands for the selected tools (every available tool when none given).
pub fn run(root: &Path, tools: &[String], json: bool) -> anyhow::Result<()> {
    let registry = SlashCommandRegistry::new();
    let selected: Vec<&dyn SlashCommandConfigurator> = if tools.is_empty() {
        registry.available().collect()
    } else {
        registry.resolve(tools).with_context(|| {
            format!("supported tools: {}", registry.tool_ids().join(", "))
        })?
    };

    if !json {
        println!("Initializing OpenSpec in: {}", root.display());
    }

    for dir in paths::scaffold_dirs(root, paths::OPENSPEC_DIR) {
        io::ensure_dir(&dir).with_context(|| format!("failed to create {}", dir.display()))?;
    }

    let mut config = match Config::load(root) {
        Ok(cfg) => cfg,
        Err(OpenSpecError::NotInitialized) => Config::new(project_name(root)),
        Err(e) => return Err(e).context("failed to load openspec/config.yaml"),
    };

    if !json {
        println!("\nWriting slash commands:");
    }
    let mut reports = Vec::new();
    for configurator in selected {
        let report = generate_for_tool(root, configurator)?;
        config.add_tool(configurator.tool_id());
        reports.push(report);
    }

    let previous = stamp_openspec_version(&mut config);
    config
        .save(root)
        .context("failed to write openspec/config.yaml")?;
    tracing::debug!(?previous, tools = ?config.tools, "saved config");

    if json {
        return print_json(&InitReport {
            root: root.display().to_string(),
            tools: reports,
        });
    }

    print_reports(&reports);
    println!("\nOpenSpec initialized successfully.");
    println!("Next: run /openspec:proposal (or your tool's equivalent) to draft a change.");
    Ok(())
}

fn generate_for_tool(
    root: &Path,
    configurator: &dyn SlashCommandConfigurator,
) -> anyhow::Result<ToolReport> {
    let existed: Vec<&str> = configurator
        .targets()
        .into_iter()
        .filter(|t| io::file_exists(&root.join(t.path)))
        .map(|t| t.path)
        .collect();

    let written = configurator
        .generate_all(root, paths::OPENSPEC_DIR)
        .with_context(|| format!("failed to write {} slash commands", configurator.tool_id()))?;

    let files = written
        .into_iter()
        .map(|path| {
            let action = if existed.contains(&path.as_str()) {
                FileAction::Updated
            } else {
                FileAction::Created
            };
            FileChange { path, action }
        })
        .collect();

    Ok(ToolReport {
        tool: configurator.tool_id().to_string(),
        files,
    })
}
