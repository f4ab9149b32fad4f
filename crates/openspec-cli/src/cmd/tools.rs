use crate::output::{print_json, print_table};
use anyhow::Context;
use openspec_core::{config::Config, io, OpenSpecError, SlashCommandRegistry};
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct ToolStatus {
    tool: &'static str,
    available: bool,
    configured: bool,
    files_present: usize,
    files: Vec<&'static str>,
}

/// `openspec tools`: list supported tools and their scaffolding state.
pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let config = match Config::load(root) {
        Ok(cfg) => Some(cfg),
        Err(OpenSpecError::NotInitialized) => None,
        Err(e) => return Err(e).context("failed to load openspec/config.yaml"),
    };

    let registry = SlashCommandRegistry::new();
    let statuses: Vec<ToolStatus> = registry
        .all()
        .map(|c| {
            let files: Vec<&'static str> = c.targets().iter().map(|t| t.path).collect();
            let files_present = files
                .iter()
                .filter(|p| io::file_exists(&root.join(p)))
                .count();
            ToolStatus {
                tool: c.tool_id(),
                available: c.is_available(),
                configured: config.as_ref().is_some_and(|cfg| cfg.has_tool(c.tool_id())),
                files_present,
                files,
            }
        })
        .collect();

    if json {
        return print_json(&statuses);
    }

    let rows = statuses
        .iter()
        .map(|s| {
            vec![
                s.tool.to_string(),
                yes_no(s.available).to_string(),
                yes_no(s.configured).to_string(),
                format!("{}/{}", s.files_present, s.files.len()),
            ]
        })
        .collect();
    print_table(&["TOOL", "AVAILABLE", "CONFIGURED", "FILES"], rows);
    Ok(())
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
