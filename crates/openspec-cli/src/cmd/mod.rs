pub mod init;
pub mod tools;
pub mod update;

use openspec_core::config::Config;
use serde::Serialize;
use std::path::Path;

/// Version of the openspec binary embedded at compile time.
pub const OPENSPEC_BINARY_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileAction {
    Created,
    Updated,
}

impl FileAction {
    pub fn as_str(self) -> &'static str {
        match self {
            FileAction::Created => "created",
            FileAction::Updated => "updated",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FileChange {
    pub path: String,
    pub action: FileAction,
}

#[derive(Debug, Serialize)]
pub struct ToolReport {
    pub tool: String,
    pub files: Vec<FileChange>,
}

/// Print `  created: <path>` / `  updated: <path>` lines for every report.
pub fn print_reports(reports: &[ToolReport]) {
    for report in reports {
        for file in &report.files {
            println!("  {}: {}", file.action.as_str(), file.path);
        }
    }
}

/// Stamp the current binary version into the config if it differs.
/// Returns the previous version when a change was made.
pub fn stamp_openspec_version(config: &mut Config) -> Option<String> {
    if config.openspec_version.as_deref() == Some(OPENSPEC_BINARY_VERSION) {
        return None;
    }
    let previous = config
        .openspec_version
        .replace(OPENSPEC_BINARY_VERSION.to_string())
        .unwrap_or_else(|| "none".to_string());
    Some(previous)
}

pub fn project_name(root: &Path) -> String {
    root.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "project".to_string())
}
