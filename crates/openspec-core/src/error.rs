use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OpenSpecError {
    #[error("not initialized: run 'openspec init'")]
    NotInitialized,

    #[error("unknown tool '{0}'")]
    UnknownTool(String),

    #[error("unknown slash command '{0}': expected proposal, apply, or archive")]
    UnknownCommand(String),

    #[error("missing OpenSpec markers in {}", .0.display())]
    MissingMarkers(PathBuf),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, OpenSpecError>;
