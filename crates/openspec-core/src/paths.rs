use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Directory constants
// ---------------------------------------------------------------------------

pub const OPENSPEC_DIR: &str = "openspec";
pub const SPECS_DIR: &str = "specs";
pub const CHANGES_DIR: &str = "changes";
pub const ARCHIVE_DIR: &str = "changes/archive";

pub const CONFIG_FILE: &str = "config.yaml";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn openspec_dir(root: &Path, openspec_dir: &str) -> PathBuf {
    root.join(openspec_dir)
}

pub fn config_path(root: &Path) -> PathBuf {
    root.join(OPENSPEC_DIR).join(CONFIG_FILE)
}

/// Directories created under the openspec dir on `openspec init`.
pub fn scaffold_dirs(root: &Path, openspec_dir: &str) -> Vec<PathBuf> {
    let base = self::openspec_dir(root, openspec_dir);
    vec![
        base.clone(),
        base.join(SPECS_DIR),
        base.join(CHANGES_DIR),
        base.join(ARCHIVE_DIR),
    ]
}
