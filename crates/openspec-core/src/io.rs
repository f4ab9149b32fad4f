use crate::error::Result;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Write `data` to `path` through a sibling tempfile that is renamed into place.
///
/// Missing parent directories are created and any existing file is replaced,
/// so a command file is never observed half-written.
pub fn atomic_write(path: &Path, data: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(data)?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Create a directory and all parents, idempotent.
pub fn ensure_dir(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path)?;
    Ok(())
}

/// True if `path` exists and is a regular file.
pub fn file_exists(path: &Path) -> bool {
    path.is_file()
}

/// Replace content between `start_marker` and `end_marker` (inclusive) in a file.
///
/// Returns `true` if both markers were found and the file was updated, `false`
/// if the file or either marker is missing (file unchanged).
pub fn replace_between_markers(
    path: &Path,
    start_marker: &str,
    end_marker: &str,
    replacement: &str,
) -> Result<bool> {
    if !path.exists() {
        return Ok(false);
    }
    let content = std::fs::read_to_string(path)?;
    let Some(start_pos) = content.find(start_marker) else {
        return Ok(false);
    };
    let search_from = start_pos + start_marker.len();
    let Some(end_offset) = content[search_from..].find(end_marker) else {
        return Ok(false);
    };
    let end_pos = search_from + end_offset + end_marker.len();

    let mut updated = String::with_capacity(content.len());
    updated.push_str(&content[..start_pos]);
    updated.push_str(replacement);
    updated.push_str(&content[end_pos..]);

    atomic_write(path, updated.as_bytes())?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn atomic_write_creates_parents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".gemini/commands/openspec_apply.toml");
        atomic_write(&path, b"data").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "data");
    }

    #[test]
    fn atomic_write_overwrites() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cmd.toml");
        atomic_write(&path, b"old").unwrap();
        atomic_write(&path, b"new").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn file_exists_ignores_directories() {
        let dir = TempDir::new().unwrap();
        assert!(!file_exists(dir.path()));
        let path = dir.path().join("a.txt");
        assert!(!file_exists(&path));
        std::fs::write(&path, "x").unwrap();
        assert!(file_exists(&path));
    }

    #[test]
    fn replace_between_markers_keeps_surroundings() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cmd.md");
        std::fs::write(&path, "head\n<!-- S -->\nold\n<!-- E -->\ntail\n").unwrap();

        let replaced =
            replace_between_markers(&path, "<!-- S -->", "<!-- E -->", "<!-- S -->\nnew\n<!-- E -->")
                .unwrap();

        assert!(replaced);
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "head\n<!-- S -->\nnew\n<!-- E -->\ntail\n"
        );
    }

    #[test]
    fn replace_between_markers_without_end_marker_is_noop() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cmd.md");
        std::fs::write(&path, "<!-- S -->\nold\n").unwrap();

        let replaced = replace_between_markers(&path, "<!-- S -->", "<!-- E -->", "x").unwrap();

        assert!(!replaced);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<!-- S -->\nold\n");
    }
}
