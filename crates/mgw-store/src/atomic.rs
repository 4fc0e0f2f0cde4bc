//! Atomic write primitives
//!
//! Uses temp→rename pattern to ensure no partial writes

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{io_error, Result};

/// Sibling path the content is staged in before the rename
fn temp_path_for(target_path: &Path) -> PathBuf {
    let mut name = target_path
        .file_name()
        .map(OsString::from)
        .unwrap_or_default();
    name.push(".tmp");
    target_path.with_file_name(name)
}

/// Atomically write bytes to a file
///
/// Uses temp file + rename to ensure atomic write
///
/// # Errors
/// Returns `Persistence` if the directory, temp file, or rename fails.
pub fn atomic_write(target_path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = target_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| io_error("create data directory", parent, e))?;
    }

    let temp_path = temp_path_for(target_path);
    fs::write(&temp_path, content).map_err(|e| io_error("write snapshot", &temp_path, e))?;
    fs::rename(&temp_path, target_path)
        .map_err(|e| io_error("replace snapshot", target_path, e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_atomic_write() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("menu.json");

        atomic_write(&target, b"[]").unwrap();

        assert_eq!(fs::read(&target).unwrap(), b"[]");
    }

    #[test]
    fn test_atomic_write_replaces_existing() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("menu.json");

        atomic_write(&target, b"old").unwrap();
        atomic_write(&target, b"new").unwrap();

        assert_eq!(fs::read(&target).unwrap(), b"new");
    }

    #[test]
    fn test_atomic_write_creates_parent() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("data").join("menu.json");

        atomic_write(&target, b"nested").unwrap();

        assert_eq!(fs::read(&target).unwrap(), b"nested");
    }

    #[test]
    fn test_no_tmp_files_after_write() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("transactions.json");

        atomic_write(&target, b"clean").unwrap();

        let tmp_count = fs::read_dir(temp_dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| {
                e.file_name()
                    .to_str()
                    .map(|s| s.ends_with(".tmp"))
                    .unwrap_or(false)
            })
            .count();

        assert_eq!(tmp_count, 0);
    }

    #[test]
    fn test_temp_path_is_a_sibling() {
        let temp = temp_path_for(Path::new("/data/menu.json"));
        assert_eq!(temp, PathBuf::from("/data/menu.json.tmp"));
    }
}
