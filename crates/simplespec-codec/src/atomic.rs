//! Atomic write primitive
//!
//! Writes go to a sibling temp file that is renamed over the target, so a
//! reader never observes a half-written spec file.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Atomically replace `target_path` with `content`
///
/// The parent directory must already exist.
pub fn atomic_write(target_path: &Path, content: &[u8]) -> std::io::Result<()> {
    let temp_path = temp_path_for(target_path);

    if let Err(err) = fs::write(&temp_path, content) {
        let _ = fs::remove_file(&temp_path);
        return Err(err);
    }

    fs::rename(&temp_path, target_path).map_err(|err| {
        let _ = fs::remove_file(&temp_path);
        err
    })
}

fn temp_path_for(target_path: &Path) -> PathBuf {
    let mut name = target_path
        .file_name()
        .map(OsString::from)
        .unwrap_or_default();
    name.push(".tmp");
    target_path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_atomic_write() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("spec.ini");

        atomic_write(&target, b"enum a = x\n").unwrap();

        assert_eq!(fs::read(&target).unwrap(), b"enum a = x\n");
    }

    #[test]
    fn test_atomic_write_replaces_existing() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("spec.ini");
        fs::write(&target, b"old contents that are longer").unwrap();

        atomic_write(&target, b"new").unwrap();

        assert_eq!(fs::read(&target).unwrap(), b"new");
    }

    #[test]
    fn test_missing_parent_fails() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("missing").join("spec.ini");

        assert!(atomic_write(&target, b"x").is_err());
        assert!(!target.exists());
    }

    #[test]
    fn test_no_tmp_files_after_write() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("spec.ini");

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
    fn test_temp_path_keeps_extension() {
        assert_eq!(
            temp_path_for(Path::new("/etc/spec.ini")),
            PathBuf::from("/etc/spec.ini.tmp")
        );
    }
}
