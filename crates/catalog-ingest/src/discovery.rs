//! Data file discovery under a catalog base directory.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

/// Default data file extension.
pub const CSV_EXTENSION: &str = "csv";

/// Lists all CSV files under `root`, at any depth.
pub fn list_csv_files(root: &Path) -> Vec<PathBuf> {
    discover_files(root, CSV_EXTENSION)
}

/// Recursively lists files under `root` whose extension equals `extension`
/// (case-insensitive, without the leading dot).
///
/// Entries are visited depth-first, sorted by file name within each
/// directory. A missing root yields an empty list. Entries that cannot be
/// read (permissions, broken links) are skipped with a warning.
pub fn discover_files(root: &Path, extension: &str) -> Vec<PathBuf> {
    if !root.is_dir() {
        debug!(root = %root.display(), "base directory missing, nothing to discover");
        return Vec::new();
    }

    let extension = extension.trim_start_matches('.');
    let mut files = Vec::new();

    for entry_result in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry_result {
            Ok(entry) => entry,
            Err(err) => {
                warn!(
                    path = %err.path().unwrap_or(root).display(),
                    error = %err,
                    "skipping unreadable entry"
                );
                continue;
            }
        };

        // Skip directories
        if !entry.file_type().is_file() {
            continue;
        }

        if has_extension(entry.path(), extension) {
            files.push(entry.into_path());
        }
    }

    debug!(root = %root.display(), count = files.len(), "discovered data files");
    files
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case(extension))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, "id\n1\n").unwrap();
    }

    #[test]
    fn test_discovers_nested_files() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "Buenos Aires/UBA/Ingenieria/carreras.csv");
        touch(dir.path(), "Cordoba/UNC/carreras.CSV");
        touch(dir.path(), "Cordoba/UNC/notas.txt");
        touch(dir.path(), "root.csv");

        let files = list_csv_files(dir.path());

        assert_eq!(files.len(), 3);
        assert!(files.iter().all(|p| p.starts_with(dir.path())));
        assert!(!files.iter().any(|p| p.ends_with("notas.txt")));
    }

    #[test]
    fn test_order_is_sorted_by_name() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "b/x.csv");
        touch(dir.path(), "a/y.csv");
        touch(dir.path(), "a/b.csv");

        let files = list_csv_files(dir.path());
        let relative: Vec<_> = files
            .iter()
            .map(|p| p.strip_prefix(dir.path()).unwrap().to_path_buf())
            .collect();

        assert_eq!(
            relative,
            vec![
                PathBuf::from("a/b.csv"),
                PathBuf::from("a/y.csv"),
                PathBuf::from("b/x.csv"),
            ]
        );
    }

    #[test]
    fn test_missing_root_is_empty() {
        let dir = TempDir::new().unwrap();
        assert!(list_csv_files(&dir.path().join("nope")).is_empty());
    }

    #[test]
    fn test_custom_extension() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "a.tsv");
        touch(dir.path(), "b.csv");

        let files = discover_files(dir.path(), ".tsv");
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("a.tsv"));
    }
}
