//! Recursive discovery of data files under an input directory.

use std::path::{Path, PathBuf};

use crate::error::{IngestError, Result};

fn is_csv(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
}

fn collect_csv_files(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();

        if path.is_dir() {
            collect_csv_files(&path, files)?;
        } else if path.is_file() && is_csv(&path) {
            files.push(path);
        }
    }
    Ok(())
}

/// Lists all CSV files under `dir`, descending into subdirectories.
///
/// Extension match is case-insensitive. Results are sorted by full path.
pub fn list_csv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    collect_csv_files(dir, &mut files)?;
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_list_csv_files_recursive() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("2024").join("q1");
        std::fs::create_dir_all(&nested).unwrap();

        for path in [
            dir.path().join("sales.csv"),
            dir.path().join("README.txt"),
            dir.path().join("Orders.CSV"),
            nested.join("returns.csv"),
        ] {
            std::fs::write(&path, "header\ndata").unwrap();
        }

        let files = list_csv_files(dir.path()).unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|p| {
                p.strip_prefix(dir.path())
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect();
        assert_eq!(names, vec!["2024/q1/returns.csv", "Orders.CSV", "sales.csv"]);
    }

    #[test]
    fn test_list_csv_files_missing_dir() {
        let result = list_csv_files(Path::new("/nonexistent/flow/input"));
        assert!(matches!(result, Err(IngestError::DirectoryNotFound { .. })));
    }
}
