use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::config::WriteMode;
use crate::utils::CatalogResult;

/// Replace the content of the catalog file with `contents`.
///
/// `Truncate` empties the file first and then writes, so a failure halfway
/// leaves it short. `Atomic` writes a sibling temporary file and renames it
/// over the target.
pub fn write_catalog_file(path: &Path, contents: &str, mode: WriteMode) -> CatalogResult<()> {
    match mode {
        WriteMode::Truncate => {
            debug!("Rewriting '{}' ({} bytes)", path.display(), contents.len());
            let mut file = std::fs::File::create(path)?;
            file.write_all(contents.as_bytes())?;
            file.flush()?;
        }
        WriteMode::Atomic => {
            let dir = match path.parent() {
                Some(p) if !p.as_os_str().is_empty() => p,
                _ => Path::new("."),
            };
            debug!(
                "Rewriting '{}' through a temporary file in '{}' ({} bytes)",
                path.display(),
                dir.display(),
                contents.len()
            );
            let mut tmp = NamedTempFile::new_in(dir)?;
            tmp.write_all(contents.as_bytes())?;
            tmp.as_file().sync_all()?;
            tmp.persist(path)?;
        }
    }
    Ok(())
}

/// Read the catalog file, or `None` when there is none yet.
pub fn read_catalog_file(path: &Path) -> CatalogResult<Option<String>> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_catalog_file(&dir.path().join("nope.txt")).unwrap().is_none());
    }

    #[test]
    fn both_modes_replace_previous_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("movies.txt");
        for mode in [WriteMode::Truncate, WriteMode::Atomic] {
            std::fs::write(&path, "a much longer previous content\n").unwrap();
            write_catalog_file(&path, "short\n", mode).unwrap();
            assert_eq!(read_catalog_file(&path).unwrap().as_deref(), Some("short\n"));
        }
    }

    #[test]
    fn atomic_write_leaves_no_temporary_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("movies.txt");
        write_catalog_file(&path, "content\n", WriteMode::Atomic).unwrap();
        let entries = std::fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(entries, 1);
    }

    #[test]
    fn write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("movies.txt");
        for mode in [WriteMode::Truncate, WriteMode::Atomic] {
            assert!(write_catalog_file(&path, "x", mode).is_err());
        }
    }
}
