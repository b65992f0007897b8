//! Local filesystem adapter using std::fs.

use std::io::{self, Write};
use std::path::Path;

use dtgen_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{DtgenError, DtgenResult},
};
use tempfile::NamedTempFile;

/// Production filesystem implementation.
///
/// Files are written to a temporary file in the destination directory and
/// renamed into place, so an interrupted write never leaves a truncated
/// component behind.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> DtgenResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> DtgenResult<()> {
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };

        let mut tmp = temp_file_in(parent).map_err(|e| map_io_error(path, e, "create temp file"))?;
        // An overwrite keeps the mode of the file it replaces.
        if let Ok(existing) = std::fs::metadata(path) {
            tmp.as_file()
                .set_permissions(existing.permissions())
                .map_err(|e| map_io_error(path, e, "copy permissions"))?;
        }
        tmp.write_all(content.as_bytes())
            .and_then(|()| tmp.flush())
            .map_err(|e| map_io_error(path, e, "write file"))?;
        tmp.persist(path)
            .map_err(|e| map_io_error(path, e.error, "move file into place"))?;

        Ok(())
    }
}

/// Temp file with the mode a plain write would get: `0o666` minus the umask.
#[cfg(unix)]
fn temp_file_in(dir: &Path) -> io::Result<NamedTempFile> {
    use std::os::unix::fs::PermissionsExt;

    tempfile::Builder::new()
        .permissions(std::fs::Permissions::from_mode(0o666))
        .tempfile_in(dir)
}

#[cfg(not(unix))]
fn temp_file_in(dir: &Path) -> io::Result<NamedTempFile> {
    NamedTempFile::new_in(dir)
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> DtgenError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_full_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("weather_collector.ts");

        LocalFilesystem.write_file(&path, "export {}\n").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "export {}\n");
        assert!(LocalFilesystem.exists(&path));
    }

    #[test]
    fn replaces_existing_content_entirely() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.ts");
        std::fs::write(&path, "a much longer previous body").unwrap();

        LocalFilesystem.write_file(&path, "short").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "short");
    }

    #[test]
    fn leaves_no_temp_files_behind() {
        let dir = TempDir::new().unwrap();
        LocalFilesystem
            .write_file(&dir.path().join("a.ts"), "x")
            .unwrap();

        let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[cfg(unix)]
    fn mode(path: &Path) -> u32 {
        use std::os::unix::fs::PermissionsExt;
        std::fs::metadata(path).unwrap().permissions().mode() & 0o777
    }

    #[cfg(unix)]
    #[test]
    fn new_files_get_the_mode_of_a_plain_write() {
        let dir = TempDir::new().unwrap();
        let plain = dir.path().join("plain.ts");
        std::fs::write(&plain, "x").unwrap();

        let path = dir.path().join("buoy_collector.ts");
        LocalFilesystem.write_file(&path, "x").unwrap();

        assert_eq!(mode(&path), mode(&plain));
    }

    #[cfg(unix)]
    #[test]
    fn overwrite_keeps_existing_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.ts");
        std::fs::write(&path, "old").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o640)).unwrap();

        LocalFilesystem.write_file(&path, "new").unwrap();

        assert_eq!(mode(&path), 0o640);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn missing_parent_is_a_filesystem_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing/a.ts");

        let err = LocalFilesystem.write_file(&path, "x").unwrap_err();
        assert!(matches!(
            err,
            DtgenError::Application(ApplicationError::FilesystemError { .. })
        ));
        assert!(!path.exists());
    }

    #[test]
    fn creates_nested_directories() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("src/components/ocean");

        LocalFilesystem.create_dir_all(&nested).unwrap();
        assert!(nested.is_dir());
    }
}
