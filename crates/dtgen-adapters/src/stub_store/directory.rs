//! Stub store backed by a directory of `*.stub` files.
//!
//! # Directory layout expected
//!
//! ```text
//! stubs/
//! ├── collector.stub
//! ├── handler.stub
//! ├── harvester.stub
//! └── ...
//! ```
//!
//! The stub name is the file stem. Files with other extensions and
//! sub-directories are ignored.

use std::{
    fs,
    path::{Path, PathBuf},
};

use dtgen_core::{
    application::{ApplicationError, ports::StubStore},
    error::DtgenResult,
};
use tracing::{debug, instrument};
use walkdir::WalkDir;

const STUB_EXTENSION: &str = "stub";

/// Name of the directory [`StubDirectory::discover`] looks for.
pub const STUBS_DIR_NAME: &str = "stubs";

#[derive(Debug, Clone)]
pub struct StubDirectory {
    dir: PathBuf,
}

impl StubDirectory {
    /// Use `dir` as the stub directory.
    ///
    /// # Errors
    ///
    /// `TemplateDirectoryNotFound` when `dir` is not an existing directory.
    pub fn open(dir: impl Into<PathBuf>) -> DtgenResult<Self> {
        let dir = dir.into();
        if !dir.is_dir() {
            return Err(ApplicationError::TemplateDirectoryNotFound { path: dir }.into());
        }
        Ok(Self { dir })
    }

    /// Find a `stubs` directory in `start` or the nearest of its ancestors.
    #[instrument(skip_all, fields(start = %start.display()))]
    pub fn discover(start: &Path) -> DtgenResult<Self> {
        for ancestor in start.ancestors() {
            let candidate = ancestor.join(STUBS_DIR_NAME);
            if candidate.is_dir() {
                debug!(dir = %candidate.display(), "Found stub directory");
                return Ok(Self { dir: candidate });
            }
        }
        Err(ApplicationError::TemplateDirectoryNotFound {
            path: start.join(STUBS_DIR_NAME),
        }
        .into())
    }

    pub fn path(&self) -> &Path {
        &self.dir
    }

    fn stub_path(&self, name: &str) -> Option<PathBuf> {
        let plain = !name.is_empty() && !name.contains(['/', '\\']) && name != "..";
        plain.then(|| self.dir.join(format!("{name}.{STUB_EXTENSION}")))
    }
}

impl StubStore for StubDirectory {
    fn load(&self, name: &str) -> DtgenResult<String> {
        let not_found = || ApplicationError::TemplateNotFound {
            name: name.to_string(),
        };

        let path = self.stub_path(name).ok_or_else(not_found)?;
        if !path.is_file() {
            return Err(not_found().into());
        }

        fs::read_to_string(&path).map_err(|e| {
            ApplicationError::FilesystemError {
                path: path.clone(),
                reason: format!("Failed to read stub: {e}"),
            }
            .into()
        })
    }

    fn list(&self) -> DtgenResult<Vec<String>> {
        let mut names = Vec::new();

        for entry in WalkDir::new(&self.dir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| ApplicationError::FilesystemError {
                path: self.dir.clone(),
                reason: format!("Failed to read stub directory: {e}"),
            })?;

            let path = entry.path();
            if !entry.file_type().is_file()
                || path.extension().and_then(|e| e.to_str()) != Some(STUB_EXTENSION)
            {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                names.push(stem.to_string());
            }
        }

        names.sort();
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dtgen_core::error::DtgenError;
    use tempfile::TempDir;

    fn stub_dir(files: &[(&str, &str)]) -> TempDir {
        let temp = TempDir::new().unwrap();
        for (name, content) in files {
            fs::write(temp.path().join(name), content).unwrap();
        }
        temp
    }

    #[test]
    fn open_rejects_missing_directory() {
        let err = StubDirectory::open("/absolutely/does/not/exist").unwrap_err();
        assert!(matches!(
            err,
            DtgenError::Application(ApplicationError::TemplateDirectoryNotFound { .. })
        ));
    }

    #[test]
    fn loads_stub_by_name() {
        let temp = stub_dir(&[("collector.stub", "class {{ className }} {}")]);
        let store = StubDirectory::open(temp.path()).unwrap();
        assert_eq!(store.load("collector").unwrap(), "class {{ className }} {}");
    }

    #[test]
    fn missing_stub_is_not_found() {
        let temp = stub_dir(&[]);
        let store = StubDirectory::open(temp.path()).unwrap();
        assert!(matches!(
            store.load("collector"),
            Err(DtgenError::Application(ApplicationError::TemplateNotFound { .. }))
        ));
    }

    #[test]
    fn names_with_separators_are_not_found() {
        let temp = stub_dir(&[("collector.stub", "x")]);
        let store = StubDirectory::open(temp.path()).unwrap();
        assert!(store.load("../collector").is_err());
        assert!(store.load("").is_err());
    }

    #[test]
    fn list_only_includes_stub_files() {
        let temp = stub_dir(&[
            ("handler.stub", ""),
            ("collector.stub", ""),
            ("README.md", ""),
        ]);
        fs::create_dir(temp.path().join("nested.stub")).unwrap();

        let store = StubDirectory::open(temp.path()).unwrap();
        assert_eq!(store.list().unwrap(), ["collector", "handler"]);
    }

    #[test]
    fn discover_walks_up() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(STUBS_DIR_NAME)).unwrap();
        let deep = temp.path().join("target/release");
        fs::create_dir_all(&deep).unwrap();

        let store = StubDirectory::discover(&deep).unwrap();
        assert_eq!(store.path(), temp.path().join(STUBS_DIR_NAME));
    }

    #[test]
    fn discover_prefers_nearest() {
        let temp = TempDir::new().unwrap();
        let inner = temp.path().join("a");
        fs::create_dir_all(inner.join(STUBS_DIR_NAME)).unwrap();
        fs::create_dir(temp.path().join(STUBS_DIR_NAME)).unwrap();

        let store = StubDirectory::discover(&inner).unwrap();
        assert_eq!(store.path(), inner.join(STUBS_DIR_NAME));
    }
}
