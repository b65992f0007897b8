//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `dtgen-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{PackageManifest, TemplateDataBag};
use crate::error::DtgenResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `dtgen_adapters::filesystem::LocalFilesystem` (production)
/// - `dtgen_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> DtgenResult<()>;

    /// Write the full content of a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &str) -> DtgenResult<()>;
}

/// Port for stub template lookup.
///
/// Implemented by:
/// - `dtgen_adapters::stub_store::StubDirectory` (`*.stub` files on disk)
/// - `dtgen_adapters::stub_store::BuiltinStubs` (stubs embedded in the binary)
#[cfg_attr(test, mockall::automock)]
pub trait StubStore: Send + Sync {
    /// Source text of the stub called `name`.
    ///
    /// Fails with `TemplateNotFound` when there is no such stub.
    fn load(&self, name: &str) -> DtgenResult<String>;

    /// Names of every available stub, sorted.
    fn list(&self) -> DtgenResult<Vec<String>>;
}

/// Port for template rendering.
///
/// Implemented by:
/// - `dtgen_adapters::renderer::JinjaRenderer` (minijinja)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRenderer: Send + Sync {
    /// Compile `source` and render it with `bag`.
    ///
    /// `stub_name` is only used for error reporting.
    fn render(&self, stub_name: &str, source: &str, bag: &TemplateDataBag) -> DtgenResult<String>;
}

/// Port for reading a project's `package.json`.
///
/// Implemented by:
/// - `dtgen_adapters::manifest::PackageJsonReader`
#[cfg_attr(test, mockall::automock)]
pub trait ManifestReader: Send + Sync {
    /// The parsed manifest at `root`, or `None` when there is none.
    ///
    /// A manifest that exists but cannot be parsed is an error.
    fn read_manifest(&self, root: &Path) -> DtgenResult<Option<PackageManifest>>;
}
