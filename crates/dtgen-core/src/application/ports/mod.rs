//! Application ports (traits) for external dependencies.
//!
//! Driven ports are called by the application and implemented by
//! infrastructure in `dtgen-adapters`:
//!
//! - `Filesystem`: existence checks and whole-file writes
//! - `StubStore`: stub template lookup
//! - `TemplateRenderer`: template rendering
//! - `ManifestReader`: `package.json` parsing
//!
//! The driving side is the `dt` binary, which calls the services directly.

pub mod output;

pub use output::{Filesystem, ManifestReader, StubStore, TemplateRenderer};

#[cfg(test)]
pub use output::{MockFilesystem, MockManifestReader, MockStubStore, MockTemplateRenderer};
