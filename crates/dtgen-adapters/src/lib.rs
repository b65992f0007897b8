//! Infrastructure adapters for dtgen.
//!
//! This crate implements the ports defined in `dtgen_core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod manifest;
pub mod renderer;
pub mod stub_store;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use manifest::PackageJsonReader;
pub use renderer::JinjaRenderer;
pub use stub_store::{BuiltinStubs, StubDirectory};
