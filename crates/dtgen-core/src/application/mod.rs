//! Application layer for dtgen.
//!
//! This layer contains:
//! - **Services**: use case orchestration (ScaffoldService, StubGenerator, ProjectValidator)
//! - **Ports**: interface definitions (traits) for external dependencies
//! - **Errors**: application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business rules itself. Naming and option rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{ProjectValidator, ScaffoldService, StubGenerator};

pub use ports::{Filesystem, ManifestReader, StubStore, TemplateRenderer};

pub use error::ApplicationError;
