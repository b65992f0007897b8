//! dtgen Core - component scaffolding engine.
//!
//! This crate provides the domain and application layers for `dt`, the
//! digitaltwin-core component generator, following hexagonal (ports and
//! adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            dtgen-cli (dt)               │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ ScaffoldService -> ProjectValidator     │
//! │                 -> StubGenerator        │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ Filesystem, StubStore, TemplateRenderer │
//! │ ManifestReader                          │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     dtgen-adapters (Infrastructure)     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! The domain layer (naming, component options, data bag, project info) has
//! no I/O and no knowledge of the adapters.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use dtgen_core::prelude::*;
//!
//! let service = ScaffoldService::new(
//!     ProjectValidator::new(manifests, filesystem, DEFAULT_HOST_FRAMEWORK),
//!     StubGenerator::new(stubs, renderer, filesystem),
//! );
//! let request = GenerationRequest::new(
//!     "weather-station",
//!     ComponentOptions::defaults(ComponentKind::Collector),
//! );
//! let result = service.generate(project_root, &request)?;
//! println!("{}", result.relative_path.display());
//! ```

pub mod application;
pub mod domain;
pub mod error;

/// Public API - what external crates should use.
pub mod prelude {
    pub use crate::application::{
        ApplicationError, ProjectValidator, ScaffoldService, StubGenerator,
        ports::{Filesystem, ManifestReader, StubStore, TemplateRenderer},
    };
    pub use crate::domain::{
        CaseHelper, CommonOptions, ComponentKind, ComponentOptions, DEFAULT_HOST_FRAMEWORK,
        DerivedFact, DomainError, GenerationRequest, GenerationResult, HttpMethod,
        NamingVariants, PackageManifest, ProjectInfo, TemplateDataBag, TemplateValue,
        TriggerMode,
    };
    pub use crate::error::{DtgenError, DtgenResult, ErrorCategory};
}

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
