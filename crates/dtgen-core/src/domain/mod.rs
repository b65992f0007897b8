//! Core domain layer for dtgen.
//!
//! Pure logic only: naming conventions, component kinds and their options,
//! the template data bag and the shape of a host project. All I/O is reached
//! through the ports in `crate::application::ports`.

pub mod component;
pub mod data_bag;
pub mod error;
pub mod generation;
pub mod naming;
pub mod project;

pub use component::{
    COMPONENT_EXTENSION, CommonOptions, ComponentKind, ComponentOptions, DEFAULT_CONTENT_TYPE,
    DEFAULT_SCHEDULE, HttpMethod, TriggerMode,
};
pub use data_bag::{TemplateDataBag, TemplateValue};
pub use error::DomainError;
pub use generation::{
    COMPONENTS_DIR, DerivedFact, GenerationRequest, GenerationResult, GenerationStage,
};
pub use naming::{
    CaseHelper, NamingVariants, to_camel_case, to_kebab_case, to_pascal_case, to_snake_case,
};
pub use project::{DEFAULT_HOST_FRAMEWORK, PackageManifest, ProjectInfo};
