//! Application services - orchestrate use cases.
//!
//! `ScaffoldService` drives a whole generation; it owns a `ProjectValidator`
//! and a `StubGenerator`, each of which talks to its own ports.

pub mod project_validator;
pub mod scaffold_service;
pub mod stub_generator;

pub use project_validator::ProjectValidator;
pub use scaffold_service::ScaffoldService;
pub use stub_generator::StubGenerator;
