//! Stub store adapters.

mod builtin;
mod directory;

pub use builtin::BuiltinStubs;
pub use directory::{STUBS_DIR_NAME, StubDirectory};
