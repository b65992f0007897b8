//! In-memory stub store preloaded with the stubs embedded in the binary.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use dtgen_core::{
    application::{ApplicationError, ports::StubStore},
    error::DtgenResult,
};

/// Stubs shipped with dtgen, one per component kind.
const EMBEDDED: [(&str, &str); 6] = [
    ("collector", include_str!("../../stubs/collector.stub")),
    ("handler", include_str!("../../stubs/handler.stub")),
    ("harvester", include_str!("../../stubs/harvester.stub")),
    ("assets_manager", include_str!("../../stubs/assets_manager.stub")),
    ("tileset_manager", include_str!("../../stubs/tileset_manager.stub")),
    ("map_manager", include_str!("../../stubs/map_manager.stub")),
];

/// Thread-safe in-memory stub store.
#[derive(Debug, Clone)]
pub struct BuiltinStubs {
    inner: Arc<RwLock<HashMap<String, String>>>,
}

impl BuiltinStubs {
    /// Store holding every embedded stub.
    pub fn new() -> Self {
        let stubs = EMBEDDED
            .iter()
            .map(|(name, source)| ((*name).to_string(), (*source).to_string()))
            .collect();
        Self {
            inner: Arc::new(RwLock::new(stubs)),
        }
    }

    /// Store with no stubs at all.
    pub fn empty() -> Self {
        Self {
            inner: Arc::default(),
        }
    }

    /// Add or replace a stub.
    pub fn insert(&self, name: impl Into<String>, source: impl Into<String>) -> DtgenResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.insert(name.into(), source.into());
        Ok(())
    }
}

impl Default for BuiltinStubs {
    fn default() -> Self {
        Self::new()
    }
}

impl StubStore for BuiltinStubs {
    fn load(&self, name: &str) -> DtgenResult<String> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.get(name).cloned().ok_or_else(|| {
            ApplicationError::TemplateNotFound {
                name: name.to_string(),
            }
            .into()
        })
    }

    fn list(&self) -> DtgenResult<Vec<String>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        let mut names: Vec<_> = inner.keys().cloned().collect();
        names.sort();
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dtgen_core::domain::ComponentKind;
    use dtgen_core::error::DtgenError;

    #[test]
    fn ships_a_stub_for_every_kind() {
        let store = BuiltinStubs::new();
        for kind in ComponentKind::ALL {
            let source = store.load(kind.stub_name()).unwrap();
            assert!(source.contains("{{ className }}"), "{} stub", kind.stub_name());
        }
        assert_eq!(store.list().unwrap().len(), ComponentKind::ALL.len());
    }

    #[test]
    fn unknown_stub_is_not_found() {
        let err = BuiltinStubs::new().load("gizmo").unwrap_err();
        assert!(matches!(
            err,
            DtgenError::Application(ApplicationError::TemplateNotFound { ref name }) if name == "gizmo"
        ));
    }

    #[test]
    fn insert_overrides_and_extends() {
        let store = BuiltinStubs::empty();
        assert!(store.list().unwrap().is_empty());

        store.insert("custom", "// {{ className }}").unwrap();
        assert_eq!(store.load("custom").unwrap(), "// {{ className }}");
        assert_eq!(store.list().unwrap(), ["custom"]);
    }
}
