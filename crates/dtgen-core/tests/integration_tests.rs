//! Drives the public API with hand-written port implementations.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use dtgen_core::prelude::*;

#[derive(Clone, Default)]
struct RecordingFs {
    files: Arc<Mutex<BTreeMap<PathBuf, String>>>,
}

impl RecordingFs {
    fn with_file(self, path: impl Into<PathBuf>) -> Self {
        self.files
            .lock()
            .unwrap()
            .insert(path.into(), String::new());
        self
    }

    fn get(&self, path: &Path) -> Option<String> {
        self.files.lock().unwrap().get(path).cloned()
    }
}

impl Filesystem for RecordingFs {
    fn exists(&self, path: &Path) -> bool {
        path.ends_with("src") || self.files.lock().unwrap().contains_key(path)
    }

    fn create_dir_all(&self, _path: &Path) -> DtgenResult<()> {
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> DtgenResult<()> {
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}

struct OneStub;

impl StubStore for OneStub {
    fn load(&self, name: &str) -> DtgenResult<String> {
        Ok(format!("{name}:{{{{className}}}}:{{{{route}}}}"))
    }

    fn list(&self) -> DtgenResult<Vec<String>> {
        Ok(ComponentKind::ALL
            .iter()
            .map(|k| k.stub_name().to_string())
            .collect())
    }
}

/// Replaces `{{key}}` with the bag's text value.
struct Substitute;

impl TemplateRenderer for Substitute {
    fn render(&self, _stub: &str, source: &str, bag: &TemplateDataBag) -> DtgenResult<String> {
        Ok(bag.keys().fold(source.to_string(), |acc, key| {
            let value = bag.text(key).unwrap_or_default();
            acc.replace(&format!("{{{{{key}}}}}"), value)
        }))
    }
}

struct Manifest(Option<PackageManifest>);

impl ManifestReader for Manifest {
    fn read_manifest(&self, _root: &Path) -> DtgenResult<Option<PackageManifest>> {
        Ok(self.0.clone())
    }
}

fn host_manifest() -> PackageManifest {
    PackageManifest {
        name: Some("port-twin".into()),
        dependencies: [(DEFAULT_HOST_FRAMEWORK.to_string(), "^0.6".to_string())].into(),
        ..Default::default()
    }
}

fn service(fs: &RecordingFs, manifest: Option<PackageManifest>) -> ScaffoldService {
    ScaffoldService::new(
        ProjectValidator::new(
            Box::new(Manifest(manifest)),
            Box::new(fs.clone()),
            DEFAULT_HOST_FRAMEWORK,
        ),
        StubGenerator::new(Box::new(OneStub), Box::new(Substitute), Box::new(fs.clone())),
    )
}

#[test]
fn generates_into_src_components() {
    let fs = RecordingFs::default();
    let request = GenerationRequest::new(
        "crane_sensor",
        ComponentOptions::defaults(ComponentKind::Collector),
    );

    let result = service(&fs, Some(host_manifest()))
        .generate(Path::new("/twin"), &request)
        .unwrap();

    let path = Path::new("/twin/src/components/crane_sensor_collector.ts");
    assert_eq!(result.path, path);
    assert_eq!(
        fs.get(path).as_deref(),
        Some("collector:CraneSensor:crane-sensor")
    );
    assert!(result.written);
    assert_eq!(result.bytes, result.content.len());
}

#[test]
fn facts_end_with_registration_hint() {
    let fs = RecordingFs::default();
    let request = GenerationRequest::new(
        "berths",
        ComponentOptions::defaults(ComponentKind::Handler),
    );

    let result = service(&fs, Some(host_manifest()))
        .generate(Path::new("/twin"), &request)
        .unwrap();

    assert!(
        result
            .facts
            .iter()
            .any(|f| f.label == "Endpoint" && f.value == "GET /api/berths")
    );
    assert!(
        result
            .facts
            .iter()
            .any(|f| f.value.contains("add Berths to your DigitalTwinEngine configuration"))
    );
}

#[test]
fn conflict_is_reported_on_dry_run() {
    let fs = RecordingFs::default().with_file("/twin/src/components/quay_map_manager.ts");
    let request = GenerationRequest::new(
        "quay",
        ComponentOptions::defaults(ComponentKind::MapManager),
    )
    .dry_run(true);

    let result = service(&fs, Some(host_manifest()))
        .generate(Path::new("/twin"), &request)
        .unwrap();

    assert!(!result.written);
    assert!(result.facts.iter().any(|f| f.label == "Conflict"));
    assert_eq!(
        fs.get(Path::new("/twin/src/components/quay_map_manager.ts"))
            .as_deref(),
        Some("")
    );
}

#[test]
fn missing_manifest_is_a_validation_error() {
    let fs = RecordingFs::default();
    let request = GenerationRequest::new(
        "x",
        ComponentOptions::defaults(ComponentKind::Collector),
    );

    let err = service(&fs, None)
        .generate(Path::new("/twin"), &request)
        .unwrap_err();

    assert_eq!(err.category(), ErrorCategory::Validation);
    assert!(!err.suggestions().is_empty());
}

#[test]
fn lists_stub_names() {
    let fs = RecordingFs::default();
    let stubs = service(&fs, None).available_stubs().unwrap();
    assert_eq!(stubs.len(), ComponentKind::ALL.len());
    assert!(stubs.windows(2).all(|w| w[0] < w[1]));
}
