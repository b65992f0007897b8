//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates one component generation:
//! 1. Validate the host project and the request
//! 2. Derive naming variants and assemble the data bag
//! 3. Render the component kind's stub
//! 4. Write the file (or report what would happen in a dry run)
//! 5. Summarize the result with derived facts

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::{
    application::services::{ProjectValidator, StubGenerator},
    domain::{
        DerivedFact, GenerationRequest, GenerationResult, GenerationStage, NamingVariants,
        ProjectInfo, TemplateDataBag,
    },
    error::DtgenResult,
};

/// Main scaffolding service.
pub struct ScaffoldService {
    validator: ProjectValidator,
    generator: StubGenerator,
}

impl ScaffoldService {
    pub fn new(validator: ProjectValidator, generator: StubGenerator) -> Self {
        Self {
            validator,
            generator,
        }
    }

    /// Generate one component inside the project at `project_root`.
    ///
    /// Every check runs before the single write, so a failed generation
    /// leaves the project untouched.
    #[instrument(
        skip_all,
        fields(
            kind = %request.kind(),
            name = %request.name,
            root = %project_root.display(),
            dry_run = request.dry_run
        )
    )]
    pub fn generate(
        &self,
        project_root: &Path,
        request: &GenerationRequest,
    ) -> DtgenResult<GenerationResult> {
        let kind = request.kind();

        debug!(stage = %GenerationStage::Validate, "Stage started");
        let project = self.validator.inspect(project_root)?;
        request.validate()?;

        debug!(stage = %GenerationStage::DeriveNaming, "Stage started");
        let naming = NamingVariants::derive(request.name.as_str());
        let bag = TemplateDataBag::assemble(&naming, request.options.template_fields(&naming));

        debug!(stage = %GenerationStage::Render, stub = kind.stub_name(), "Stage started");
        let content = self.generator.render(kind.stub_name(), &bag)?;

        let target_dir = components_root(project_root, &project).join(request.components_dir());
        let file_name = kind.file_name(&naming);
        let route = request.options.route(&naming);
        let mut facts = request.options.facts(&route);

        let (path, written) = if request.dry_run {
            debug!(stage = %GenerationStage::DryRunReport, "Stage started");
            let path = target_dir.join(&file_name);
            if self.generator.destination_exists(&path) {
                let note = if request.force {
                    "existing file would be overwritten"
                } else {
                    "file already exists (use --force to overwrite)"
                };
                facts.push(DerivedFact::new("Conflict", note));
            }
            (path, false)
        } else {
            debug!(stage = %GenerationStage::Write, "Stage started");
            let path =
                self.generator
                    .write_file(&content, &file_name, &target_dir, request.force)?;
            (path, true)
        };

        debug!(stage = %GenerationStage::Summarize, "Stage started");
        facts.push(DerivedFact::new(
            "Next step",
            format!("add {} to your DigitalTwinEngine configuration", naming.class_name),
        ));
        if !project.has_typescript {
            facts.push(DerivedFact::new(
                "Warning",
                "no tsconfig.json found; the generated file is TypeScript",
            ));
        }

        let relative_path = path
            .strip_prefix(project_root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.clone());

        info!(path = %relative_path.display(), written, "Component generated");

        Ok(GenerationResult {
            kind,
            bytes: content.len(),
            path,
            relative_path,
            written,
            content,
            facts,
        })
    }

    /// Validate the project at `project_root` and describe it.
    pub fn project_info(&self, project_root: &Path) -> DtgenResult<ProjectInfo> {
        self.validator.inspect(project_root)
    }

    /// Sorted names of every available stub.
    pub fn available_stubs(&self) -> DtgenResult<Vec<String>> {
        self.generator.available_stubs()
    }

    pub fn host_framework(&self) -> &str {
        self.validator.host_framework()
    }
}

fn components_root(project_root: &Path, project: &ProjectInfo) -> PathBuf {
    if project.src_dir == "." {
        project_root.to_path_buf()
    } else {
        project_root.join(&project.src_dir)
    }
}
