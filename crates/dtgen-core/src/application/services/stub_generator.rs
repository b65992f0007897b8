//! Stub Generator - renders stubs and materializes the result.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, StubStore, TemplateRenderer},
    },
    domain::TemplateDataBag,
    error::DtgenResult,
};

pub struct StubGenerator {
    store: Box<dyn StubStore>,
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
}

impl StubGenerator {
    pub fn new(
        store: Box<dyn StubStore>,
        renderer: Box<dyn TemplateRenderer>,
        filesystem: Box<dyn Filesystem>,
    ) -> Self {
        Self {
            store,
            renderer,
            filesystem,
        }
    }

    /// Render the stub called `stub_name` with `bag`.
    #[instrument(skip(self, bag), fields(fields = bag.len()))]
    pub fn render(&self, stub_name: &str, bag: &TemplateDataBag) -> DtgenResult<String> {
        let source = self.store.load(stub_name)?;
        let rendered = self.renderer.render(stub_name, &source, bag)?;
        debug!(bytes = rendered.len(), "Stub rendered");
        Ok(rendered)
    }

    /// Write `content` to `target_dir/file_name`.
    ///
    /// An existing file is only replaced when `force` is set; otherwise
    /// nothing is touched and `FileAlreadyExists` is returned.
    #[instrument(skip(self, content), fields(target_dir = %target_dir.display()))]
    pub fn write_file(
        &self,
        content: &str,
        file_name: &str,
        target_dir: &Path,
        force: bool,
    ) -> DtgenResult<PathBuf> {
        let path = target_dir.join(file_name);

        if self.filesystem.exists(&path) {
            if !force {
                return Err(ApplicationError::FileAlreadyExists { path }.into());
            }
            info!(path = %path.display(), "Overwriting existing file");
        }

        self.filesystem.create_dir_all(target_dir)?;
        self.filesystem.write_file(&path, content)?;

        info!(path = %path.display(), bytes = content.len(), "File written");
        Ok(path)
    }

    /// Whether a file already exists at `path`.
    pub fn destination_exists(&self, path: &Path) -> bool {
        self.filesystem.exists(path)
    }

    /// Sorted names of every stub in the active store.
    pub fn available_stubs(&self) -> DtgenResult<Vec<String>> {
        let mut names = self.store.list()?;
        names.sort();
        names.dedup();
        Ok(names)
    }
}
