//! File system sink for generated artifacts
//!
//! The root namespace maps onto the destination directory; every namespace
//! segment below it is one sub-directory, and each class lands in `<Name>.php`.

use anyhow::{Context, Result};
use cqrsgen_codegen::{Artifact, ArtifactSink};
use cqrsgen_core::ClassRef;
use cqrsgen_core::types::trim_ns;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct FileWriter {
    directory: PathBuf,
    root_namespace: String,
    dry_run: bool,
    written: Vec<PathBuf>,
}

impl FileWriter {
    pub fn new(directory: impl Into<PathBuf>, root_namespace: &str) -> Self {
        Self {
            directory: directory.into(),
            root_namespace: trim_ns(root_namespace).to_string(),
            dry_run: false,
            written: Vec::new(),
        }
    }

    /// Only compute target paths, leaving the file system untouched.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Target file of a class.
    pub fn path_for(&self, class: &ClassRef) -> PathBuf {
        let namespace = class.namespace().unwrap_or_default();
        let relative = if namespace == self.root_namespace {
            ""
        } else {
            namespace
                .strip_prefix(self.root_namespace.as_str())
                .and_then(|rest| rest.strip_prefix('\\'))
                .unwrap_or(namespace)
        };
        let mut path = self.directory.clone();
        path.extend(relative.split('\\').filter(|segment| !segment.is_empty()));
        path.push(format!("{}.php", class.short()));
        path
    }

    /// Paths handled so far, in order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl ArtifactSink for FileWriter {
    type Error = anyhow::Error;

    fn accept(&mut self, artifact: &Artifact) -> Result<()> {
        let path = self.path_for(&artifact.class_ref());
        if !self.dry_run {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {:?}", parent))?;
            }
            std::fs::write(&path, artifact.render())
                .with_context(|| format!("Failed to write artifact: {:?}", path))?;
        }
        debug!(path = %path.display(), kind = %artifact.kind, dry_run = self.dry_run, "wrote artifact");
        self.written.push(path);
        Ok(())
    }
}
