//! File system resource provider
//!
//! Search roots are plain directories, consulted in configuration order. A
//! resource's location is the path of the file it names.

use std::path::{Component, Path, PathBuf};

use dx_domain::error::{Error, Result};
use dx_domain::ports::{Resource, ResourceProvider};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::constants::DESCRIPTOR_SEARCH_DEPTH;
use crate::error_ext::ErrorContext;

/// Resource provider over local directories
#[derive(Debug, Clone)]
pub struct FileSystemResourceProvider {
    roots: Vec<PathBuf>,
    max_depth: usize,
}

impl FileSystemResourceProvider {
    /// Create a provider over `roots`, highest priority first
    pub fn new<I, P>(roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            roots: roots.into_iter().map(Into::into).collect(),
            max_depth: DESCRIPTOR_SEARCH_DEPTH,
        }
    }

    /// Limit how deep [`find_named`](ResourceProvider::find_named) descends
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Search roots in priority order
    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    fn existing_roots(&self) -> impl Iterator<Item = &PathBuf> {
        self.roots.iter().filter(|root| {
            let usable = root.is_dir();
            if !usable {
                debug!(root = %root.display(), "Skipping missing search root");
            }
            usable
        })
    }
}

fn location(path: &Path) -> Resource {
    Resource::new(path.display().to_string())
}

/// Relative paths must stay inside their search root
fn check_relative(relative: &str) -> Result<&Path> {
    let path = Path::new(relative);
    let escapes = path
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
    if relative.is_empty() || escapes {
        return Err(Error::invalid_argument(format!(
            "resource path '{relative}' must be relative to a search root"
        )));
    }
    Ok(path)
}

impl ResourceProvider for FileSystemResourceProvider {
    fn find_resources(&self, relative: &str) -> Result<Vec<Resource>> {
        let relative = check_relative(relative)?;
        Ok(self
            .existing_roots()
            .map(|root| root.join(relative))
            .filter(|candidate| candidate.is_file())
            .map(|candidate| location(&candidate))
            .collect())
    }

    fn find_named(&self, file_name: &str) -> Result<Vec<Resource>> {
        let mut found = Vec::new();
        for root in self.existing_roots() {
            for entry in WalkDir::new(root)
                .follow_links(true)
                .max_depth(self.max_depth)
                .sort_by_file_name()
            {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(e) => {
                        warn!(root = %root.display(), error = %e, "Skipping unreadable entry");
                        continue;
                    }
                };
                if entry.file_type().is_file() && entry.file_name() == file_name {
                    found.push(location(entry.path()));
                }
            }
        }
        Ok(found)
    }

    fn read_to_string(&self, resource: &Resource) -> Result<String> {
        std::fs::read_to_string(resource.location())
            .io_context(format!("Failed to read {resource}"))
    }

    fn provider_name(&self) -> &str {
        "filesystem"
    }
}
