//! Target descriptor entity
//!
//! One page-plus-module combination to optimize and republish. All staged
//! paths are derived from the page directory, the target name and the staging
//! root, so two descriptors with the same `page_dir` and `name` share files.

use std::path::{Component, Path, PathBuf};

use serde::Serialize;

use crate::domain::value_objects::BundleName;

/// Prefix of the optimizer's output file name
pub const BUILT_PREFIX: &str = "built-";

/// A page target to optimize
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetDescriptor {
    /// Page directory, relative to the bundle's web folder and to staging
    pub page_dir: String,
    /// Target (module and HTML) base name
    pub name: String,
    /// Owning bundle
    pub bundle: BundleName,
    /// `staging/page_dir`
    pub staged_page_dir: PathBuf,
    /// `staging/page_dir/built-<name>.js`
    pub staged_minified_path: PathBuf,
    /// `staging/page_dir/<name>.html`
    pub staged_html_path: PathBuf,
}

impl TargetDescriptor {
    pub fn new(
        page_dir: impl Into<String>,
        name: impl Into<String>,
        bundle: impl Into<BundleName>,
        staging_dir: &Path,
    ) -> Self {
        let page_dir = page_dir.into();
        let name = name.into();
        let staged_page_dir = staging_dir.join(relative_page_dir(&page_dir));
        let staged_minified_path = staged_page_dir.join(built_file_name(&name));
        let staged_html_path = staged_page_dir.join(format!("{}.html", name));

        Self {
            page_dir,
            name,
            bundle: bundle.into(),
            staged_page_dir,
            staged_minified_path,
            staged_html_path,
        }
    }

    /// Logical module name handed to the optimizer: `page_dir/name`
    pub fn module_name(&self) -> String {
        format!("{}/{}", self.page_dir, self.name)
    }

    /// Where published files land: `bundles_root/bundle/web_folder/page_dir`
    pub fn original_folder(&self, bundles_root: &Path, web_folder: &str) -> PathBuf {
        bundles_root
            .join(self.bundle.as_str())
            .join(web_folder)
            .join(relative_page_dir(&self.page_dir))
    }

    /// Whether `page_dir` was written as an absolute path (`/edit`, `C:\edit`)
    pub fn has_rooted_page_dir(&self) -> bool {
        Path::new(&self.page_dir)
            .components()
            .any(|c| matches!(c, Component::RootDir | Component::Prefix(_)))
    }

    /// Key two descriptors must not share (they would write the same staged files)
    pub fn staging_key(&self) -> (&str, &str) {
        (&self.page_dir, &self.name)
    }

    /// Names of attributes that were missing (empty) in the target list
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.page_dir.is_empty() {
            missing.push("pageDir");
        }
        if self.name.is_empty() {
            missing.push("name");
        }
        if self.bundle.is_empty() {
            missing.push("bundle");
        }
        missing
    }
}

impl std::fmt::Display for TargetDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.module_name(), self.bundle)
    }
}

/// `page_dir` without root or drive prefix, so joining it never replaces the base
fn relative_page_dir(page_dir: &str) -> PathBuf {
    Path::new(page_dir)
        .components()
        .filter(|c| matches!(c, Component::Normal(_) | Component::ParentDir))
        .collect()
}

/// `built-<name>.js`
pub fn built_file_name(name: &str) -> String {
    format!("{}{}.js", BUILT_PREFIX, name)
}
