//! TOML Target List Loader
//!
//! Reads the target-list document:
//!
//! ```toml
//! [[target]]
//! name = "requirejs"
//!
//! [[target.optimize]]
//! pageDir = "edit"
//! name = "edit"
//! bundle = "org.example.core"
//! ```
//!
//! Only the group whose `name` matches is used. Missing `optimize` attributes
//! become empty strings; they are reported as warnings, not errors.

use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::entities::TargetDescriptor;
use crate::domain::services::suggest_key;
use crate::domain::value_objects::BundleList;
use crate::error::{PipelineError, PipelineResult};

/// Default target group name
pub const DEFAULT_TARGET_GROUP: &str = "requirejs";

const TARGET_LIST_KEYS: &[&str] = &["target", "name", "optimize", "pageDir", "bundle"];

#[derive(Debug, Default, Deserialize)]
struct TargetListDoc {
    #[serde(default, rename = "target")]
    targets: Vec<TargetGroupDoc>,
}

#[derive(Debug, Default, Deserialize)]
struct TargetGroupDoc {
    #[serde(default)]
    name: String,
    #[serde(default)]
    optimize: Vec<OptimizeDoc>,
}

#[derive(Debug, Default, Deserialize)]
struct OptimizeDoc {
    #[serde(default, rename = "pageDir", alias = "page_dir")]
    page_dir: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    bundle: String,
}

/// Non-fatal problem found while loading the target list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetListWarning {
    /// Key the loader does not understand
    UnknownKey {
        key: String,
        suggestion: Option<&'static str>,
    },
    /// An optimize entry lacks attributes
    MissingAttributes {
        index: usize,
        fields: Vec<&'static str>,
    },
    /// Two entries would write the same staged files
    DuplicateTarget { page_dir: String, name: String },
    /// `pageDir` is absolute; it is treated as relative to the staging and bundle directories
    RootedPageDir { index: usize, page_dir: String },
}

impl fmt::Display for TargetListWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetListWarning::UnknownKey { key, suggestion } => {
                write!(f, "unknown key '{}'", key)?;
                if let Some(suggestion) = suggestion {
                    write!(f, " (did you mean '{}'?)", suggestion)?;
                }
                Ok(())
            }
            TargetListWarning::MissingAttributes { index, fields } => write!(
                f,
                "optimize entry #{} is missing {}",
                index + 1,
                fields.join(", ")
            ),
            TargetListWarning::DuplicateTarget { page_dir, name } => write!(
                f,
                "duplicate target {}/{}: both entries share staged files",
                page_dir, name
            ),
            TargetListWarning::RootedPageDir { index, page_dir } => write!(
                f,
                "optimize entry #{} has absolute pageDir '{}'; using it relative to the staging directory",
                index + 1,
                page_dir
            ),
        }
    }
}

/// Loaded target list
#[derive(Debug, Clone, Default)]
pub struct TargetList {
    /// Descriptors in document order
    pub descriptors: Vec<TargetDescriptor>,
    /// Distinct bundles in first-occurrence order
    pub bundles: BundleList,
    pub warnings: Vec<TargetListWarning>,
}

/// Loads target descriptors for one named target group
#[derive(Debug, Clone)]
pub struct TomlTargetLoader {
    group: String,
    staging_dir: PathBuf,
}

impl TomlTargetLoader {
    pub fn new(group: impl Into<String>, staging_dir: impl Into<PathBuf>) -> Self {
        Self {
            group: group.into(),
            staging_dir: staging_dir.into(),
        }
    }

    /// Read and parse the target list at `path`
    pub fn load(&self, path: &Path) -> PipelineResult<TargetList> {
        let content = fs::read_to_string(path)
            .map_err(|e| PipelineError::configuration(path, format!("cannot read: {}", e)))?;
        self.parse(&content, path)
    }

    /// Parse target-list content; `source` is only used in messages
    pub fn parse(&self, content: &str, source: &Path) -> PipelineResult<TargetList> {
        let mut unknown_keys: Vec<String> = Vec::new();
        let deserializer = toml::de::Deserializer::new(content);
        let doc: TargetListDoc = serde_ignored::deserialize(deserializer, |p| {
            unknown_keys.push(p.to_string());
        })
        .map_err(|e| PipelineError::configuration(source, e.to_string()))?;

        let group = doc
            .targets
            .into_iter()
            .find(|t| t.name == self.group)
            .ok_or_else(|| {
                PipelineError::configuration(
                    source,
                    format!("no [[target]] named \"{}\"", self.group),
                )
            })?;

        let descriptors: Vec<TargetDescriptor> = group
            .optimize
            .into_iter()
            .map(|op| TargetDescriptor::new(op.page_dir, op.name, op.bundle, &self.staging_dir))
            .collect();

        let mut warnings: Vec<TargetListWarning> = unknown_keys
            .into_iter()
            .map(|path| {
                let suggestion = path
                    .rsplit('.')
                    .next()
                    .and_then(|key| suggest_key(key, TARGET_LIST_KEYS));
                TargetListWarning::UnknownKey {
                    key: path,
                    suggestion,
                }
            })
            .collect();
        warnings.extend(validate(&descriptors));

        Ok(TargetList {
            bundles: bundle_list(&descriptors),
            descriptors,
            warnings,
        })
    }
}

/// Distinct bundles referenced by `descriptors`, first occurrence first
pub fn bundle_list(descriptors: &[TargetDescriptor]) -> BundleList {
    descriptors
        .iter()
        .map(|d| d.bundle.clone())
        .collect::<BundleList>()
}

fn validate(descriptors: &[TargetDescriptor]) -> Vec<TargetListWarning> {
    let mut warnings = Vec::new();
    let mut seen: HashSet<(&str, &str)> = HashSet::new();

    for (index, descriptor) in descriptors.iter().enumerate() {
        let fields = descriptor.missing_fields();
        if !fields.is_empty() {
            warnings.push(TargetListWarning::MissingAttributes { index, fields });
        }
        if descriptor.has_rooted_page_dir() {
            warnings.push(TargetListWarning::RootedPageDir {
                index,
                page_dir: descriptor.page_dir.clone(),
            });
        }
        if !seen.insert(descriptor.staging_key()) {
            warnings.push(TargetListWarning::DuplicateTarget {
                page_dir: descriptor.page_dir.clone(),
                name: descriptor.name.clone(),
            });
        }
    }

    warnings
}
