//! Bundle value objects - names of source bundles and their deduplicated list

use std::fmt;

use serde::{Deserialize, Serialize};

/// Name of a source bundle under the bundles root
///
/// Locates the bundle's asset subtree and serves as the deduplication key
/// when staging. May be empty when the target list omitted the attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BundleName(String);

impl BundleName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for BundleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BundleName {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for BundleName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Ordered set of bundle names, first occurrence wins
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BundleList(Vec<BundleName>);

impl BundleList {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Push a name unless it is already present. Returns true if added.
    pub fn insert(&mut self, name: BundleName) -> bool {
        if self.0.contains(&name) {
            return false;
        }
        self.0.push(name);
        true
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BundleName> {
        self.0.iter()
    }
}

impl FromIterator<BundleName> for BundleList {
    fn from_iter<I: IntoIterator<Item = BundleName>>(iter: I) -> Self {
        let mut list = BundleList::new();
        for name in iter {
            list.insert(name);
        }
        list
    }
}

impl<'a> IntoIterator for &'a BundleList {
    type Item = &'a BundleName;
    type IntoIter = std::slice::Iter<'a, BundleName>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &BundleList) -> Vec<&str> {
        list.iter().map(BundleName::as_str).collect()
    }

    #[test]
    fn bundle_list_keeps_first_occurrence_order() {
        let list: BundleList = ["A", "B", "A", "C"]
            .into_iter()
            .map(BundleName::from)
            .collect();

        assert_eq!(names(&list), vec!["A", "B", "C"]);
    }

    #[test]
    fn bundle_list_insert_reports_duplicates() {
        let mut list = BundleList::new();
        assert!(list.insert("core".into()));
        assert!(!list.insert("core".into()));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn bundle_list_empty_name_is_a_distinct_entry() {
        let list: BundleList = ["", "core", ""].into_iter().map(BundleName::from).collect();
        assert_eq!(names(&list), vec!["", "core"]);
    }

    #[test]
    fn bundle_name_display() {
        assert_eq!(BundleName::new("org.example.core").to_string(), "org.example.core");
    }
}
