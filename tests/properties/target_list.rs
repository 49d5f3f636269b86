//! Property tests for the target-list loader.

use std::path::Path;

use proptest::prelude::*;

use pagebuild::infrastructure::TomlTargetLoader;

fn ident() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9]{0,6}").unwrap()
}

fn entries() -> impl Strategy<Value = Vec<(String, String, String)>> {
    proptest::collection::vec((ident(), ident(), "[a-c]"), 0..8)
}

fn document(entries: &[(String, String, String)]) -> String {
    let mut doc = String::from("[[target]]\nname = \"requirejs\"\n");
    for (page_dir, name, bundle) in entries {
        doc.push_str(&format!(
            "\n[[target.optimize]]\npageDir = \"{}\"\nname = \"{}\"\nbundle = \"{}\"\n",
            page_dir, name, bundle
        ));
    }
    doc
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the loader never panics on arbitrary input.
    #[test]
    fn property_parse_never_panics(content in ".{0,256}") {
        let loader = TomlTargetLoader::new("requirejs", ".temp");
        let _ = loader.parse(&content, Path::new("customTargets.toml"));
    }

    /// PROPERTY: descriptors keep document order; bundles are the distinct owners.
    #[test]
    fn property_descriptors_follow_document(entries in entries()) {
        let loader = TomlTargetLoader::new("requirejs", ".temp");
        let list = loader
            .parse(&document(&entries), Path::new("customTargets.toml"))
            .unwrap();

        prop_assert_eq!(list.descriptors.len(), entries.len());
        for (descriptor, (page_dir, name, bundle)) in list.descriptors.iter().zip(&entries) {
            prop_assert_eq!(&descriptor.page_dir, page_dir);
            prop_assert_eq!(&descriptor.name, name);
            prop_assert_eq!(descriptor.bundle.as_str(), bundle.as_str());
            prop_assert_eq!(
                descriptor.staged_minified_path.clone(),
                Path::new(".temp").join(page_dir).join(format!("built-{}.js", name))
            );
        }

        let mut distinct: Vec<&str> = Vec::new();
        for (_, _, bundle) in &entries {
            if !distinct.contains(&bundle.as_str()) {
                distinct.push(bundle);
            }
        }
        let bundles: Vec<&str> = list.bundles.iter().map(|b| b.as_str()).collect();
        prop_assert_eq!(bundles, distinct);
    }
}
