//! Property tests for bundle de-duplication.

use proptest::prelude::*;

use pagebuild::domain::value_objects::{BundleList, BundleName};

fn bundle_names() -> impl Strategy<Value = Vec<String>> {
    // Small alphabet so duplicates are common
    proptest::collection::vec("[a-d]{1,2}", 0..24)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every name appears exactly once.
    #[test]
    fn property_bundle_list_has_no_duplicates(names in bundle_names()) {
        let list: BundleList = names.iter().cloned().map(BundleName::from).collect();

        let mut seen = std::collections::HashSet::new();
        for bundle in &list {
            prop_assert!(seen.insert(bundle.as_str().to_string()), "duplicate {}", bundle);
        }
        for name in &names {
            prop_assert!(seen.contains(name));
        }
    }

    /// PROPERTY: order is the order of first occurrence.
    #[test]
    fn property_bundle_list_keeps_first_occurrence_order(names in bundle_names()) {
        let list: BundleList = names.iter().cloned().map(BundleName::from).collect();

        let mut expected: Vec<&str> = Vec::new();
        for name in &names {
            if !expected.contains(&name.as_str()) {
                expected.push(name);
            }
        }
        let actual: Vec<&str> = list.iter().map(|b| b.as_str()).collect();
        prop_assert_eq!(actual, expected);
    }

    /// PROPERTY: re-collecting a list changes nothing.
    #[test]
    fn property_bundle_list_idempotent(names in bundle_names()) {
        let list: BundleList = names.into_iter().map(BundleName::from).collect();
        let again: BundleList = list.iter().cloned().collect();
        prop_assert_eq!(again, list);
    }
}

#[test]
fn test_bundle_list_example() {
    let list: BundleList = ["A", "B", "A", "C"].into_iter().map(BundleName::from).collect();
    let names: Vec<&str> = list.iter().map(|b| b.as_str()).collect();
    assert_eq!(names, vec!["A", "B", "C"]);
}
