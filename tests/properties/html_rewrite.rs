//! Property tests for HTML rewrite rules.

use proptest::prelude::*;

use pagebuild::domain::services::{RewriteRule, RewriteRules, DEFAULT_LOADER, DEFAULT_MINIFIED_LOADER};

fn target_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9_-]{0,12}").unwrap()
}

fn filler() -> impl Strategy<Value = String> {
    // No quotes or brackets, so filler never forms a pattern by accident
    proptest::string::string_regex("[A-Za-z0-9 <>=.\n]{0,64}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: rewriting never panics on arbitrary input.
    #[test]
    fn property_rewrite_never_panics(name in ".{0,16}", text in ".{0,256}") {
        let rules = RewriteRules::for_target(&name, DEFAULT_LOADER, DEFAULT_MINIFIED_LOADER);
        let _ = rules.apply(&text);
    }

    /// PROPERTY: text without any pattern is returned unchanged.
    #[test]
    fn property_rewrite_absent_patterns_is_identity(name in target_name(), text in filler()) {
        let rules = RewriteRules::for_target(&name, DEFAULT_LOADER, DEFAULT_MINIFIED_LOADER);
        let outcome = rules.apply(&text);
        prop_assert_eq!(&outcome.text, &text);
        prop_assert!(!outcome.changed());
    }

    /// PROPERTY: the single-quoted reference is replaced, surrounding text kept.
    #[test]
    fn property_rewrite_replaces_module_reference(
        name in target_name(),
        before in filler(),
        after in filler(),
    ) {
        let text = format!("{}require(['{}.js']);{}", before, name, after);
        let rules = RewriteRules::for_target(&name, DEFAULT_LOADER, DEFAULT_MINIFIED_LOADER);

        let outcome = rules.apply(&text);

        let expected = format!("{}require([\"built-{}.js\"]);{}", before, name, after);
        prop_assert_eq!(outcome.text, expected);
    }

    /// PROPERTY: only the first occurrence of a pattern is replaced.
    #[test]
    fn property_rule_replaces_first_occurrence_only(count in 1usize..5, text in filler()) {
        let rule = RewriteRule::new("@@", "##");
        let input = format!("{}{}", "@@".repeat(count), text);

        let (output, matched) = rule.apply(&input);

        prop_assert!(matched);
        prop_assert_eq!(output.matches("@@").count(), count - 1);
        prop_assert!(output.starts_with("##"));
    }

    /// PROPERTY: a rewritten page is a fixed point of the same rules.
    #[test]
    fn property_rewrite_is_idempotent(name in target_name(), before in filler()) {
        let text = format!(
            "{}<script src=\"{}\"></script><script>require([\"{}.js\"]);</script>",
            before, DEFAULT_LOADER, name
        );
        let rules = RewriteRules::for_target(&name, DEFAULT_LOADER, DEFAULT_MINIFIED_LOADER);

        let once = rules.apply(&text).text;
        let twice = rules.apply(&once);

        prop_assert_eq!(&twice.text, &once);
        prop_assert!(!twice.changed());
    }
}
