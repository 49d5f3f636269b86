//! End-to-end builds against a fake optimizer (POSIX copy commands).
#![cfg(unix)]

mod common;

use common::*;

#[test]
fn test_build_publishes_optimized_pages() {
    let env = TestEnv::new();

    let result = env.run(&["build"]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert_eq!(result.stdout, "Done.\n");

    for (dir, name, bundle) in [
        ("home", "main", "core"),
        ("about", "about", "core"),
        ("shop", "cart", "extra"),
    ] {
        let built = format!("bundles/{}/web/{}/built-{}.js", bundle, dir, name);
        assert!(env.exists(&built), "missing {}", built);
        assert!(env.read(&built).contains(&format!("// optimized {}/{}", dir, name)));

        let html = env.read(&format!("bundles/{}/web/{}/{}.html", bundle, dir, name));
        assert!(
            html.contains(&format!("require([\"built-{}.js\"]);", name)),
            "html not rewritten:\n{}",
            html
        );
        assert!(html.contains("requirejs/require.min.js"));
    }

    // Staging holds the merged web folders
    assert!(env.exists(".temp/requirejs/require.js"));
    assert!(env.exists(".temp/shop/cart.js"));
    assert!(env.exists(".temp.lock"));
}

#[test]
fn test_build_is_default_command() {
    let env = TestEnv::new();

    let result = env.run(&[]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert!(env.exists("bundles/extra/web/shop/built-cart.js"));
}

#[test]
fn test_build_logs_phase_banners() {
    let env = TestEnv::new();

    let result = env.run(&["build"]);

    assert!(result.success);
    for banner in [
        "Copying bundle web content to",
        "Running optimize...",
        "Running updateHTML...",
        "Copy built files to",
    ] {
        assert!(result.stderr.contains(banner), "missing {:?} in:\n{}", banner, result.stderr);
    }
}

#[test]
fn test_failed_optimizer_continues_by_default() {
    let env = TestEnv::new().failing_module("shop/cart");

    let result = env.run(&["build"]);

    assert_eq!(result.exit_code, 0, "stderr:\n{}", result.stderr);
    assert!(result.stdout.contains("[optimize] shop/cart"));
    assert!(result.stdout.ends_with("Done.\n"));

    // Other targets are unaffected
    assert!(env.exists("bundles/core/web/home/built-main.js"));
    // The failing target is still rewritten and its page published
    let html = env.read("bundles/extra/web/shop/cart.html");
    assert!(html.contains("require([\"built-cart.js\"]);"));
    assert!(!env.exists("bundles/extra/web/shop/built-cart.js"));
}

#[test]
fn test_report_policy_exits_non_zero() {
    let env = TestEnv::new().failing_module("home/main");

    let result = env.run(&["build", "--on-failure", "report"]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stdout.ends_with("Done.\n"));
    assert!(env.exists("bundles/extra/web/shop/built-cart.js"));
}

#[test]
fn test_abort_policy_stops_after_optimize() {
    let env = TestEnv::new().failing_module("home/main");

    let result = env.run(&["build", "--on-failure", "abort"]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stdout.contains("Stopped after optimize phase"));
    // Nothing was published
    assert!(!env.exists("bundles/extra/web/shop/built-cart.js"));
    assert!(env
        .read("bundles/core/web/about/about.html")
        .contains("require(['about.js']);"));
}

#[test]
fn test_verify_outputs_skips_empty_output() {
    let env = TestEnv::new().empty_output_module("shop/cart");

    let result = env.run(&["build", "--verify-outputs"]);

    assert_eq!(result.exit_code, 0);
    assert!(result.stdout.contains("optimizer output missing or empty"));
    // The unverified page is left untouched
    assert!(env
        .read("bundles/extra/web/shop/cart.html")
        .contains("require(['cart.js']);"));
    assert!(!env.exists("bundles/extra/web/shop/built-cart.js"));
    assert!(env.exists("bundles/core/web/home/built-main.js"));
}

#[test]
fn test_verify_outputs_skips_failed_target() {
    let env = TestEnv::new().failing_module("shop/cart");

    let result = env.run(&["build", "--verify-outputs"]);

    assert_eq!(result.exit_code, 0);
    assert!(result.stdout.contains("[optimize] shop/cart"));
    assert!(!result.stdout.contains("[publish] shop/cart"));
    assert!(env
        .read("bundles/extra/web/shop/cart.html")
        .contains("require(['cart.js']);"));
}

#[test]
fn test_dry_run_changes_nothing() {
    let env = TestEnv::new();

    let result = env.run(&["build", "--dry-run"]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert!(result.stderr.contains("[dry-run]"));
    assert!(!env.exists(".temp"));
    assert!(!env.exists(".temp.lock"));
    assert!(!env.exists("bundles/core/web/home/built-main.js"));
}

#[test]
fn test_skip_publish_leaves_bundles_untouched() {
    let env = TestEnv::new();

    let result = env.run(&["build", "--skip-publish"]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert!(result.stdout.contains("Skipped: publish"));
    assert!(env.exists(".temp/home/built-main.js"));
    assert!(env
        .read(".temp/home/main.html")
        .contains("require([\"built-main.js\"]);"));
    assert!(!env.exists("bundles/core/web/home/built-main.js"));
}

#[test]
fn test_rebuild_is_stable() {
    let env = TestEnv::new();

    assert!(env.run(&["build"]).success);
    let first = env.read("bundles/core/web/home/main.html");
    assert!(env.run(&["build"]).success);
    let second = env.read("bundles/core/web/home/main.html");

    assert_eq!(first, second);
}

#[test]
fn test_missing_target_group_is_fatal() {
    let env = TestEnv::new();
    env.write("customTargets.toml", "[[target]]\nname = \"other\"\n");

    let result = env.run(&["build"]);

    assert_eq!(result.exit_code, 1);
    assert!(
        result.stderr.contains("no [[target]] named \"requirejs\""),
        "stderr:\n{}",
        result.stderr
    );
    assert!(!env.exists(".temp"));
}

#[test]
fn test_missing_explicit_config_is_fatal() {
    let env = TestEnv::new();

    let result = env.run(&["--config", "nope.toml", "build"]);

    assert_eq!(result.exit_code, 1);
    assert!(!env.exists(".temp"));
}

#[test]
fn test_json_report() {
    let env = TestEnv::new().failing_module("about/about");

    let result = env.run(&["--json", "build"]);

    assert_eq!(result.exit_code, 0);
    let json: serde_json::Value = serde_json::from_str(&result.stdout).unwrap();
    assert_eq!(json["success"], false);
    assert_eq!(json["report"]["policy"], "continue");
    let failed: Vec<&serde_json::Value> = json["report"]["steps"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|s| !s["error"].is_null())
        .collect();
    assert!(failed
        .iter()
        .any(|s| s["phase"] == "optimize" && s["subject"] == "about/about"));
}

#[test]
fn test_env_overrides_failure_policy() {
    let env = TestEnv::new().failing_module("home/main");

    let bin = env!("CARGO_BIN_EXE_pagebuild");
    let output = std::process::Command::new(bin)
        .arg("build")
        .current_dir(env.root_path())
        .env("PAGEBUILD_ON_FAILURE", "report")
        .env("PAGEBUILD_TEST_FAIL", "home/main")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
}
