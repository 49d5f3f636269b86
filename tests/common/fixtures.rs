//! Fixture content shared by CLI tests.

/// Page that loads its module with single quotes and the unminified loader
pub fn page_html(name: &str) -> String {
    format!(
        "<html>\n<script src=\"requirejs/require.js\"></script>\n<script>require(['{}.js']);</script>\n</html>\n",
        name
    )
}

/// Target list with two targets in `core` and one in `extra`
pub const TARGETS_TOML: &str = r#"
[[target]]
name = "requirejs"

[[target.optimize]]
pageDir = "home"
name = "main"
bundle = "core"

[[target.optimize]]
pageDir = "about"
name = "about"
bundle = "core"

[[target.optimize]]
pageDir = "shop"
name = "cart"
bundle = "extra"
"#;

/// Fake optimizer: writes a non-empty `out=` file. Exits 1 for the module in
/// `$PAGEBUILD_TEST_FAIL`; writes an empty file for `$PAGEBUILD_TEST_EMPTY`.
pub const FAKE_OPTIMIZER: &str = r#"#!/bin/sh
out=""
name=""
for arg in "$@"; do
  case "$arg" in
    out=*) out="${arg#out=}" ;;
    name=*) name="${arg#name=}" ;;
  esac
done
if [ -n "$PAGEBUILD_TEST_FAIL" ] && [ "$name" = "$PAGEBUILD_TEST_FAIL" ]; then
  echo "cannot optimize $name" >&2
  exit 1
fi
if [ -n "$PAGEBUILD_TEST_EMPTY" ] && [ "$name" = "$PAGEBUILD_TEST_EMPTY" ]; then
  : > "$out"
  exit 0
fi
echo "// optimized $name" > "$out"
"#;

pub const CONFIG_TOML: &str = r#"
[paths]
build_file = "build/orion.build.js"
optimizer_script = "build/fake-r.sh"
targets_file = "customTargets.toml"
bundles_root = "bundles"
staging_dir = ".temp"

[optimizer]
command = "sh"

[pipeline]
platform = "posix"
"#;
