//! Heuristic test-command detection from project manifests.
//!
//! The result is only ever a suggestion: the wizard shows it to the user as
//! the prompt default and never applies it silently.

use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

/// Guess the test command for the project in `dir`.
///
/// Checks run in priority order and the first match wins:
/// `package.json` with a `test` script, `pytest.ini`/`pyproject.toml`,
/// `Cargo.toml`, `go.mod`, then a `Makefile` mentioning `test:`.
/// Returns an empty string when nothing matches. Unreadable or malformed
/// manifests count as "no match"; invalid UTF-8 is decoded lossily.
pub fn detect_test_command(dir: &Path) -> String {
    let detected = if package_declares_test_script(&dir.join("package.json")) {
        "npm test"
    } else if dir.join("pytest.ini").exists() || dir.join("pyproject.toml").exists() {
        "pytest"
    } else if dir.join("Cargo.toml").exists() {
        "cargo test"
    } else if dir.join("go.mod").exists() {
        "go test ./..."
    } else if makefile_has_test_rule(&dir.join("Makefile")) {
        "make test"
    } else {
        ""
    };
    debug!(dir = %dir.display(), detected, "test command detection");
    detected.to_string()
}

fn package_declares_test_script(path: &Path) -> bool {
    if !path.exists() {
        return false;
    }
    let Some(contents) = read_lossy(path) else {
        return false;
    };
    // A top-level array or a non-object `scripts` has no test script.
    // Duplicate keys resolve last-wins.
    let manifest: Value = match serde_json::from_str(&contents) {
        Ok(manifest) => manifest,
        Err(err) => {
            debug!(path = %path.display(), %err, "skipping malformed package manifest");
            return false;
        }
    };
    manifest
        .get("scripts")
        .and_then(|scripts| scripts.get("test"))
        .is_some_and(is_truthy)
}

// Matches JavaScript truthiness, which is what npm tooling applies.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

// Substring match: a `test:` inside a comment also counts.
fn makefile_has_test_rule(path: &Path) -> bool {
    if !path.exists() {
        return false;
    }
    read_lossy(path).is_some_and(|contents| contents.contains("test:"))
}

/// Read `path` as text, replacing invalid UTF-8. `None` on I/O failure.
fn read_lossy(path: &Path) -> Option<String> {
    match fs::read(path) {
        Ok(bytes) => Some(String::from_utf8_lossy(&bytes).into_owned()),
        Err(err) => {
            debug!(path = %path.display(), %err, "skipping unreadable manifest");
            None
        }
    }
}
