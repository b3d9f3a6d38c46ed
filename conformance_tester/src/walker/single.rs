//!
//! The single-fixture loader.
//!

use std::fs;
use std::path::Path;

use anyhow::Context;

use crate::test::TestCase;

///
/// Loads exactly one test from an explicit fixture file, bypassing tree
/// discovery and all skip logic.
///
/// The fixture must contain exactly one top-level entry. The entry's key is
/// also attached to the extracted value as a `testName` field, so runners
/// reading raw fixture data see the name the suite generators emit.
///
/// Failures are returned as values, never panics: the caller decides
/// whether a broken single fixture fails the run.
///
pub fn load_single(path: &Path) -> anyhow::Result<TestCase> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read the fixture `{}`", path.display()))?;

    let fixture: serde_json::Map<String, serde_json::Value> = serde_json::from_str(&content)
        .with_context(|| format!("Malformed fixture `{}`", path.display()))?;

    if fixture.len() != 1 {
        anyhow::bail!(
            "Expected exactly one test in `{}`, found {}",
            path.display(),
            fixture.len()
        );
    }

    let (test_name, mut test_data) = fixture.into_iter().next().expect("Always exists");
    if let Some(object) = test_data.as_object_mut() {
        object.insert(
            "testName".to_owned(),
            serde_json::Value::String(test_name.clone()),
        );
    }

    let file = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(TestCase::new(file, test_name, test_data))
}

///
/// Loads a fixture file by path relative to the fixture tree root and
/// returns its parsed content as-is, without the test-case protocol.
///
pub fn load_fixture(tests_path: &Path, relative_path: &str) -> anyhow::Result<serde_json::Value> {
    let path = tests_path.join(relative_path);
    let content = fs::read_to_string(path.as_path())
        .with_context(|| format!("Failed to read the fixture `{}`", path.display()))?;

    serde_json::from_str(&content)
        .with_context(|| format!("Malformed fixture `{}`", path.display()))
}
