//!
//! The fixture walker.
//!

pub mod single;

use std::fs;
use std::path::Path;
use std::path::PathBuf;

use anyhow::Context;

use crate::filters::Filters;
use crate::suite::SuiteType;
use crate::test::TestCase;

/// The per-case consumer. The walker does not advance to the next fixture
/// entry until the consumer returns; a consumer error aborts the walk.
pub type CaseConsumer<'a> = dyn FnMut(TestCase) -> anyhow::Result<()> + 'a;

/// The skip predicate: `true` excludes the named test from dispatch.
pub type SkipFn<'a> = dyn Fn(&str) -> bool + 'a;

///
/// Walks the suite's fixture tree under `tests_path`, handing every
/// non-skipped test case to the consumer.
///
/// Directories rejected by the filters are not descended into; files are
/// visited iff their name passes the file filter. Any I/O failure or
/// malformed fixture aborts the remaining traversal and surfaces once.
///
/// Within one file, cases are dispatched in the fixture's own key order.
/// Directory entries are visited in sorted order, but cross-file ordering
/// is not part of the contract.
///
/// Returns the number of fixture files processed.
///
pub fn walk(
    tests_path: &Path,
    suite: SuiteType,
    sub_dir: Option<&str>,
    filters: &Filters,
    skip_fn: &SkipFn,
    on_case: &mut CaseConsumer,
) -> anyhow::Result<usize> {
    let mut directory_path = tests_path.join(suite.to_string());
    if let Some(sub_dir) = sub_dir {
        directory_path.push(sub_dir);
    }

    let mut files = 0;
    walk_directory(
        directory_path.as_path(),
        filters,
        skip_fn,
        on_case,
        &mut files,
    )?;
    Ok(files)
}

///
/// Visits one directory level, recursing into accepted subdirectories.
///
fn walk_directory(
    directory_path: &Path,
    filters: &Filters,
    skip_fn: &SkipFn,
    on_case: &mut CaseConsumer,
    files: &mut usize,
) -> anyhow::Result<()> {
    let mut entries: Vec<PathBuf> = fs::read_dir(directory_path)
        .with_context(|| {
            format!(
                "Failed to read the fixture directory `{}`",
                directory_path.display()
            )
        })?
        .map(|entry| entry.map(|entry| entry.path()))
        .collect::<Result<_, _>>()
        .with_context(|| {
            format!(
                "Failed to read the fixture directory `{}`",
                directory_path.display()
            )
        })?;
    entries.sort();

    for path in entries {
        let name = match path.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => continue,
        };

        if path.is_dir() {
            if filters.check_directory(name.as_str()) {
                walk_directory(path.as_path(), filters, skip_fn, on_case, files)?;
            }
        } else if filters.check_file_name(name.as_str()) {
            process_file(path.as_path(), skip_fn, on_case)?;
            *files += 1;
        }
    }

    Ok(())
}

///
/// Parses one fixture file and dispatches its non-skipped cases in order.
///
fn process_file(path: &Path, skip_fn: &SkipFn, on_case: &mut CaseConsumer) -> anyhow::Result<()> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read the fixture `{}`", path.display()))?;

    let fixture: serde_json::Map<String, serde_json::Value> = serde_json::from_str(&content)
        .with_context(|| format!("Malformed fixture `{}`", path.display()))?;

    let file = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();

    for (test_name, test_data) in fixture {
        if skip_fn(test_name.as_str()) {
            continue;
        }

        on_case(TestCase::new(file.clone(), test_name, test_data))?;
    }

    Ok(())
}
