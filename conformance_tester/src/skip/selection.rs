//!
//! The skip-list selector.
//!

use crate::skip::SkipRegistry;
use crate::skip::TestCategory;

///
/// Resolves a comma-separated category selection into a flattened skip list.
///
/// Falls back to `default_selection` when no selection is given. The
/// selection is case-insensitive; `"none"` resolves to an empty list,
/// `"all"` to the union of the `broken`, `permanent` and `slow` categories.
/// The VM-specific category is never selected through this path: it is
/// wired to the VM suite only.
///
pub fn resolve_skip_list(
    selection: Option<&str>,
    default_selection: &str,
    registry: &SkipRegistry,
) -> Vec<String> {
    let choices = selection.unwrap_or(default_selection).to_lowercase();

    let mut skip_list = Vec::new();
    if choices == "none" {
        return skip_list;
    }

    let choices: Vec<&str> = choices.split(',').collect();
    let all = choices.contains(&"all");

    for category in [
        TestCategory::Broken,
        TestCategory::Permanent,
        TestCategory::Slow,
    ] {
        if all || choices.contains(&category.keyword()) {
            skip_list.extend_from_slice(registry.prefixes(category));
        }
    }

    skip_list
}
