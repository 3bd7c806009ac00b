//! Unused translation key detection rule.
//!
//! Detects nested keys present in a locale catalog but never passed to a
//! translation call anywhere in the scanned sources.

use std::collections::HashSet;

use crate::{
    core::flatten::{FlattenedKeys, KEY_SEPARATOR},
    issues::{ReportSink, UnusedKeysIssue},
};

/// Keys of `catalog_keys` that are not in `used_keys`, in flattening order.
///
/// Top-level keys (no separator) are never returned, used or not. Matching
/// is exact: a used `a.b` does not cover `a.b.c` or `a`.
pub fn find_unused_keys(used_keys: &HashSet<String>, catalog_keys: &FlattenedKeys) -> Vec<String> {
    catalog_keys
        .iter()
        .filter(|key| !used_keys.contains(*key))
        .filter(|key| key.contains(KEY_SEPARATOR))
        .map(String::from)
        .collect()
}

/// Check one catalog. Returns `None` when every nested key is used.
pub fn check_unused_keys(
    file_path: &str,
    locale_file: &str,
    used_keys: &HashSet<String>,
    catalog_keys: &FlattenedKeys,
) -> Option<UnusedKeysIssue> {
    let keys = find_unused_keys(used_keys, catalog_keys);
    if keys.is_empty() {
        return None;
    }

    Some(UnusedKeysIssue {
        file_path: file_path.to_string(),
        locale_file: locale_file.to_string(),
        keys,
    })
}

/// Check one catalog and hand any finding to `sink`, once for the whole file.
///
/// Returns whether a report was emitted.
pub fn report_unused_keys(
    file_path: &str,
    locale_file: &str,
    used_keys: &HashSet<String>,
    catalog_keys: &FlattenedKeys,
    sink: &mut dyn ReportSink,
) -> bool {
    match check_unused_keys(file_path, locale_file, used_keys, catalog_keys) {
        Some(issue) => {
            sink.report(&issue);
            true
        }
        None => false,
    }
}
