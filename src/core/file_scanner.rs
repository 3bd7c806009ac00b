use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use anyhow::{Result, bail};
use glob::{MatchOptions, Pattern, glob_with};
use walkdir::WalkDir;

/// Result of scanning source files.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Matched files, sorted and de-duplicated.
    pub files: Vec<PathBuf>,
    pub skipped_count: usize,
}

/// Expand `folder/**/*.{ext,...}` into the matching source files.
///
/// The `glob` crate has no brace expansion, so each extension is expanded
/// as its own `folder/**/*.ext` pattern. Dotfiles and dot-directories are
/// not matched.
pub fn scan_source_files(folder: &Path, extensions: &[String]) -> ScanResult {
    let options = MatchOptions {
        require_literal_leading_dot: true,
        ..Default::default()
    };

    // Folder names such as `app/[locale]` must match literally
    let base = PathBuf::from(Pattern::escape(&folder.to_string_lossy()));

    let mut files = BTreeSet::new();
    let mut skipped_count = 0;

    for ext in extensions {
        let pattern = base.join("**").join(format!("*.{}", Pattern::escape(ext)));
        let pattern_str = pattern.to_string_lossy();

        let entries = match glob_with(&pattern_str, options) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!("Invalid include pattern '{}': {}", pattern_str, e);
                continue;
            }
        };

        for entry in entries {
            match entry {
                Ok(path) if path.is_file() => {
                    files.insert(path);
                }
                Ok(_) => {}
                Err(e) => {
                    skipped_count += 1;
                    tracing::debug!("Cannot access path: {}", e);
                }
            }
        }
    }

    ScanResult {
        files: files.into_iter().collect(),
        skipped_count,
    }
}

fn is_catalog_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("json")
}

/// List the locale catalogs directly inside `locales_dir`, sorted by name.
///
/// Subdirectories are not descended into and non-JSON files are ignored.
pub fn scan_locale_files(locales_dir: &Path) -> Result<Vec<PathBuf>> {
    if !locales_dir.exists() {
        bail!(
            "Locales directory '{}' does not exist.\n\
             Hint: Check the 'localesDir' setting.",
            locales_dir.display()
        );
    }

    if !locales_dir.is_dir() {
        bail!("'{}' is not a directory.", locales_dir.display());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(locales_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        let path = entry.path();

        // Symlinked catalogs count too; a dangling link fails later as a catalog error
        let is_file = entry.file_type().is_file() || (entry.path_is_symlink() && !path.is_dir());
        if is_file && is_catalog_file(path) {
            files.push(path.to_path_buf());
        } else {
            tracing::debug!(path = %path.display(), "Skipping non-catalog entry");
        }
    }

    Ok(files)
}
