use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context as _, Result};
use rayon::prelude::*;

use crate::{
    config::ActiveOptions,
    core::{
        extract::extract_keys,
        file_scanner::{scan_locale_files, scan_source_files},
        flatten::{FlattenedKeys, flatten_catalog},
        parsers::{json::parse_catalog_file, jsx::parse_source},
    },
    issues::{ParseErrorIssue, ReportSink},
    rules::unused::report_unused_keys,
};

/// Every key passed literally to a translation call in the scanned sources.
pub type UsedKeySet = HashSet<String>;

/// Result of scanning all source files.
#[derive(Debug, Default)]
pub struct SourceScan {
    pub used_keys: UsedKeySet,
    pub parse_errors: Vec<ParseErrorIssue>,
}

impl SourceScan {
    fn merge(mut self, other: SourceScan) -> SourceScan {
        self.used_keys.extend(other.used_keys);
        self.parse_errors.extend(other.parse_errors);
        self
    }
}

/// Outcome of one analysis run.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub source_files_checked: usize,
    pub locale_files_checked: usize,
    /// Number of catalogs handed to the sink.
    pub reports_emitted: usize,
    /// Source and catalog files that could not be read or parsed.
    pub parse_errors: Vec<ParseErrorIssue>,
}

/// Analysis context for one run: the active options and the enumerated files.
pub struct CheckContext {
    pub options: ActiveOptions,
    pub source_files: Vec<PathBuf>,
    pub locale_files: Vec<PathBuf>,
}

impl CheckContext {
    /// Enumerate source files and locale catalogs.
    ///
    /// # Errors
    ///
    /// Returns error if the locales directory is missing or unreadable.
    pub fn new(options: ActiveOptions) -> Result<Self> {
        tracing::debug!(pattern = %options.include_pattern(), "Scanning source files");

        let (scan_result, locale_files) = rayon::join(
            || scan_source_files(&options.folder, &options.supported_extensions),
            || scan_locale_files(&options.locales_dir),
        );

        if scan_result.skipped_count > 0 {
            tracing::warn!(
                "{} path(s) skipped due to access errors",
                scan_result.skipped_count
            );
        }

        let locale_files = locale_files?;
        tracing::debug!(
            sources = scan_result.files.len(),
            catalogs = locale_files.len(),
            "Enumerated files"
        );

        Ok(Self {
            options,
            source_files: scan_result.files,
            locale_files,
        })
    }

    /// Run the full pipeline, reporting each offending catalog to `sink`.
    ///
    /// All sources are scanned before any catalog is compared, so catalogs
    /// are always checked against the complete used-key set.
    pub fn run(&self, sink: &mut dyn ReportSink) -> RunSummary {
        let SourceScan {
            used_keys,
            mut parse_errors,
        } = collect_used_keys(&self.source_files);

        let catalogs: Vec<(&PathBuf, Result<FlattenedKeys>)> = self
            .locale_files
            .par_iter()
            .map(|path| (path, load_catalog_keys(path)))
            .collect();

        let mut reports_emitted = 0;
        for (path, catalog_keys) in catalogs {
            let file_path = path.to_string_lossy();
            match catalog_keys {
                Ok(keys) => {
                    let locale_file = locale_file_name(path);
                    if report_unused_keys(&file_path, &locale_file, &used_keys, &keys, sink) {
                        reports_emitted += 1;
                    }
                }
                Err(e) => {
                    tracing::debug!("{} - {:#}", file_path, e);
                    parse_errors.push(ParseErrorIssue::catalog(file_path, &e));
                }
            }
        }

        RunSummary {
            source_files_checked: self.source_files.len(),
            locale_files_checked: self.locale_files.len(),
            reports_emitted,
            parse_errors,
        }
    }
}

/// Scan every source file in parallel and union their keys.
///
/// Each worker folds into its own `SourceScan`; the partial scans are only
/// merged at the join point. A file that fails to read or parse is recorded
/// and contributes no keys.
pub fn collect_used_keys(files: &[PathBuf]) -> SourceScan {
    let mut scan = files
        .par_iter()
        .fold(SourceScan::default, |mut acc, path| {
            match extract_file_keys(path) {
                Ok(keys) => acc.used_keys.extend(keys),
                Err(e) => {
                    tracing::debug!("{} - {:#}", path.display(), e);
                    acc.parse_errors
                        .push(ParseErrorIssue::source(path.to_string_lossy(), &e));
                }
            }
            acc
        })
        .reduce(SourceScan::default, SourceScan::merge);

    scan.parse_errors.sort();
    scan
}

fn extract_file_keys(path: &Path) -> Result<Vec<String>> {
    let code = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {:?}", path))?;
    let module = parse_source(code, path)?;
    Ok(extract_keys(&module).collect())
}

fn load_catalog_keys(path: &Path) -> Result<FlattenedKeys> {
    let document = parse_catalog_file(path)?;
    flatten_catalog(&document).with_context(|| format!("Invalid locale file: {:?}", path))
}

fn locale_file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}
