//! Issue types produced by an analysis run.
//!
//! Each issue is self-contained with everything the reporter needs to
//! display it.

use enum_dispatch::enum_dispatch;

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    UnusedKeys,
    ParseError,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::UnusedKeys => write!(f, "unused-keys"),
            Rule::ParseError => write!(f, "parse-error"),
        }
    }
}

// ============================================================
// Issue Types
// ============================================================

/// One locale catalog with nested keys that no source file references.
///
/// Exactly one of these is produced per offending catalog, carrying every
/// unused key in flattening order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnusedKeysIssue {
    /// Path of the catalog file.
    pub file_path: String,
    /// File name identifying the locale (e.g., "en.json").
    pub locale_file: String,
    pub keys: Vec<String>,
}

impl UnusedKeysIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::UnusedKeys
    }

    pub fn headline(&self) -> String {
        format!("Locales file {} has unused keys:", self.locale_file)
    }
}

/// The grouped message: headline followed by one key per line.
impl std::fmt::Display for UnusedKeysIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.headline())?;
        for key in &self.keys {
            write!(f, "\n{}", key)?;
        }
        Ok(())
    }
}

/// Which kind of file failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ParseErrorFileType {
    /// A source file. Its keys are skipped and the run continues.
    Source,
    /// A locale catalog. Its comparison is abandoned and reported as an error.
    Catalog,
}

/// A file that could not be read or parsed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ParseErrorIssue {
    pub file_path: String,
    pub error: String,
    pub file_type: ParseErrorFileType,
}

impl ParseErrorIssue {
    pub fn source(file_path: impl Into<String>, error: &anyhow::Error) -> Self {
        Self {
            file_path: file_path.into(),
            error: format!("{:#}", error),
            file_type: ParseErrorFileType::Source,
        }
    }

    pub fn catalog(file_path: impl Into<String>, error: &anyhow::Error) -> Self {
        Self {
            file_path: file_path.into(),
            error: format!("{:#}", error),
            file_type: ParseErrorFileType::Catalog,
        }
    }

    pub fn severity(&self) -> Severity {
        match self.file_type {
            ParseErrorFileType::Source => Severity::Warning,
            ParseErrorFileType::Catalog => Severity::Error,
        }
    }

    pub fn rule() -> Rule {
        Rule::ParseError
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// An issue found during analysis.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Issue {
    UnusedKeys(UnusedKeysIssue),
    ParseError(ParseErrorIssue),
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Trait for types that can be reported to the CLI.
///
/// Uses `enum_dispatch` for zero-cost dispatch on the `Issue` enum.
#[enum_dispatch]
pub trait Report {
    /// Path of the file the issue is about.
    fn file_path(&self) -> &str;

    /// Primary message to display (first line of the diagnostic).
    fn message(&self) -> String;

    fn report_severity(&self) -> Severity;

    fn report_rule(&self) -> Rule;

    /// Additional lines listed under the message.
    fn details(&self) -> &[String] {
        &[]
    }
}

impl Report for UnusedKeysIssue {
    fn file_path(&self) -> &str {
        &self.file_path
    }

    fn message(&self) -> String {
        self.headline()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> &[String] {
        &self.keys
    }
}

impl Report for ParseErrorIssue {
    fn file_path(&self) -> &str {
        &self.file_path
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        self.severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

// ============================================================
// Reporting sink
// ============================================================

/// Receiver of unused-key diagnostics.
///
/// Called once per offending catalog with the complete key list, never once
/// per key.
pub trait ReportSink {
    fn report(&mut self, issue: &UnusedKeysIssue);
}

impl ReportSink for Vec<UnusedKeysIssue> {
    fn report(&mut self, issue: &UnusedKeysIssue) {
        self.push(issue.clone());
    }
}
