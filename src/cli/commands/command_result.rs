use super::super::exit_status::ExitStatus;
use crate::issues::{Issue, ParseErrorFileType};

#[derive(Debug)]
pub enum CommandSummary {
    Check,
    /// Required options were missing, so nothing was checked.
    Inactive,
    Init(InitSummary),
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running a command.
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Unused-key reports and parse errors, sorted by file.
    pub issues: Vec<Issue>,
    pub source_files_checked: usize,
    pub locale_files_checked: usize,
}

impl CommandResult {
    pub fn inactive() -> Self {
        Self {
            summary: CommandSummary::Inactive,
            issues: Vec::new(),
            source_files_checked: 0,
            locale_files_checked: 0,
        }
    }

    pub fn init(created: bool) -> Self {
        Self {
            summary: CommandSummary::Init(InitSummary { created }),
            issues: Vec::new(),
            source_files_checked: 0,
            locale_files_checked: 0,
        }
    }

    fn parse_errors_of(&self, file_type: ParseErrorFileType) -> usize {
        self.issues
            .iter()
            .filter(|i| matches!(i, Issue::ParseError(e) if e.file_type == file_type))
            .count()
    }

    /// Number of source files that failed to parse.
    pub fn source_parse_error_count(&self) -> usize {
        self.parse_errors_of(ParseErrorFileType::Source)
    }

    /// Number of locale catalogs that could not be checked.
    pub fn catalog_error_count(&self) -> usize {
        self.parse_errors_of(ParseErrorFileType::Catalog)
    }

    /// Number of catalogs reported as having unused keys.
    pub fn unused_report_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| matches!(i, Issue::UnusedKeys(_)))
            .count()
    }

    pub fn exit_status(&self) -> ExitStatus {
        match &self.summary {
            CommandSummary::Init(summary) if !summary.created => ExitStatus::Failure,
            CommandSummary::Init(_) | CommandSummary::Inactive => ExitStatus::Success,
            CommandSummary::Check => {
                if self.catalog_error_count() > 0 {
                    ExitStatus::Error
                } else if self.unused_report_count() > 0 {
                    ExitStatus::Failure
                } else {
                    ExitStatus::Success
                }
            }
        }
    }
}
