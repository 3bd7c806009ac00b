use std::path::PathBuf;

use anyhow::Result;

use super::{CommandResult, CommandSummary};
use crate::{
    cli::args::CheckCommand,
    config::{CONFIG_FILE_NAME, load_config},
    core::{CheckContext, RunSummary},
    issues::{Issue, Report, UnusedKeysIssue},
};

/// Run the unused-key check.
///
/// Options come from the command line, then the config file. When any
/// required option is missing the check is skipped without error.
pub fn check(cmd: &CheckCommand) -> Result<CommandResult> {
    let common = &cmd.common;
    let root = common.root.clone().unwrap_or_else(|| PathBuf::from("."));

    let config_result = load_config(&root)?;
    if !config_result.from_file {
        tracing::debug!("No {} found, using command-line options only", CONFIG_FILE_NAME);
    }

    let options = config_result.options.merge(common.rule_options());
    let Some(active) = options.activate() else {
        tracing::debug!(
            "Check disabled: localesDir, supportedExtensions, locales and folder are all required"
        );
        return Ok(CommandResult::inactive());
    };

    let ctx = CheckContext::new(active.resolve_against(&root))?;
    let mut reports: Vec<UnusedKeysIssue> = Vec::new();
    let summary = ctx.run(&mut reports);

    Ok(finish(reports, summary))
}

fn finish(reports: Vec<UnusedKeysIssue>, summary: RunSummary) -> CommandResult {
    let mut issues: Vec<Issue> = reports
        .into_iter()
        .map(Issue::UnusedKeys)
        .chain(summary.parse_errors.into_iter().map(Issue::ParseError))
        .collect();
    issues.sort_by(|a, b| a.file_path().cmp(b.file_path()));

    CommandResult {
        summary: CommandSummary::Check,
        issues,
        source_files_checked: summary.source_files_checked,
        locale_files_checked: summary.locale_files_checked,
    }
}
