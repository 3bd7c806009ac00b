//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Report unused keys in every locale catalog
//! - `init`: Write a configuration file template

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::config::RuleOptions;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.common.verbose,
            Some(Command::Init(_)) | None => false,
        }
    }
}

/// Rule options given on the command line. Each one overrides the config file.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Project root: where the config file search starts and relative paths resolve
    #[arg(long, env = "I18N_UNUSED_ROOT")]
    pub root: Option<PathBuf>,

    /// Directory containing the locale catalogs
    #[arg(long)]
    pub locales_dir: Option<String>,

    /// Source file extensions to scan, without the dot (comma separated or repeated)
    #[arg(long, value_delimiter = ',')]
    pub supported_extensions: Option<Vec<String>>,

    /// Locales setting (required to enable the check, otherwise unused)
    #[arg(long)]
    pub locales: Option<String>,

    /// Root folder of the source files to scan
    #[arg(long)]
    pub folder: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommonArgs {
    pub fn rule_options(&self) -> RuleOptions {
        RuleOptions {
            locales_dir: self.locales_dir.clone(),
            supported_extensions: self.supported_extensions.clone(),
            locales: self.locales.clone(),
            folder: self.folder.clone(),
        }
    }
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct InitCommand {
    /// Directory to write the config file into (defaults to the working directory)
    #[arg(long, env = "I18N_UNUSED_ROOT")]
    pub root: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Report locale keys that no source file uses
    Check(CheckCommand),
    /// Initialize a new .i18nunusedrc.json configuration file
    Init(InitCommand),
}
