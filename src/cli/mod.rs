//! Command-line interface layer.

use std::{path::Path, process::ExitCode};

use anyhow::Result;

pub mod args;
mod commands;
pub mod exit_status;
mod report;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

use commands::{check::check, init::init};

/// Install the stderr log subscriber. `RUST_LOG` wins over the verbose flag.
pub fn init_tracing(verbose: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("i18n_unused=debug")
        } else {
            EnvFilter::new("i18n_unused=warn")
        }
    });

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

pub fn run_cli(args: Arguments) -> Result<ExitCode> {
    let verbose = args.verbose();

    let Some(Arguments {
        command: Some(command),
    }) = args.with_command_or_help()
    else {
        return Ok(ExitStatus::Success.into());
    };

    let result = match command {
        Command::Check(cmd) => check(&cmd)?,
        Command::Init(cmd) => {
            init(cmd.root.as_deref().unwrap_or_else(|| Path::new(".")))?
        }
    };
    report::print(&result, verbose);

    Ok(result.exit_status().into())
}
