use std::process::ExitCode;

use clap::Parser;
use i18n_unused::cli::{Arguments, ExitStatus};

fn main() -> ExitCode {
    let args = Arguments::parse();
    i18n_unused::cli::init_tracing(args.verbose());

    match i18n_unused::cli::run_cli(args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}
