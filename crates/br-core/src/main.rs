//! br-core command-line entry point.

use br_core::cli::Cli;
use br_core::commands::{dispatch, print_error};
use br_core::logging::init_logging;
use br_core::ExitCode;
use clap::Parser;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet, cli.log_json);

    let code = match dispatch(&cli) {
        Ok(code) => code,
        Err(err) => {
            print_error(&err, cli.format);
            ExitCode::from(&err)
        }
    };
    std::process::exit(code.as_i32());
}
