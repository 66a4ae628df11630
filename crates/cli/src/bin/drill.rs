use std::process::ExitCode;

use clap::Parser;

use drill_runner_cli::cli_args::PlainArgs;
use drill_runner_cli::{plain, to_exit_code};

fn main() -> ExitCode {
    env_logger::init();

    let args = PlainArgs::parse();
    match plain::run(&args) {
        Ok(code) => to_exit_code(code),
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
