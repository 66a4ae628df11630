use std::process::ExitCode;

use clap::Parser;

use drill_runner_cli::cli_args::InteractiveArgs;
use drill_runner_cli::{interactive, to_exit_code};

fn main() -> ExitCode {
    env_logger::init();

    let args = InteractiveArgs::parse();
    match interactive::run(&args) {
        Ok(code) => to_exit_code(code),
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
