#![forbid(unsafe_code)]

mod cli;
mod commands;

use clap::Parser;
use std::process::ExitCode;
use wizgate_core::log;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();

    match commands::run(&cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            log!(Error, "{err}");
            ExitCode::from(err.exit_code())
        }
    }
}
