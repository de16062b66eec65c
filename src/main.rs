use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use bcrun::cmd::{RunCMD, USAGE};
use bcrun::runtime;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    #[command(flatten)]
    run: RunCMD,
}

fn main() -> ExitCode {
    let mut cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    let _ = e.print();
                    ExitCode::SUCCESS
                }
                _ => {
                    println!("{}", USAGE);
                    let _ = e.print();
                    ExitCode::from(runtime::EXIT_FATAL)
                }
            };
        }
    };

    runtime::setup_logger(cli.run.log_level);

    if let Err(e) = cli.run.try_execute() {
        eprintln!("Error: {}", e);
        return ExitCode::from(&e);
    }
    return ExitCode::SUCCESS;
}
