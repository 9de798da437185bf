mod cli;
mod logging;
mod output_utils;
mod render;

use clap::Parser;
use cli::Cli;
use cli::Command;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Command::Render(args) => render::run(args).await,
    };
    match result {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{} {e:#}", output_utils::RED_X);
            ExitCode::FAILURE
        },
    }
}
