//! Main application entry point.

use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();
    let cli = sketchboard_app::Cli::parse();
    log::info!("Starting Sketchboard with {}", cli.script.display());

    match sketchboard_app::run(&cli) {
        Ok(path) => {
            log::info!("Wrote {}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
