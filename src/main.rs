//! main.rs
//! Entry point for lsx

use lsx::config::{Config, target_paths};
use lsx::core::Lister;
use lsx::utils::cli::Cli;
use lsx::utils::logging;

use clap::Parser;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init() {
        eprintln!("lsx: logger setup failed: {e}");
    }

    let config = Config::from_cli(&cli);
    let paths = target_paths(&cli);

    let stdout = io::stdout().lock();
    let stderr = io::stderr().lock();
    let mut lister = Lister::new(&config, stdout, stderr);

    match lister.run(&paths) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is_broken_pipe() => ExitCode::SUCCESS,
        Err(e) => {
            drop(lister);
            eprintln!("lsx: write error: {e}");
            ExitCode::FAILURE
        }
    }
}
