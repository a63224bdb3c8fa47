// src/main.rs

use clap::Parser;
use spacecal_driver_install::error::InstallError;
use spacecal_driver_install::install::run_install;
use spacecal_driver_install::logging::init_tracing;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[clap(
    name = "spacecal-driver-install",
    version,
    about = "Registers a SteamVR driver ahead of every other external driver",
    long_about = "Removes all external drivers known to vrpathreg, registers the given driver, \
                  then registers the previous drivers again behind it. Any earlier \
                  01spacecalibrator registration is not restored."
)]
struct Cli {
    /// Driver to install (folder path).
    #[clap(long = "to-install", alias = "toInstall", value_name = "PATH")]
    to_install: PathBuf,

    /// Path to vrpathreg.sh (or vrpathreg.exe).
    #[clap(long, value_name = "PATH")]
    vrpathreg: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    match run_install(&cli.to_install, &cli.vrpathreg) {
        Ok(_) => ExitCode::SUCCESS,
        // Diagnostics were already printed.
        Err(InstallError::Validation { .. }) => ExitCode::from(2),
        Err(e) => {
            let err = anyhow::Error::new(e).context("driver registration aborted");
            eprintln!("Error: {:?}", err);
            ExitCode::FAILURE
        }
    }
}
