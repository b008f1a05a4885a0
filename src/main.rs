//! `appconfig-check` — AppConfig manifest validation for cPanel/WHM plugins

use clap::Parser;

use appconfig_check::cli::Cli;
use appconfig_check::error::ExitCode;
use appconfig_check::logging::init_logging;
use appconfig_check::report;

fn main() {
    let cli = Cli::parse();

    if !cli.quiet {
        init_logging(cli.verbose, cli.color);
    }

    tracing::debug!(manifest = %cli.manifest.display(), "starting validation");

    match report::run(&cli.manifest) {
        Ok(true) => std::process::exit(ExitCode::SUCCESS),
        Ok(false) => std::process::exit(ExitCode::FAILURE),
        Err(e) => {
            // Unexpected errors share stdout with the diagnostics; the
            // banner is replaced by the catch-all line.
            println!("\n❌ Error: {e}");
            std::process::exit(ExitCode::FAILURE);
        }
    }
}
