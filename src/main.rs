use clap::Parser;
use seedkit::cli::{self, Cli};
use seedkit::config::Config;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: cannot load configuration: {err:#}");
            return ExitCode::from(cli::EXIT_DATA_ERROR);
        }
    };
    cli::init_logging(cli.debug, &config.logging.level);
    tracing::debug!(input = %cli.input, "seedkit started");

    let mut stdout = std::io::stdout().lock();
    match cli::execute(&cli, &config, &mut stdout) {
        Ok(()) => ExitCode::from(cli::EXIT_OK),
        Err(err) => {
            tracing::debug!("run failed: {err:?}");
            eprintln!("Error: {err:#}");
            ExitCode::from(cli::EXIT_DATA_ERROR)
        }
    }
}
