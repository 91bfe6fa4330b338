// src/main.rs
use clap::Parser;
use crossterm::style::Stylize;
use tracing::debug;
use tracing_subscriber::{
    filter::LevelFilter,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};
use vowsync::cli::args::Cli;
use vowsync::cli::error::CliError;
use vowsync::config::{load_settings, Settings};
use vowsync::exitcode;
use vowsync::infrastructure::di::ServiceContainer;

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.debug);

    let config_path = cli.config.clone();
    let settings = load_settings(config_path.as_deref()).unwrap_or_else(|e| {
        debug!("Failed to load settings: {}. Using defaults.", e);
        Settings::default()
    });

    let services = match ServiceContainer::new(&settings) {
        Ok(container) => container,
        Err(e) => {
            eprintln!("{}: {}", "Failed to open vendor store".red(), e);
            std::process::exit(exitcode::USAGE);
        }
    };

    if let Err(e) = vowsync::cli::execute_command(cli, &services, &settings) {
        eprintln!("{}", format!("Error: {}", e).red());
        std::process::exit(exit_code_for(&e));
    }
}

/// Parse/validation failures exit with DATAERR so scripts can tell a bad
/// input file from a usage error.
fn exit_code_for(error: &CliError) -> i32 {
    use vowsync::application::error::ApplicationError;
    use vowsync::domain::error::DomainError;
    match error {
        CliError::CommandFailed(_) => exitcode::DATAERR,
        CliError::Application(ApplicationError::Validation(_)) => exitcode::DATAERR,
        CliError::Application(ApplicationError::Domain(DomainError::Parse(_))) => {
            exitcode::DATAERR
        }
        CliError::Application(ApplicationError::Domain(DomainError::UnsupportedFormat(_))) => {
            exitcode::DATAERR
        }
        _ => exitcode::USAGE,
    }
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_span_events(FmtSpan::NONE)
                .with_target(verbosity >= 2),
        )
        .with(filter)
        .init();

    debug!("logging initialized at {}", level);
}
