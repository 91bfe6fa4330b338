// src/cli/mod.rs
pub mod args;
pub mod display;
pub mod error;
pub mod import_commands;

use crate::cli::args::{Cli, Commands};
use crate::cli::error::CliResult;
use crate::config::Settings;
use crate::infrastructure::di::ServiceContainer;

/// Routes a parsed command line to its handler.
pub fn execute_command(cli: Cli, services: &ServiceContainer, settings: &Settings) -> CliResult<()> {
    match cli.command {
        Some(Commands::Import {
            file,
            mode,
            tenant,
            dry_run,
        }) => import_commands::import(
            services,
            settings,
            &file,
            mode.into(),
            tenant.as_deref(),
            dry_run,
        ),
        Some(Commands::Validate { file }) => import_commands::validate(services, &file),
        Some(Commands::Preview { file, limit }) => {
            import_commands::preview(services, &file, limit)
        }
        Some(Commands::List { tenant }) => {
            import_commands::list(services, settings, tenant.as_deref())
        }
        Some(Commands::Template) => import_commands::template(),
        Some(Commands::Config) => {
            print!("{}", crate::config::to_toml(settings));
            Ok(())
        }
        None => {
            use clap::CommandFactory;
            Cli::command().print_help()?;
            Ok(())
        }
    }
}
