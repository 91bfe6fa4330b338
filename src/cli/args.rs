// src/cli/args.rs
use crate::domain::import::ImportMode;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Import wedding vendor lists and reconcile them against the vendor store
pub struct Cli {
    /// Sets a custom config file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Turn debugging information on
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Import vendors from a CSV or XLSX file
    Import {
        /// File to import
        file: PathBuf,

        #[arg(
            short,
            long,
            value_enum,
            default_value_t = ModeArg::AddOnly,
            help = "add-only: only create new vendors; sync: also delete vendors absent from the file"
        )]
        mode: ModeArg,

        #[arg(short, long, help = "tenant the vendors belong to (falls back to config)")]
        tenant: Option<String>,

        #[arg(long, help = "compute and print the plan without writing to the store")]
        dry_run: bool,
    },
    /// Check a file's header mapping and row validity, without writing
    Validate {
        /// File to check
        file: PathBuf,
    },
    /// Show the parsed headers and first rows of a file
    Preview {
        /// File to preview
        file: PathBuf,

        #[arg(short, long, default_value_t = 10, help = "number of rows to show")]
        limit: usize,
    },
    /// List the vendors currently in the store
    List {
        #[arg(short, long, help = "tenant to list (falls back to config)")]
        tenant: Option<String>,
    },
    /// Print a CSV header template for vendor imports
    Template,
    /// Print the effective configuration as TOML
    Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    AddOnly,
    Sync,
}

// clap renders the default value through Display
impl std::fmt::Display for ModeArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModeArg::AddOnly => write!(f, "add-only"),
            ModeArg::Sync => write!(f, "sync"),
        }
    }
}

impl From<ModeArg> for ImportMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::AddOnly => ImportMode::AddOnly,
            ModeArg::Sync => ImportMode::Sync,
        }
    }
}
