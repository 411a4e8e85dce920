//! CLI configuration
//!
//! Each setting resolves as: command-line flag, then environment variable,
//! then built-in default. A `.env` file in the working directory is loaded
//! into the environment before parsing.

use clap::{Args, ValueEnum};
use std::path::PathBuf;

pub const DB_ENV: &str = "RECIPEBOX_DB";
pub const LOG_FORMAT_ENV: &str = "RECIPEBOX_LOG_FORMAT";
pub const DEFAULT_DB_PATH: &str = ".recipebox/store.db";

/// Log output format on stderr
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines
    Pretty,
    /// One JSON object per event
    Json,
}

/// Settings shared by every subcommand
#[derive(Debug, Clone, PartialEq, Eq, Args)]
pub struct Config {
    /// SQLite database path
    #[arg(long = "db", global = true, env = DB_ENV, default_value = DEFAULT_DB_PATH)]
    pub db_path: PathBuf,

    /// Log format on stderr
    #[arg(
        long,
        global = true,
        env = LOG_FORMAT_ENV,
        value_enum,
        ignore_case = true,
        default_value = "pretty"
    )]
    pub log_format: LogFormat,
}
