use std::path::PathBuf;

use clap::Parser;

use crate::application::data::LogLevel;

/// Inserts a missing configuration import into a fixed set of source files.
#[derive(Parser, Debug, Clone)]
#[command(version)]
pub struct Cli {
    #[clap(long, short, default_value = "warn", value_enum)]
    pub log_level: LogLevel,

    /// The root directory the manifest paths are relative to
    #[clap(long, short, default_value = ".")]
    pub root: PathBuf,

    /// YAML manifest replacing the built-in file list and import
    #[clap(long, short)]
    pub config: Option<PathBuf>,
}
