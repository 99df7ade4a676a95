use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "staffdeck",
    version,
    about = "A lightweight employee management terminal client",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Rows per table page.
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Number of generated demo employees.
    #[arg(long)]
    pub seed_count: Option<usize>,

    /// JSON file with employees to load at startup.
    #[arg(long, value_name = "PATH")]
    pub seed_file: Option<PathBuf>,

    /// Start with an empty store.
    #[arg(long)]
    pub no_seed: bool,

    /// Initial route (`/`, `/create` or `/employee/edit/<id>`).
    #[arg(long, value_name = "PATH")]
    pub route: Option<String>,

    /// Accent color (name or hex code).
    #[arg(long)]
    pub accent_color: Option<String>,
}
