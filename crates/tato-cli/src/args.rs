use clap::{Parser, Subcommand, ValueEnum};
use std::fmt;

#[derive(Parser)]
#[command(name = "tato-aisle")]
#[command(about = "Browse the Tato Aisle potato shop from your terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory (defaults to $TATO_PATH, then the system data directory)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "info", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive storefront (default)
    Browse,

    /// List products, optionally filtered
    Catalog {
        /// Case-insensitive text to look for in product names
        #[arg(long, default_value = "")]
        search: String,

        /// Category name, or "All"
        #[arg(long, default_value = "All")]
        category: String,
    },

    /// Show or empty the saved cart
    Cart {
        #[command(subcommand)]
        command: Option<CartCommand>,
    },
}

#[derive(Subcommand)]
pub enum CartCommand {
    /// Show the saved cart and its total (default)
    Show,

    /// Remove every entry from the saved cart
    Clear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Trace => write!(f, "trace"),
        }
    }
}
