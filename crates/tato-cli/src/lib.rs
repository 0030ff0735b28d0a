mod args;
mod commands;
pub mod context;
mod handlers;
pub mod logging;
pub mod presentation;

pub use args::{CartCommand, Cli, Commands, LogLevel, OutputFormat};
pub use commands::run;
