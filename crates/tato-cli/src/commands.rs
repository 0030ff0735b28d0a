use super::args::{CartCommand, Cli, Commands, OutputFormat};
use super::handlers;
use crate::context::ExecutionContext;
use crate::logging::{self, LogTarget};
use crate::presentation::renderers::ConsoleRenderer;
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = tato_core::resolve_data_path(cli.data_dir.as_deref())?;
    let ctx = ExecutionContext::new(data_dir)?;
    let command = cli.command.unwrap_or(Commands::Browse);

    // The storefront owns the terminal, so its logs go to a file.
    let log_dir = ctx.log_dir();
    let target = match command {
        Commands::Browse => LogTarget::File { dir: &log_dir },
        _ => LogTarget::Stderr,
    };
    logging::init(target, cli.log_level);

    let renderer = ConsoleRenderer::new(cli.format == OutputFormat::Json);

    match command {
        Commands::Browse => handlers::browse::handle(&ctx),

        Commands::Catalog { search, category } => {
            handlers::catalog::handle(&search, &category, &renderer)
        }

        Commands::Cart { command } => match command.unwrap_or(CartCommand::Show) {
            CartCommand::Show => handlers::cart::handle_show(&ctx, &renderer),
            CartCommand::Clear => handlers::cart::handle_clear(&ctx, &renderer),
        },
    }
}
