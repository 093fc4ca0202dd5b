use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use academy_admin::app::AppContext;
use academy_admin::cli::{commands, Cli, Commands};
use academy_admin::config::Config;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let ctx = AppContext::new(cli.data.as_deref())?;

    match cli.command {
        Some(Commands::Posts { filter }) => {
            commands::list_posts(&ctx, filter)?;
        }
        Some(Commands::Courses { filter }) => {
            commands::list_courses(&ctx, filter)?;
        }
        Some(Commands::Tui { screen }) => {
            let config = Config::load()?;
            academy_admin::tui::run(ctx, &config, screen)?;
        }
        None => {
            let config = Config::load()?;
            academy_admin::tui::run(ctx, &config, None)?;
        }
    }

    Ok(())
}
