//! phinxgen
//!
//! Generates Phinx migration files from declarative entity metadata.

mod cli;
mod commands;

use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use commands::generate::GenerateOptions;
use commands::init::InitOptions;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Generate {
            entities,
            output_dir,
            template,
            base_class,
        } => commands::generate::run(GenerateOptions {
            schema: cli.schema,
            entities,
            output_dir,
            template,
            base_class,
        }),
        Commands::Init {
            output_dir,
            migration_dir,
            adapter,
            host,
            database,
            user,
            password,
            port,
        } => commands::init::run(InitOptions {
            output_dir,
            migration_dir,
            adapter,
            host,
            database,
            user,
            password,
            port,
        }),
    }
}
