use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Generate Phinx migration files from declarative entity metadata
#[derive(Parser)]
#[command(name = "phinxgen")]
#[command(version)]
#[command(about = "Generate Phinx migration files from declarative entity metadata")]
pub struct Cli {
    /// Metadata registry file
    #[arg(short, long, default_value = "entities.json")]
    pub schema: PathBuf,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create migration files for entities, ready to be used with Phinx
    Generate {
        /// Entities to generate migration files for (every known entity
        /// when omitted)
        entities: Vec<String>,

        /// Directory migration files are written to
        #[arg(short, long, default_value = "./migrations")]
        output_dir: PathBuf,

        /// Migration template override
        #[arg(long)]
        template: Option<PathBuf>,

        /// Base migration class of the target runner
        #[arg(long, default_value = phinxgen_codegen::DEFAULT_BASE_CLASS)]
        base_class: String,
    },

    /// Generate phinx.yml using the same credentials as the data layer
    Init {
        /// Directory phinx.yml is written to
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,

        /// Migration directory recorded in the config
        #[arg(long, default_value = "./migrations")]
        migration_dir: String,

        /// Database adapter
        #[arg(long, default_value = "mysql")]
        adapter: String,

        /// Database host
        #[arg(long, default_value = "localhost")]
        host: String,

        /// Database name
        #[arg(long)]
        database: String,

        /// Database user
        #[arg(long)]
        user: String,

        /// Database password
        #[arg(long, default_value = "")]
        password: String,

        /// Database port
        #[arg(long, default_value_t = 3306)]
        port: u16,
    },
}
