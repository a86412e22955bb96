//! The `init` command
//!
//! Writes a `phinx.yml` for the external migration runner, mirroring the
//! database credentials the data layer is configured with. Pure data
//! serialization, outside the generation pipeline.

use anyhow::Context;
use serde::Serialize;
use std::path::PathBuf;

/// Inputs of one `init` invocation
#[derive(Debug)]
pub struct InitOptions {
    /// Directory phinx.yml is written to
    pub output_dir: PathBuf,

    /// Migration directory recorded in the config
    pub migration_dir: String,

    /// Database adapter
    pub adapter: String,

    /// Database host
    pub host: String,

    /// Database name
    pub database: String,

    /// Database user
    pub user: String,

    /// Database password
    pub password: String,

    /// Database port
    pub port: u16,
}

/// The phinx.yml document layout the runner expects
#[derive(Debug, Serialize)]
struct PhinxConfig {
    paths: PhinxPaths,
    environments: PhinxEnvironments,
}

#[derive(Debug, Serialize)]
struct PhinxPaths {
    migrations: String,
}

#[derive(Debug, Serialize)]
struct PhinxEnvironments {
    production: PhinxEnvironment,
}

#[derive(Debug, Serialize)]
struct PhinxEnvironment {
    adapter: String,
    host: String,
    name: String,
    user: String,
    pass: String,
    port: u16,
}

pub fn run(options: InitOptions) -> anyhow::Result<()> {
    let path = options.output_dir.join("phinx.yml");
    let yaml = render_config(&options).context("failed to serialize phinx.yml")?;
    std::fs::write(&path, yaml)
        .with_context(|| format!("failed to write '{}'", path.display()))?;

    println!("Created '{}'", path.display());
    Ok(())
}

fn render_config(options: &InitOptions) -> Result<String, serde_yaml::Error> {
    let config = PhinxConfig {
        paths: PhinxPaths {
            migrations: options.migration_dir.clone(),
        },
        environments: PhinxEnvironments {
            production: PhinxEnvironment {
                adapter: options.adapter.clone(),
                host: options.host.clone(),
                name: options.database.clone(),
                user: options.user.clone(),
                pass: options.password.clone(),
                port: options.port,
            },
        },
    };
    serde_yaml::to_string(&config)
}

// ============================================================================
// Tests
// ============================================================================
