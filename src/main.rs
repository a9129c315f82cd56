//! KGOC access service
//!
//! HTTP server and maintenance commands for the role store

#![allow(missing_docs)]

use anyhow::Context;
use clap::{Parser, Subcommand};
use kgoc_access::config::{Config, StorageBackend};
use kgoc_access::storage::database::Database;
use kgoc_access::utils::logging::init_tracing;
use kgoc_access::{Role, RoleRegistry, server};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "kgoc-access", version, about = "KGOC role and permission service")]
struct Cli {
    /// Configuration file; defaults plus environment when omitted
    #[arg(short, long, env = "ACCESS_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the HTTP server
    Serve,
    /// Apply database migrations and exit
    Migrate,
    /// Print the role → permission table
    Roles {
        /// Only this role
        #[arg(long)]
        role: Option<String>,
    },
}

async fn load_config(path: Option<&PathBuf>) -> anyhow::Result<Config> {
    let config = match path {
        Some(path) => Config::from_file(path).await?,
        None => Config::from_env()?,
    };
    Ok(config)
}

fn print_roles(registry: &RoleRegistry, only: Option<&str>) -> anyhow::Result<()> {
    let roles: Vec<Role> = match only {
        Some(token) => vec![token.parse().map_err(anyhow::Error::msg)?],
        None => Role::ALL.to_vec(),
    };

    for role in roles {
        println!("{} ({})", role, role.display_name());
        for (group, permissions) in registry.grouped_permissions(role) {
            let tokens: Vec<&str> = permissions.iter().map(|p| p.as_str()).collect();
            println!("  {:<14} {}", group, tokens.join(", "));
        }
        let modules = registry.accessible_modules(role);
        println!(
            "  modules        well_test={} well_services={} administration={} user_management={}",
            modules.well_test, modules.well_services, modules.administration, modules.user_management
        );
    }
    Ok(())
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_ref())
        .await
        .context("failed to load configuration")?;
    init_tracing(config.logging()).context("failed to initialize logging")?;

    match cli.command {
        Command::Serve => server::builder::run_server(config).await?,
        Command::Migrate => {
            if config.storage().backend != StorageBackend::Database {
                anyhow::bail!("migrate requires storage.backend = database");
            }
            let db = Database::new(&config.storage().database).await?;
            db.migrate().await?;
            db.close().await?;
            info!("Migrations applied");
        }
        Command::Roles { role } => {
            let registry = RoleRegistry::from_config(config.rbac());
            print_roles(&registry, role.as_deref())?;
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Print error using Display (not Debug) to preserve newlines
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
