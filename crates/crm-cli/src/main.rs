//! CRM admin console, terminal edition.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::error;

use crm_client::{ApiClient, FileSessionStore};
use crm_core::repositories::SessionStore;
use crm_core::DomainError;
use crm_shared::config::AppConfig;

mod commands;
mod output;

use commands::Ctx;

#[derive(Parser)]
#[command(name = "crm", version, about = "CRM admin console")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Sign in and store the session
    Login {
        user_id: String,
        /// Read from stdin when omitted
        #[arg(long)]
        password: Option<String>,
    },
    /// Sign out and clear the stored session
    Logout,
    /// Show the signed-in user
    Whoami,
    /// Check menu access for the signed-in user
    Access {
        menu_code: String,
        #[arg(default_value = "READ")]
        action: String,
    },
    /// Menu administration
    #[command(subcommand)]
    Menu(MenuCommand),
    /// List a resource collection
    List { resource: Resource },
    /// Show one record as JSON
    Get { resource: Resource, id: String },
    /// Create a record from a JSON document
    Create {
        resource: Resource,
        #[arg(long)]
        file: PathBuf,
    },
    /// Update a record from a JSON document
    Update {
        resource: Resource,
        id: String,
        #[arg(long)]
        file: PathBuf,
    },
    /// Delete a record
    Delete { resource: Resource, id: String },
}

#[derive(Subcommand)]
enum MenuCommand {
    /// Print the menu tree
    Tree {
        /// Only menus visible to the signed-in user
        #[arg(long)]
        visible: bool,
    },
    /// Create a menu from a JSON document
    Create {
        #[arg(long)]
        file: PathBuf,
    },
    /// Create a sub-menu under a parent, slotted last
    CreateChild {
        parent: i64,
        #[arg(long)]
        file: PathBuf,
    },
    /// Update a menu from a JSON document
    Update {
        menu_no: i64,
        #[arg(long)]
        file: PathBuf,
    },
    /// Delete a menu
    Delete { menu_no: i64 },
    /// Move a menu onto a sibling's slot and persist the new order
    Move { active: i64, over: i64 },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Resource {
    Tenants,
    Branches,
    Groups,
    Positions,
    Users,
    Leads,
    Customers,
    Opportunities,
    Products,
    Quotes,
    Activities,
    Stages,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };
    let _guard = crm_shared::telemetry::init_telemetry(&config.logging);

    let store = Arc::new(FileSessionStore::new(&config.session.file));
    let client = Arc::new(ApiClient::new(&config.api, store.clone())?);
    let ctx = Ctx { client, store };

    // Everything except login needs a stored session
    if !matches!(cli.command, Command::Login { .. }) && ctx.store.load().is_none() {
        eprintln!("Not signed in. Run `crm login <user-id>` first.");
        std::process::exit(1);
    }

    if let Err(e) = commands::run(cli.command, &ctx).await {
        error!("Command failed: {:#}", e);
        let expired = e
            .downcast_ref::<DomainError>()
            .map(DomainError::is_auth_failure)
            .unwrap_or(false);
        eprintln!("Error: {:#}", e);
        if expired {
            eprintln!("Session is no longer valid. Run `crm login <user-id>` again.");
        }
        std::process::exit(1);
    }
    Ok(())
}
