pub mod commands;
pub mod utils;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::auth::{GuardOutcome, RouteGuard};
use crate::client::ApiClient;
use crate::config;
use crate::session::FileSessionStore;

#[derive(Parser)]
#[command(name = "loan-admin")]
#[command(about = "Admin console for the loan-origination backend")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in human-readable text format")]
    pub text: bool,

    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Admin login, logout and session status")]
    Auth {
        #[command(subcommand)]
        cmd: commands::auth::AuthCommands,
    },

    #[command(about = "Show dashboard statistics")]
    Dashboard,

    #[command(about = "Browse registered users")]
    Users {
        #[command(subcommand)]
        cmd: commands::users::UserCommands,
    },

    #[command(about = "Browse loan requests")]
    Loans {
        #[command(subcommand)]
        cmd: commands::loans::LoanCommands,
    },

    #[command(about = "Manage leads")]
    Leads {
        #[command(subcommand)]
        cmd: commands::leads::LeadCommands,
    },

    #[command(about = "Manage business-loan applications")]
    Business {
        #[command(subcommand)]
        cmd: commands::business::BusinessCommands,
    },

    #[command(about = "Employment details of the signed-in account")]
    Employment {
        #[command(subcommand)]
        cmd: commands::employment::EmploymentCommands,
    },

    #[command(about = "Profile of the signed-in account")]
    Profile {
        #[command(subcommand)]
        cmd: commands::profile::ProfileCommands,
    },
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub fn session_store() -> anyhow::Result<FileSessionStore> {
    Ok(FileSessionStore::in_dir(config::config_dir()?))
}

/// Client for calls that need no session (login).
pub fn open_client() -> anyhow::Result<ApiClient> {
    let store = session_store()?;
    Ok(ApiClient::from_config(config::config(), Arc::new(store))?)
}

/// Client for protected commands. Refuses to run without a resident token.
pub fn open_protected_client() -> anyhow::Result<ApiClient> {
    let store = session_store()?;
    let mut guard = RouteGuard::new(&store);
    match guard.check() {
        GuardOutcome::Render => {}
        GuardOutcome::Redirect { .. } | GuardOutcome::Loading => {
            anyhow::bail!("Not logged in. Run 'loan-admin auth login <email>' first");
        }
    }
    Ok(ApiClient::from_config(config::config(), Arc::new(store))?)
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);

    match cli.command {
        Commands::Auth { cmd } => commands::auth::handle(cmd, output_format).await,
        Commands::Dashboard => commands::dashboard::handle(output_format).await,
        Commands::Users { cmd } => commands::users::handle(cmd, output_format).await,
        Commands::Loans { cmd } => commands::loans::handle(cmd, output_format).await,
        Commands::Leads { cmd } => commands::leads::handle(cmd, output_format).await,
        Commands::Business { cmd } => commands::business::handle(cmd, output_format).await,
        Commands::Employment { cmd } => commands::employment::handle(cmd, output_format).await,
        Commands::Profile { cmd } => commands::profile::handle(cmd, output_format).await,
    }
}
