use clap::Subcommand;
use serde_json::json;
use std::io::{BufRead, Write};

use crate::auth::{self, GuardOutcome, RouteGuard};
use crate::cli::utils::*;
use crate::cli::{open_client, session_store, OutputFormat};
use crate::config;
use crate::session::SessionStore;

#[derive(Subcommand)]
pub enum AuthCommands {
    #[command(about = "Login as an admin")]
    Login {
        #[arg(help = "Admin email")]
        email: String,
        #[arg(long, help = "Password (will prompt if not provided)")]
        password: Option<String>,
    },

    #[command(about = "Forget the stored session token")]
    Logout,

    #[command(about = "Show current authentication status")]
    Status,
}

pub async fn handle(cmd: AuthCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        AuthCommands::Login { email, password } => {
            let password = match password {
                Some(p) => p,
                None => prompt_password()?,
            };
            if email.trim().is_empty() || password.is_empty() {
                anyhow::bail!("Please enter both email and password");
            }

            let client = open_client()?;
            auth::login(&client, &email, &password).await?;

            output_success(
                &output_format,
                "Login successful! Welcome to the admin panel.",
                Some(json!({ "email": email })),
            )
        }
        AuthCommands::Logout => {
            let store = session_store()?;
            store.clear()?;
            output_success(&output_format, "Logged out", None)
        }
        AuthCommands::Status => {
            let store = session_store()?;
            let mut guard = RouteGuard::new(&store);
            let authenticated = guard.check() == GuardOutcome::Render;

            match output_format {
                OutputFormat::Json => print_json(&json!({
                    "authenticated": authenticated,
                    "base_url": config::config().api.base_url,
                    "session_file": store.path().display().to_string(),
                })),
                OutputFormat::Text => {
                    if authenticated {
                        println!("Logged in (token stored in {})", store.path().display());
                    } else {
                        println!("Not logged in");
                    }
                    println!("Backend: {}", config::config().api.base_url);
                    Ok(())
                }
            }
        }
    }
}

fn prompt_password() -> anyhow::Result<String> {
    eprint!("Password: ");
    std::io::stderr().flush()?;
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
