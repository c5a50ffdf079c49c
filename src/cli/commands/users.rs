use clap::Subcommand;
use serde_json::json;

use crate::cli::utils::*;
use crate::cli::{open_protected_client, OutputFormat};
use crate::filters::{count_loans_by_status, find_user, loans_for_user, ActivityFilter, UserFilter};
use crate::models::{LoanStatus, User};

#[derive(Subcommand)]
pub enum UserCommands {
    #[command(about = "List users")]
    List {
        #[arg(long, help = "Match name, email or phone number")]
        search: Option<String>,
        #[arg(long, default_value = "all", help = "all, active or inactive")]
        status: ActivityFilter,
    },

    #[command(about = "Show a user with their loan history")]
    Show {
        #[arg(help = "User ID")]
        id: String,
    },
}

pub async fn handle(cmd: UserCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    let client = open_protected_client()?;

    match cmd {
        UserCommands::List { search, status } => {
            let users = client.admin().get_users().await?.into_data().unwrap_or_default().users;
            let filter = UserFilter {
                search,
                activity: status,
            };
            let matched = filter.apply(&users);

            if matched.is_empty() {
                return output_empty_collection(&output_format, "users", "No users found");
            }

            match output_format {
                OutputFormat::Json => print_json(&json!({ "users": matched })),
                OutputFormat::Text => {
                    println!("{:<26} {:<24} {:<28} {:<14} {}", "ID", "NAME", "EMAIL", "PHONE", "STATUS");
                    println!("{}", "-".repeat(100));
                    for user in matched {
                        print_user_row(user);
                    }
                    Ok(())
                }
            }
        }
        UserCommands::Show { id } => {
            // Fired together; the two lookups are independent
            let admin = client.admin();
            let (users, loans) = tokio::join!(admin.get_users(), admin.get_loans());

            let users = users?.into_data().unwrap_or_default().users;
            let user = find_user(&users, &id)
                .ok_or_else(|| anyhow::anyhow!("User '{}' not found", id))?;

            // A failed loan lookup still shows the user
            let loans = match loans {
                Ok(envelope) => envelope.into_data().unwrap_or_default(),
                Err(e) => {
                    tracing::warn!("Could not load loans for user {}: {}", id, e);
                    Vec::new()
                }
            };
            let user_loans = loans_for_user(&loans, &id);
            let counts = count_loans_by_status(user_loans.iter().copied());

            match output_format {
                OutputFormat::Json => print_json(&json!({
                    "user": user,
                    "status": user.activity(),
                    "loans": user_loans,
                    "approved": counts.get(LoanStatus::Approved),
                    "pending": counts.get(LoanStatus::Pending),
                })),
                OutputFormat::Text => {
                    println!("{} ({})", user.full_name, user.initials());
                    println!("Email: {}", user.email);
                    println!("Phone: {}", user.phone_number);
                    println!("Status: {}", user.activity());
                    println!("Role: {:?}  Auth: {:?}", user.role, user.auth_provider);
                    if let Some(joined) = user.created_at {
                        println!("Joined: {}", joined.format("%Y-%m-%d"));
                    }

                    println!(
                        "\nLoans: {} total, {} approved, {} pending",
                        user_loans.len(),
                        counts.get(LoanStatus::Approved),
                        counts.get(LoanStatus::Pending)
                    );
                    for loan in &user_loans {
                        println!(
                            "  {:<26} {:<12} {:<26} applied {}",
                            or_dash(loan.id.as_deref()),
                            loan.amount.map(|a| a.to_string()).unwrap_or_else(|| "-".to_string()),
                            status_badge(loan.status.as_deref()),
                            loan.created_at
                                .map(|d| d.format("%Y-%m-%d").to_string())
                                .unwrap_or_else(|| "Unknown date".to_string())
                        );
                    }
                    Ok(())
                }
            }
        }
    }
}

fn print_user_row(user: &User) {
    println!(
        "{:<26} {:<24} {:<28} {:<14} {}",
        or_dash(user.id.as_deref()),
        user.full_name,
        user.email,
        user.phone_number,
        user.activity()
    );
}
