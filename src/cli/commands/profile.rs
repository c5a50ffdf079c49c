use clap::Subcommand;
use serde_json::json;

use crate::cli::utils::*;
use crate::cli::{open_protected_client, OutputFormat};
use crate::models::{LoanRecord, UserUpdate};

#[derive(Subcommand)]
pub enum ProfileCommands {
    #[command(about = "Show the signed-in account")]
    Show,

    #[command(about = "Update the account from partial JSON on stdin")]
    Update,

    #[command(about = "Show pending and completed loan requests")]
    Home,

    #[command(about = "Request an OTP to change the phone number")]
    ChangePhone {
        #[arg(help = "New phone number")]
        phone_number: String,
    },

    #[command(about = "Confirm a phone number change with the OTP")]
    ConfirmPhone {
        #[arg(help = "New phone number")]
        phone_number: String,
        #[arg(help = "One-time password")]
        otp: String,
    },
}

pub async fn handle(cmd: ProfileCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    let client = open_protected_client()?;
    let users = client.users();

    match cmd {
        ProfileCommands::Show => {
            let envelope = users.get_details().await?;
            let user = &envelope
                .data_ref()
                .ok_or_else(|| anyhow::anyhow!("No user in response"))?
                .user;

            match output_format {
                OutputFormat::Json => print_json(user),
                OutputFormat::Text => {
                    println!("{} <{}>", user.full_name, user.email);
                    println!("Phone: {}", user.phone_number);
                    println!("Status: {}", user.activity());
                    Ok(())
                }
            }
        }
        ProfileCommands::Update => {
            let update: UserUpdate = read_stdin_json()?;
            let envelope = users.update(&update).await?;
            output_success(
                &output_format,
                "Profile updated",
                Some(json!({ "user": envelope.data_ref().map(|d| &d.user) })),
            )
        }
        ProfileCommands::Home => {
            let envelope = users.get_home_page_data().await?;
            let home = envelope.into_data().unwrap_or_default();

            match output_format {
                OutputFormat::Json => print_json(&home),
                OutputFormat::Text => {
                    print_section("Pending", &home.pending_loan_request);
                    print_section("Completed", &home.completed_loan_requests);
                    Ok(())
                }
            }
        }
        ProfileCommands::ChangePhone { phone_number } => {
            let envelope = users.change_phone_request(&phone_number).await?;
            let message = if envelope.message.is_empty() {
                format!("OTP sent to {}", phone_number)
            } else {
                envelope.message
            };
            output_success(&output_format, &message, None)
        }
        ProfileCommands::ConfirmPhone { phone_number, otp } => {
            let envelope = users.confirm_phone_change(&phone_number, &otp).await?;
            let confirmed = envelope
                .data_ref()
                .map(|d| d.phone_number.clone())
                .unwrap_or(phone_number);
            output_success(
                &output_format,
                &format!("Phone number changed to {}", confirmed),
                Some(json!({ "phoneNumber": confirmed })),
            )
        }
    }
}

fn print_section(title: &str, loans: &[LoanRecord]) {
    println!("{} ({})", title, loans.len());
    for loan in loans {
        println!(
            "  {:<26} {:<12} {}",
            or_dash(loan.id.as_deref()),
            loan.amount.map(|a| a.to_string()).unwrap_or_else(|| "-".to_string()),
            status_badge(loan.status.as_deref())
        );
    }
}
