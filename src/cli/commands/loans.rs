use clap::Subcommand;
use serde_json::json;

use crate::cli::utils::*;
use crate::cli::{open_protected_client, OutputFormat};
use crate::filters::count_loans_by_status;
use crate::models::LoanStatus;

#[derive(Subcommand)]
pub enum LoanCommands {
    #[command(about = "List loan requests")]
    List {
        #[arg(long, help = "pending, approved, rejected or reviewing")]
        status: Option<LoanStatus>,
    },
}

pub async fn handle(cmd: LoanCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    let client = open_protected_client()?;

    match cmd {
        LoanCommands::List { status } => {
            let loans = client.admin().get_loans().await?.into_data().unwrap_or_default();
            let matched: Vec<_> = loans
                .iter()
                .filter(|loan| status.map_or(true, |s| loan.has_status(s)))
                .collect();

            if matched.is_empty() {
                return output_empty_collection(&output_format, "loans", "No loan requests found");
            }

            let counts = count_loans_by_status(&loans);
            match output_format {
                OutputFormat::Json => print_json(&json!({ "loans": matched })),
                OutputFormat::Text => {
                    for s in LoanStatus::ALL {
                        print!("{}: {}  ", s.label(), counts.get(s));
                    }
                    println!();

                    println!("{:<26} {:<26} {:<12} {}", "ID", "USER", "AMOUNT", "STATUS");
                    println!("{}", "-".repeat(90));
                    for loan in matched {
                        println!(
                            "{:<26} {:<26} {:<12} {}",
                            or_dash(loan.id.as_deref()),
                            or_dash(loan.user_id.as_deref()),
                            loan.amount.map(|a| a.to_string()).unwrap_or_else(|| "-".to_string()),
                            status_badge(loan.status.as_deref())
                        );
                    }
                    Ok(())
                }
            }
        }
    }
}
