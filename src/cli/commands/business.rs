use clap::Subcommand;
use serde_json::json;

use crate::cli::utils::*;
use crate::cli::{open_protected_client, OutputFormat};
use crate::filters::total_loan_amount;
use crate::models::{BusinessUpdate, NewBusiness};

#[derive(Subcommand)]
pub enum BusinessCommands {
    #[command(about = "List business-loan applications")]
    List,

    #[command(about = "Show one application")]
    Show {
        #[arg(help = "Business ID")]
        id: String,
    },

    #[command(about = "Create an application from JSON on stdin")]
    Create,

    #[command(about = "Update an application from partial JSON on stdin")]
    Update {
        #[arg(help = "Business ID")]
        id: String,
    },
}

pub async fn handle(cmd: BusinessCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    let client = open_protected_client()?;
    let business = client.business();

    match cmd {
        BusinessCommands::List => {
            let all = business.get_all().await?.into_data().unwrap_or_default();
            if all.is_empty() {
                return output_empty_collection(&output_format, "businesses", "No business applications found");
            }

            match output_format {
                OutputFormat::Json => print_json(&json!({ "businesses": all })),
                OutputFormat::Text => {
                    println!("{:<26} {:<18} {:<14} {:<14} {}", "ID", "TYPE", "TURNOVER", "LOAN AMOUNT", "MOBILE");
                    println!("{}", "-".repeat(90));
                    for b in &all {
                        println!(
                            "{:<26} {:<18} {:<14} {:<14} {}",
                            or_dash(b.id.as_deref()),
                            b.business_type,
                            b.turnover,
                            b.loan_amount,
                            b.mobile_number
                        );
                    }

                    let sum = total_loan_amount(&all);
                    println!("\nTotal requested: ₹{}", sum.total);
                    if sum.skipped > 0 {
                        println!("({} application(s) with an unreadable amount not counted)", sum.skipped);
                    }
                    Ok(())
                }
            }
        }
        BusinessCommands::Show { id } => {
            let envelope = business.get_by_id(&id).await?;
            let b = envelope
                .data_ref()
                .ok_or_else(|| anyhow::anyhow!("Business '{}' not found", id))?;

            match output_format {
                OutputFormat::Json => print_json(b),
                OutputFormat::Text => {
                    println!("Type: {}", b.business_type);
                    println!("Turnover: {}", b.turnover);
                    println!("Loan amount: {}", b.loan_amount);
                    println!("Mobile: {}", b.mobile_number);
                    if let Some(created) = b.created_at {
                        println!("Applied: {}", created.format("%Y-%m-%d %H:%M"));
                    }
                    Ok(())
                }
            }
        }
        BusinessCommands::Create => {
            let new_business: NewBusiness = read_stdin_json()?;
            let envelope = business.create(&new_business).await?;
            output_success(
                &output_format,
                "Business application created",
                Some(json!({ "business": envelope.data_ref() })),
            )
        }
        BusinessCommands::Update { id } => {
            let update: BusinessUpdate = read_stdin_json()?;
            let envelope = business.update(&id, &update).await?;
            output_success(
                &output_format,
                &format!("Business application '{}' updated", id),
                Some(json!({ "business": envelope.data_ref() })),
            )
        }
    }
}
