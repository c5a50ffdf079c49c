use clap::Subcommand;
use serde_json::json;

use crate::cli::utils::*;
use crate::cli::{open_protected_client, OutputFormat};
use crate::models::EmploymentUpdate;

#[derive(Subcommand)]
pub enum EmploymentCommands {
    #[command(about = "Show employment details")]
    Show,

    #[command(about = "Update employment details from partial JSON on stdin")]
    Update,
}

pub async fn handle(cmd: EmploymentCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    let client = open_protected_client()?;

    match cmd {
        EmploymentCommands::Show => {
            let envelope = client.employment().get().await?;
            let Some(details) = envelope.data_ref() else {
                println!("No employment details on record");
                return Ok(());
            };

            match output_format {
                OutputFormat::Json => print_json(details),
                OutputFormat::Text => {
                    println!("Employment type: {}", details.employment_type.as_str());
                    println!("Net monthly income: {}", details.net_monthly_income);
                    if details.employment_type.expects_company() || details.company_or_business_name.is_some() {
                        println!("Company: {}", or_dash(details.company_or_business_name.as_deref()));
                        println!("Company pin code: {}", or_dash(details.company_pin_code.as_deref()));
                    }
                    println!("Payment mode: {}", or_dash(details.payment_mode.as_deref()));
                    Ok(())
                }
            }
        }
        EmploymentCommands::Update => {
            let update: EmploymentUpdate = read_stdin_json()?;
            let envelope = client.employment().update(&update).await?;
            output_success(
                &output_format,
                "Employment details updated",
                Some(json!({ "employment": envelope.data_ref() })),
            )
        }
    }
}
