use clap::Subcommand;
use serde_json::json;

use crate::cli::utils::*;
use crate::cli::{open_protected_client, OutputFormat};
use crate::filters::count_leads_by_status;
use crate::models::{Lead, LeadUpdate, LoanStatus, NewLead};

#[derive(Subcommand)]
pub enum LeadCommands {
    #[command(about = "List all leads")]
    List,

    #[command(about = "Show a lead")]
    Show {
        #[arg(help = "Lead ID")]
        id: String,
    },

    #[command(about = "Create a lead from JSON on stdin")]
    Create,

    #[command(about = "Update a lead from partial JSON on stdin")]
    Update {
        #[arg(help = "Lead ID")]
        id: String,
    },

    #[command(about = "Find leads by mobile number")]
    ByMobile {
        #[arg(help = "Mobile number")]
        mobile_number: String,
    },

    #[command(about = "Find a lead by application number")]
    ByApplication {
        #[arg(help = "Application number")]
        application_number: String,
    },
}

pub async fn handle(cmd: LeadCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    let client = open_protected_client()?;
    let leads = client.leads();

    match cmd {
        LeadCommands::List => {
            let all = leads.get_all().await?.into_data().unwrap_or_default();
            output_leads(&output_format, &all, true)
        }
        LeadCommands::ByMobile { mobile_number } => {
            let found = leads.get_by_mobile(&mobile_number).await?.into_data().unwrap_or_default();
            output_leads(&output_format, &found, false)
        }
        LeadCommands::Show { id } => {
            let envelope = leads.get_by_id(&id).await?;
            output_lead(&output_format, envelope.data_ref())
        }
        LeadCommands::ByApplication { application_number } => {
            let envelope = leads.get_by_application_number(&application_number).await?;
            output_lead(&output_format, envelope.data_ref())
        }
        LeadCommands::Create => {
            let new_lead: NewLead = read_stdin_json()?;
            let envelope = leads.create(&new_lead).await?;
            let created = envelope.data_ref();
            output_success(
                &output_format,
                &format!(
                    "Lead created (application {})",
                    or_dash(created.map(|l| l.application_number.as_str()))
                ),
                Some(json!({ "lead": created })),
            )
        }
        LeadCommands::Update { id } => {
            let update: LeadUpdate = read_stdin_json()?;
            let envelope = leads.update(&id, &update).await?;
            output_success(
                &output_format,
                &format!("Lead '{}' updated", id),
                Some(json!({ "lead": envelope.data_ref() })),
            )
        }
    }
}

fn output_leads(output_format: &OutputFormat, leads: &[Lead], with_summary: bool) -> anyhow::Result<()> {
    if leads.is_empty() {
        return output_empty_collection(output_format, "leads", "No leads found");
    }

    match output_format {
        OutputFormat::Json => print_json(&json!({ "leads": leads })),
        OutputFormat::Text => {
            if with_summary {
                let counts = count_leads_by_status(leads);
                println!(
                    "Total: {}  Pending: {}  Approved: {}",
                    leads.len(),
                    counts.get(LoanStatus::Pending),
                    counts.get(LoanStatus::Approved)
                );
            }

            println!(
                "{:<16} {:<20} {:<12} {:<12} {:<10} {}",
                "APPLICATION", "NAME", "CITY", "LOAN TYPE", "AMOUNT", "STATUS"
            );
            println!("{}", "-".repeat(95));
            for lead in leads {
                println!(
                    "{:<16} {:<20} {:<12} {:<12} {:<10} {}",
                    or_dash(Some(lead.application_number.as_str())),
                    lead.name,
                    lead.city,
                    lead.loan_type,
                    lead.amount,
                    status_badge(Some(lead.status.as_str()))
                );
            }
            Ok(())
        }
    }
}

fn output_lead(output_format: &OutputFormat, lead: Option<&Lead>) -> anyhow::Result<()> {
    let lead = lead.ok_or_else(|| anyhow::anyhow!("Lead not found"))?;

    match output_format {
        OutputFormat::Json => print_json(lead),
        OutputFormat::Text => {
            println!("Application: {}", or_dash(Some(lead.application_number.as_str())));
            println!("Name: {}", lead.name);
            println!("Mobile: {}", lead.mobile_number);
            println!("City: {} ({})", lead.city, lead.pincode);
            println!("Loan: {} of {} over {}", lead.loan_type, lead.amount, lead.tenure);
            println!("Status: {}", status_badge(Some(lead.status.as_str())));
            Ok(())
        }
    }
}
