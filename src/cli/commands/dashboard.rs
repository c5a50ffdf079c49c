use crate::cli::utils::*;
use crate::cli::{open_protected_client, OutputFormat};

pub async fn handle(output_format: OutputFormat) -> anyhow::Result<()> {
    let client = open_protected_client()?;
    let envelope = client.admin().get_dashboard_stats().await?;

    if let OutputFormat::Json = output_format {
        return print_json(&envelope);
    }

    let stats = envelope.into_data().unwrap_or_default();
    let count = |v: Option<u64>| v.unwrap_or(0).to_string();

    println!("Total Users:       {}", count(stats.total_users));
    println!("Pending Requests:  {}", count(stats.pending_requests));
    println!("Approved Loans:    {}", count(stats.completed_loans));
    println!("Total Amount:      ₹{}", stats.total_amount.unwrap_or_default());

    if stats.recent_requests.is_empty() {
        println!("\nNo recent requests");
        return Ok(());
    }

    println!("\nRecent requests");
    println!("{:<26} {:<15} {}", "ID", "AMOUNT", "STATUS");
    println!("{}", "-".repeat(60));
    for request in &stats.recent_requests {
        println!(
            "{:<26} {:<15} {}",
            or_dash(request.id.as_deref()),
            request.amount.map(|a| a.to_string()).unwrap_or_else(|| "-".to_string()),
            status_badge(request.status.as_deref())
        );
    }

    Ok(())
}
