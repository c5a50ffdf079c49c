use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use std::io::Read;

use crate::cli::OutputFormat;
use crate::models::{LoanStatus, StatusCategory};

/// Output a success message in the appropriate format
pub fn output_success(
    output_format: &OutputFormat,
    message: &str,
    data: Option<Value>,
) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            let mut response = json!({
                "success": true,
                "message": message
            });

            if let (Some(Value::Object(extra)), Some(obj)) = (data, response.as_object_mut()) {
                obj.extend(extra);
            }

            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Text => {
            println!("✓ {}", message);
        }
    }
    Ok(())
}

/// Print any serializable value as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Output an empty collection in the appropriate format
pub fn output_empty_collection(
    output_format: &OutputFormat,
    collection_name: &str,
    message: &str,
) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => print_json(&json!({ collection_name: [] })),
        OutputFormat::Text => {
            println!("{}", message);
            Ok(())
        }
    }
}

/// Read one JSON document from stdin into `T`
pub fn read_stdin_json<T: DeserializeOwned>() -> anyhow::Result<T> {
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    if input.trim().is_empty() {
        anyhow::bail!("Expected a JSON document on stdin");
    }
    serde_json::from_str(&input).map_err(|e| anyhow::anyhow!("Invalid JSON on stdin: {}", e))
}

/// Text badge for a raw status string. Unknown values are shown as such.
pub fn status_badge(raw: Option<&str>) -> String {
    match raw {
        None | Some("") => "Unknown".to_string(),
        Some(raw) => match raw.parse::<LoanStatus>() {
            Ok(status) => format!("{} [{}]", status.label(), category_marker(status.category())),
            Err(_) => format!("{} [unrecognized]", raw),
        },
    }
}

fn category_marker(category: StatusCategory) -> &'static str {
    match category {
        StatusCategory::Success => "ok",
        StatusCategory::Warning => "waiting",
        StatusCategory::Danger => "declined",
        StatusCategory::Info => "in review",
    }
}

pub fn or_dash(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => "-",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badges_never_fall_through_silently() {
        assert_eq!(status_badge(Some("approved")), "Approved [ok]");
        assert_eq!(status_badge(Some("Reviewing")), "Reviewing [in review]");
        assert_eq!(status_badge(Some("disbursed")), "disbursed [unrecognized]");
        assert_eq!(status_badge(None), "Unknown");
    }
}
