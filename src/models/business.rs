use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::str::FromStr;

/// Business-loan application. Monetary fields travel as decimal strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Business {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub business_type: String,
    pub turnover: String,
    pub loan_amount: String,
    pub mobile_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Business {
    pub fn loan_amount_decimal(&self) -> Option<Decimal> {
        parse_amount(&self.loan_amount)
    }

    pub fn turnover_decimal(&self) -> Option<Decimal> {
        parse_amount(&self.turnover)
    }
}

/// Create payload: no id or timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBusiness {
    pub business_type: String,
    pub turnover: String,
    pub loan_amount: String,
    pub mobile_number: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub turnover: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loan_amount: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile_number: Option<String>,
}

/// Parse a decimal-string amount, tolerating thousands separators.
pub fn parse_amount(raw: &str) -> Option<Decimal> {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() {
        return None;
    }
    Decimal::from_str(&cleaned)
        .or_else(|_| Decimal::from_scientific(&cleaned))
        .ok()
}

/// Read an amount sent either as a number or as a decimal string.
/// Anything that is not a readable amount becomes `None`.
pub(crate) fn lenient_amount<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let amount = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => parse_amount(&n.to_string()),
        Some(Value::String(s)) => parse_amount(&s),
        _ => None,
    };
    Ok(amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_payload_has_no_server_fields() {
        let body = serde_json::to_value(NewBusiness {
            business_type: "retail".into(),
            turnover: "1200000".into(),
            loan_amount: "250000".into(),
            mobile_number: "9876543210".into(),
        })
        .unwrap();
        let keys: Vec<_> = body.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys.len(), 4);
        assert!(body.get("_id").is_none());
        assert!(body.get("createdAt").is_none());
    }

    #[test]
    fn amounts_parse_as_decimals() {
        assert_eq!(parse_amount("2,50,000.75"), Some(Decimal::new(25000075, 2)));
        assert_eq!(parse_amount("  "), None);
        assert_eq!(parse_amount("lots"), None);
    }
}
