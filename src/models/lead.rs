use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::loan::{LoanStatus, UnknownStatus};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub city: String,
    pub pincode: String,
    pub loan_type: String,
    pub amount: String,
    pub tenure: String,
    pub mobile_number: String,
    /// Server-assigned.
    #[serde(default)]
    pub status: String,
    /// Server-assigned.
    #[serde(default)]
    pub application_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Lead {
    pub fn status_kind(&self) -> Result<LoanStatus, UnknownStatus> {
        self.status.parse()
    }
}

/// Create payload. Status, application number, id and timestamps are
/// assigned by the backend and cannot be expressed here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLead {
    pub name: String,
    pub city: String,
    pub pincode: String,
    pub loan_type: String,
    pub amount: String,
    pub tenure: String,
    pub mobile_number: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pincode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loan_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenure: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn lead_status_parses_case_insensitively() {
        let lead: Lead = serde_json::from_value(json!({
            "_id": "l1",
            "name": "Asha",
            "city": "Pune",
            "pincode": "411001",
            "loanType": "personal",
            "amount": "50000",
            "tenure": "12",
            "mobileNumber": "9000000000",
            "status": "Approved",
            "applicationNumber": "APP-1"
        }))
        .unwrap();
        assert_eq!(lead.status_kind(), Ok(LoanStatus::Approved));
    }

    #[test]
    fn partial_update_sends_only_set_fields() {
        let update = LeadUpdate {
            city: Some("Nagpur".into()),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(update).unwrap(), json!({ "city": "Nagpur" }));
    }
}
