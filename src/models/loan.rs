use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::business::lenient_amount;
use std::fmt;
use std::str::FromStr;

/// Closed set of loan/lead statuses the dashboard knows how to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoanStatus {
    Pending,
    Approved,
    Rejected,
    Reviewing,
}

/// Display category a status badge is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusCategory {
    Success,
    Warning,
    Danger,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown status '{0}'")]
pub struct UnknownStatus(pub String);

impl LoanStatus {
    pub const ALL: [LoanStatus; 4] = [
        LoanStatus::Pending,
        LoanStatus::Approved,
        LoanStatus::Rejected,
        LoanStatus::Reviewing,
    ];

    pub fn category(&self) -> StatusCategory {
        match self {
            LoanStatus::Approved => StatusCategory::Success,
            LoanStatus::Pending => StatusCategory::Warning,
            LoanStatus::Rejected => StatusCategory::Danger,
            LoanStatus::Reviewing => StatusCategory::Info,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LoanStatus::Pending => "pending",
            LoanStatus::Approved => "approved",
            LoanStatus::Rejected => "rejected",
            LoanStatus::Reviewing => "reviewing",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LoanStatus::Pending => "Pending",
            LoanStatus::Approved => "Approved",
            LoanStatus::Rejected => "Rejected",
            LoanStatus::Reviewing => "Reviewing",
        }
    }
}

impl FromStr for LoanStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(LoanStatus::Pending),
            "approved" => Ok(LoanStatus::Approved),
            "rejected" => Ok(LoanStatus::Rejected),
            "reviewing" => Ok(LoanStatus::Reviewing),
            _ => Err(UnknownStatus(s.to_string())),
        }
    }
}

impl fmt::Display for LoanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A loan request as listed by the admin and home-page endpoints.
///
/// Fields beyond the ones the dashboard reads are kept in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanRecord {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loan_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_amount", skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LoanRecord {
    /// `None` when the backend sent no status at all.
    pub fn status_kind(&self) -> Option<Result<LoanStatus, UnknownStatus>> {
        self.status.as_deref().map(str::parse)
    }

    pub fn has_status(&self, status: LoanStatus) -> bool {
        matches!(self.status_kind(), Some(Ok(s)) if s == status)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    #[serde(default)]
    pub total_users: Option<u64>,
    #[serde(default)]
    pub pending_requests: Option<u64>,
    #[serde(default)]
    pub completed_loans: Option<u64>,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub total_amount: Option<Decimal>,
    #[serde(default)]
    pub recent_requests: Vec<LoanRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomePageData {
    #[serde(default)]
    pub pending_loan_request: Vec<LoanRecord>,
    #[serde(default)]
    pub completed_loan_requests: Vec<LoanRecord>,
}
