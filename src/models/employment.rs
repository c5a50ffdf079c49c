use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmploymentType {
    Salaried,
    SelfEmployed,
    BusinessOwner,
    Unemployed,
    Other,
}

impl EmploymentType {
    /// Salaried employment is the only type expected to carry company fields.
    pub fn expects_company(&self) -> bool {
        matches!(self, EmploymentType::Salaried)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EmploymentType::Salaried => "salaried",
            EmploymentType::SelfEmployed => "self-employed",
            EmploymentType::BusinessOwner => "business-owner",
            EmploymentType::Unemployed => "unemployed",
            EmploymentType::Other => "other",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmploymentDetails {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub user_id: String,
    /// Decimal string, exactly as the backend stores it.
    pub net_monthly_income: String,
    pub employment_type: EmploymentType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_or_business_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_pin_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_slip_document: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Partial update: only the fields the caller sets are sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmploymentUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub net_monthly_income: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employment_type: Option<EmploymentType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_or_business_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_pin_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_slip_document: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_mode: Option<String>,
}
