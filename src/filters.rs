//! List filtering and summaries used by the list and detail views.

use rust_decimal::Decimal;
use std::collections::HashMap;
use std::str::FromStr;

use crate::models::{ActivityLabel, Business, Lead, LoanRecord, LoanStatus, User};

/// Activity filter for the user list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActivityFilter {
    #[default]
    All,
    Only(ActivityLabel),
}

impl FromStr for ActivityFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(ActivityFilter::All),
            "active" => Ok(ActivityFilter::Only(ActivityLabel::Active)),
            "inactive" => Ok(ActivityFilter::Only(ActivityLabel::Inactive)),
            other => Err(format!("unknown activity filter '{}' (expected all, active or inactive)", other)),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UserFilter {
    pub search: Option<String>,
    pub activity: ActivityFilter,
}

impl UserFilter {
    pub fn matches(&self, user: &User) -> bool {
        let matches_search = match self.search.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(term) => {
                let term = term.to_lowercase();
                user.full_name.to_lowercase().contains(&term)
                    || user.email.to_lowercase().contains(&term)
                    || user.phone_number.contains(&term)
            }
        };

        let matches_activity = match self.activity {
            ActivityFilter::All => true,
            ActivityFilter::Only(label) => user.activity() == label,
        };

        matches_search && matches_activity
    }

    pub fn apply<'a>(&self, users: &'a [User]) -> Vec<&'a User> {
        users.iter().filter(|u| self.matches(u)).collect()
    }
}

pub fn find_user<'a>(users: &'a [User], id: &str) -> Option<&'a User> {
    users.iter().find(|u| u.id.as_deref() == Some(id))
}

pub fn loans_for_user<'a>(loans: &'a [LoanRecord], user_id: &str) -> Vec<&'a LoanRecord> {
    loans
        .iter()
        .filter(|loan| loan.user_id.as_deref() == Some(user_id))
        .collect()
}

/// Per-status counts. Records with a missing or unknown status are counted
/// separately rather than folded into a known bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub by_status: HashMap<LoanStatus, usize>,
    pub unrecognized: usize,
}

impl StatusCounts {
    pub fn get(&self, status: LoanStatus) -> usize {
        self.by_status.get(&status).copied().unwrap_or(0)
    }

    fn record(&mut self, status: Option<LoanStatus>) {
        match status {
            Some(s) => *self.by_status.entry(s).or_insert(0) += 1,
            None => self.unrecognized += 1,
        }
    }
}

pub fn count_loans_by_status<'a, I>(loans: I) -> StatusCounts
where
    I: IntoIterator<Item = &'a LoanRecord>,
{
    let mut counts = StatusCounts::default();
    for loan in loans {
        counts.record(loan.status_kind().and_then(Result::ok));
    }
    counts
}

pub fn count_leads_by_status(leads: &[Lead]) -> StatusCounts {
    let mut counts = StatusCounts::default();
    for lead in leads {
        counts.record(lead.status_kind().ok());
    }
    counts
}

/// Sum of requested business loan amounts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AmountTotal {
    pub total: Decimal,
    pub skipped: usize,
}

pub fn total_loan_amount(businesses: &[Business]) -> AmountTotal {
    let mut sum = AmountTotal::default();
    for business in businesses {
        match business.loan_amount_decimal() {
            Some(amount) => sum.total += amount,
            None => {
                tracing::debug!("skipping unparseable loan amount '{}'", business.loan_amount);
                sum.skipped += 1;
            }
        }
    }
    sum
}
