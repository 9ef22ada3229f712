//! Money movements: donations received by campaigns and organizer withdrawal
//! requests awaiting admin review.

use crate::format::{format_currency, format_date};
use crate::model::{default_currency, lenient_amount, lenient_string};
use crate::table::TableRow;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Donation {
    #[serde(alias = "_id", deserialize_with = "lenient_string")]
    pub id: String,
    pub donor_name: Option<String>,
    pub donor_email: Option<String>,
    pub campaign_title: String,
    #[serde(deserialize_with = "lenient_amount")]
    pub amount: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
    pub status: String,
    pub payment_method: Option<String>,
    pub reference: Option<String>,
    pub created_at: String,
}

impl Donation {
    pub fn is_successful(&self) -> bool {
        matches!(self.status.as_str(), "success" | "successful" | "completed" | "paid")
    }
}

impl TableRow for Donation {
    fn cell(&self, key: &str) -> String {
        match key {
            "donor" => self
                .donor_name
                .clone()
                .unwrap_or_else(|| "Anonymous".to_string()),
            "email" => self.donor_email.clone().unwrap_or_default(),
            "campaign" => self.campaign_title.clone(),
            "amount" => format_currency(self.amount, &self.currency),
            "status" => self.status.clone(),
            "method" => self.payment_method.clone().unwrap_or_default(),
            "reference" => self.reference.clone().unwrap_or_default(),
            "createdAt" => format_date(&self.created_at),
            _ => String::new(),
        }
    }

    fn sort_value(&self, key: &str) -> String {
        match key {
            "amount" => self.amount.to_string(),
            "createdAt" => self.created_at.clone(),
            _ => self.cell(key),
        }
    }

    fn row_id(&self) -> String {
        self.id.clone()
    }
}

/// Aggregate figures shown in the donations stat cards.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DonationSummary {
    pub count: usize,
    pub successful: usize,
    pub total_raised: f64,
    pub average: f64,
}

impl DonationSummary {
    /// Only successful donations count towards the totals.
    pub fn from_donations(donations: &[Donation]) -> Self {
        let paid: Vec<&Donation> = donations.iter().filter(|d| d.is_successful()).collect();
        let total_raised: f64 = paid.iter().map(|d| d.amount).sum();
        Self {
            count: donations.len(),
            successful: paid.len(),
            total_raised,
            average: if paid.is_empty() {
                0.0
            } else {
                total_raised / paid.len() as f64
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WithdrawalStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    Paid,
    #[serde(other)]
    Unknown,
}

impl WithdrawalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            WithdrawalStatus::Pending => "pending",
            WithdrawalStatus::Approved => "approved",
            WithdrawalStatus::Rejected => "rejected",
            WithdrawalStatus::Paid => "paid",
            WithdrawalStatus::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Withdrawal {
    #[serde(alias = "_id", deserialize_with = "lenient_string")]
    pub id: String,
    pub organizer_name: String,
    pub campaign_title: String,
    #[serde(deserialize_with = "lenient_amount")]
    pub amount: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
    pub status: WithdrawalStatus,
    pub destination: Option<String>,
    pub rejection_reason: Option<String>,
    pub requested_at: String,
}

impl Withdrawal {
    pub fn is_reviewable(&self) -> bool {
        self.status == WithdrawalStatus::Pending
    }
}

impl TableRow for Withdrawal {
    fn cell(&self, key: &str) -> String {
        match key {
            "organizer" => self.organizer_name.clone(),
            "campaign" => self.campaign_title.clone(),
            "amount" => format_currency(self.amount, &self.currency),
            "status" => self.status.as_str().to_string(),
            "destination" => self.destination.clone().unwrap_or_default(),
            "reason" => self.rejection_reason.clone().unwrap_or_default(),
            "requestedAt" => format_date(&self.requested_at),
            _ => String::new(),
        }
    }

    fn sort_value(&self, key: &str) -> String {
        match key {
            "amount" => self.amount.to_string(),
            "requestedAt" => self.requested_at.clone(),
            _ => self.cell(key),
        }
    }

    fn row_id(&self) -> String {
        self.id.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn donation(amount: f64, status: &str) -> Donation {
        Donation {
            amount,
            status: status.to_string(),
            currency: "USD".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_summary_counts_only_successful() {
        let summary = DonationSummary::from_donations(&[
            donation(10.0, "success"),
            donation(30.0, "completed"),
            donation(500.0, "failed"),
        ]);
        assert_eq!(summary.count, 3);
        assert_eq!(summary.successful, 2);
        assert_eq!(summary.total_raised, 40.0);
        assert_eq!(summary.average, 20.0);
        assert_eq!(DonationSummary::from_donations(&[]).average, 0.0);
    }

    #[test]
    fn test_anonymous_donor_and_amount_sort() {
        let d = donation(1500.0, "success");
        assert_eq!(d.cell("donor"), "Anonymous");
        assert_eq!(d.cell("amount"), "$1,500.00");
        assert_eq!(d.sort_value("amount"), "1500");
    }

    #[test]
    fn test_withdrawal_reviewable() {
        let w: Withdrawal = serde_json::from_str(r#"{"id": 1, "amount": 20, "status": "pending"}"#).unwrap();
        assert!(w.is_reviewable());
        let w: Withdrawal = serde_json::from_str(r#"{"id": 1, "status": "paid"}"#).unwrap();
        assert!(!w.is_reviewable());
    }
}
