use crate::format::{format_currency, format_date, progress_percent};
use crate::model::{default_currency, lenient_amount, lenient_string};
use crate::table::TableRow;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    Draft,
    #[default]
    Pending,
    Active,
    Rejected,
    Suspended,
    Completed,
    #[serde(other)]
    Unknown,
}

impl CampaignStatus {
    pub const MODERATION: [CampaignStatus; 4] = [
        CampaignStatus::Active,
        CampaignStatus::Rejected,
        CampaignStatus::Suspended,
        CampaignStatus::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CampaignStatus::Draft => "draft",
            CampaignStatus::Pending => "pending",
            CampaignStatus::Active => "active",
            CampaignStatus::Rejected => "rejected",
            CampaignStatus::Suspended => "suspended",
            CampaignStatus::Completed => "completed",
            CampaignStatus::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Campaign {
    #[serde(alias = "_id", deserialize_with = "lenient_string")]
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(alias = "organizer")]
    pub organizer_name: String,
    pub category: Option<String>,
    pub status: CampaignStatus,
    #[serde(deserialize_with = "lenient_amount")]
    pub goal_amount: f64,
    #[serde(deserialize_with = "lenient_amount")]
    pub raised_amount: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
    pub end_date: Option<String>,
    pub created_at: String,
}

impl TableRow for Campaign {
    fn cell(&self, key: &str) -> String {
        match key {
            "title" => self.title.clone(),
            "organizer" => self.organizer_name.clone(),
            "category" => self.category.clone().unwrap_or_default(),
            "status" => self.status.to_string(),
            "goal" => format_currency(self.goal_amount, &self.currency),
            "raised" => format_currency(self.raised_amount, &self.currency),
            "progress" => format!("{:.0}%", progress_percent(self.raised_amount, self.goal_amount)),
            "endDate" => self.end_date.as_deref().map(format_date).unwrap_or_default(),
            "createdAt" => format_date(&self.created_at),
            "description" => self.description.clone(),
            _ => String::new(),
        }
    }

    fn sort_value(&self, key: &str) -> String {
        match key {
            "goal" => self.goal_amount.to_string(),
            "raised" => self.raised_amount.to_string(),
            "progress" => progress_percent(self.raised_amount, self.goal_amount).to_string(),
            "endDate" => self.end_date.clone().unwrap_or_default(),
            "createdAt" => self.created_at.clone(),
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
    use crate::table::{sort_rows, SortState};

    #[test]
    fn test_deserialize_backend_campaign() {
        let json = r#"{
            "_id": 12,
            "title": "Clean water",
            "organizer": "Ada",
            "status": "active",
            "goalAmount": "5000",
            "raisedAmount": 1250,
            "createdAt": "2026-03-01T10:00:00Z"
        }"#;
        let campaign: Campaign = serde_json::from_str(json).unwrap();
        assert_eq!(campaign.id, "12");
        assert_eq!(campaign.status, CampaignStatus::Active);
        assert_eq!(campaign.currency, "USD");
        assert_eq!(campaign.cell("goal"), "$5,000.00");
        assert_eq!(campaign.cell("progress"), "25%");
        assert_eq!(campaign.sort_value("raised"), "1250");
    }

    #[test]
    fn test_end_date_sorts_chronologically() {
        let mut campaigns: Vec<Campaign> = ["2026-01-15", "2026-02-01", "2025-12-31"]
            .iter()
            .map(|date| Campaign {
                end_date: Some(date.to_string()),
                ..Campaign::default()
            })
            .collect();
        sort_rows(&mut campaigns, &SortState::ascending("endDate"));
        let dates: Vec<_> = campaigns.iter().filter_map(|c| c.end_date.as_deref()).collect();
        assert_eq!(dates, vec!["2025-12-31", "2026-01-15", "2026-02-01"]);
    }

    #[test]
    fn test_unknown_status_is_tolerated() {
        let campaign: Campaign = serde_json::from_str(r#"{"id": "a", "status": "archived"}"#).unwrap();
        assert_eq!(campaign.status, CampaignStatus::Unknown);
    }
}
