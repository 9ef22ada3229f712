//! Outreach audience and delivery records: segments (contact lists), their
//! contacts, email batches sent to a segment and one-off invitations.

use crate::format::{format_currency, format_date};
use crate::model::{lenient_amount, lenient_string};
use crate::table::TableRow;
use serde::{Deserialize, Serialize};

/// A named contact list owned by an organizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Segment {
    #[serde(alias = "_id", deserialize_with = "lenient_string")]
    pub id: String,
    pub name: String,
    pub description: String,
    pub contact_count: u64,
    pub created_at: String,
}

impl TableRow for Segment {
    fn cell(&self, key: &str) -> String {
        match key {
            "name" => self.name.clone(),
            "description" => self.description.clone(),
            "contacts" => self.contact_count.to_string(),
            "createdAt" => format_date(&self.created_at),
            _ => String::new(),
        }
    }

    fn sort_value(&self, key: &str) -> String {
        match key {
            "createdAt" => self.created_at.clone(),
            _ => self.cell(key),
        }
    }

    fn row_id(&self) -> String {
        self.id.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Contact {
    #[serde(alias = "_id", deserialize_with = "lenient_string")]
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub segment_id: String,
    pub subscribed: Option<bool>,
    pub created_at: String,
}

impl TableRow for Contact {
    fn cell(&self, key: &str) -> String {
        match key {
            "email" => self.email.clone(),
            "name" => self.name.clone().unwrap_or_default(),
            "subscribed" => match self.subscribed {
                Some(false) => "unsubscribed".to_string(),
                _ => "subscribed".to_string(),
            },
            "createdAt" => format_date(&self.created_at),
            _ => String::new(),
        }
    }

    fn sort_value(&self, key: &str) -> String {
        match key {
            "createdAt" => self.created_at.clone(),
            _ => self.cell(key),
        }
    }

    fn row_id(&self) -> String {
        self.id.clone()
    }
}

/// Delivery counters for an outreach batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct OutreachStats {
    pub sent: u64,
    pub opened: u64,
    pub clicked: u64,
    pub donations: u64,
    #[serde(deserialize_with = "lenient_amount")]
    pub raised: f64,
}

impl OutreachStats {
    pub fn open_rate(&self) -> f64 {
        rate(self.opened, self.sent)
    }

    pub fn click_rate(&self) -> f64 {
        rate(self.clicked, self.sent)
    }
}

fn rate(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

/// A batch of personalised emails sent to one segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct OutreachCampaign {
    #[serde(alias = "_id", deserialize_with = "lenient_string")]
    pub id: String,
    pub subject: String,
    #[serde(deserialize_with = "lenient_string")]
    pub segment_id: String,
    pub segment_name: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub campaign_id: String,
    pub status: String,
    pub stats: OutreachStats,
    pub sent_at: Option<String>,
}

impl TableRow for OutreachCampaign {
    fn cell(&self, key: &str) -> String {
        match key {
            "subject" => self.subject.clone(),
            "segment" => self.segment_name.clone().unwrap_or_else(|| self.segment_id.clone()),
            "status" => self.status.clone(),
            "sent" => self.stats.sent.to_string(),
            "opened" => format!("{} ({:.0}%)", self.stats.opened, self.stats.open_rate()),
            "clicked" => format!("{} ({:.0}%)", self.stats.clicked, self.stats.click_rate()),
            "donations" => self.stats.donations.to_string(),
            "raised" => format_currency(self.stats.raised, "USD"),
            "sentAt" => self.sent_at.as_deref().map(format_date).unwrap_or_default(),
            _ => String::new(),
        }
    }

    fn sort_value(&self, key: &str) -> String {
        match key {
            "opened" => self.stats.opened.to_string(),
            "clicked" => self.stats.clicked.to_string(),
            "raised" => self.stats.raised.to_string(),
            "sentAt" => self.sent_at.clone().unwrap_or_default(),
            _ => self.cell(key),
        }
    }

    fn row_id(&self) -> String {
        self.id.clone()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum InvitationChannel {
    #[default]
    Email,
    Facebook,
    Twitter,
    Whatsapp,
    Linkedin,
}

impl InvitationChannel {
    pub const ALL: [InvitationChannel; 5] = [
        InvitationChannel::Email,
        InvitationChannel::Facebook,
        InvitationChannel::Twitter,
        InvitationChannel::Whatsapp,
        InvitationChannel::Linkedin,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InvitationChannel::Email => "email",
            InvitationChannel::Facebook => "facebook",
            InvitationChannel::Twitter => "twitter",
            InvitationChannel::Whatsapp => "whatsapp",
            InvitationChannel::Linkedin => "linkedin",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|channel| channel.as_str() == value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{sort_rows, SortState};

    #[test]
    fn test_outreach_rates() {
        let json = r#"{"id": 3, "subject": "Spring appeal", "stats": {"sent": 200, "opened": 50, "clicked": 10, "raised": "99.5"}}"#;
        let batch: OutreachCampaign = serde_json::from_str(json).unwrap();
        assert_eq!(batch.cell("opened"), "50 (25%)");
        assert_eq!(batch.cell("clicked"), "10 (5%)");
        assert_eq!(batch.cell("raised"), "$99.50");
        assert_eq!(OutreachStats::default().open_rate(), 0.0);
    }

    #[test]
    fn test_contacts_sort_by_added_date() {
        let mut contacts: Vec<Contact> = ["2026-03-02T09:00:00Z", "2026-10-01T09:00:00Z", "2025-12-24T09:00:00Z"]
            .iter()
            .map(|added| Contact {
                created_at: added.to_string(),
                ..Contact::default()
            })
            .collect();
        sort_rows(&mut contacts, &SortState::ascending("createdAt"));
        let added: Vec<_> = contacts.iter().map(|c| &c.created_at[..10]).collect();
        assert_eq!(added, vec!["2025-12-24", "2026-03-02", "2026-10-01"]);
    }

    #[test]
    fn test_channel_parse() {
        assert_eq!(InvitationChannel::parse("whatsapp"), Some(InvitationChannel::Whatsapp));
        assert_eq!(InvitationChannel::parse("fax"), None);
    }
}
