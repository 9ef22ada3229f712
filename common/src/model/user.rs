use crate::format::format_date;
use crate::model::lenient_string;
use crate::table::TableRow;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    #[default]
    Organizer,
    Donor,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    #[default]
    Active,
    Suspended,
    Banned,
    #[serde(other)]
    Unknown,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Suspended => "suspended",
            UserStatus::Banned => "banned",
            UserStatus::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    #[serde(alias = "_id", deserialize_with = "lenient_string")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub status: UserStatus,
    pub campaign_count: u64,
    pub created_at: String,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

impl TableRow for User {
    fn cell(&self, key: &str) -> String {
        match key {
            "name" => self.name.clone(),
            "email" => self.email.clone(),
            "role" => format!("{:?}", self.role).to_lowercase(),
            "status" => self.status.as_str().to_string(),
            "campaigns" => self.campaign_count.to_string(),
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

/// Response of the login endpoint after envelope unwrapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Session {
    #[serde(alias = "accessToken")]
    pub token: String,
    pub user: Option<User>,
}
