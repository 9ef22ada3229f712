//! Request payloads sent to the fundraising API.

use crate::model::campaign::CampaignStatus;
use crate::model::outreach::InvitationChannel;
use crate::model::user::UserStatus;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCampaignRequest {
    pub title: String,
    pub description: String,
    pub goal_amount: f64,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateCampaignStatusRequest {
    pub status: CampaignStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateSegmentRequest {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewContact {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddContactsRequest {
    pub contacts: Vec<NewContact>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendOutreachRequest {
    pub segment_id: String,
    pub campaign_id: String,
    pub subject: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvitationRequest {
    pub campaign_id: String,
    pub channel: InvitationChannel,
    pub recipients: Vec<String>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RejectWithdrawalRequest {
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateUserStatusRequest {
    pub status: UserStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_campaign_request_wire_names() {
        let request = CreateCampaignRequest {
            title: "Wells".to_string(),
            description: "".to_string(),
            goal_amount: 100.0,
            category: "water".to_string(),
            end_date: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["goalAmount"], 100.0);
        assert!(json.get("endDate").is_none());
    }

    #[test]
    fn test_status_request_serializes_lowercase() {
        let request = UpdateCampaignStatusRequest {
            status: CampaignStatus::Suspended,
            reason: Some("fraud report".to_string()),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"status":"suspended","reason":"fraud report"}"#);
    }
}
