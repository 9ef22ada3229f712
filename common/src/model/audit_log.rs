use crate::format::format_date;
use crate::model::lenient_string;
use crate::table::TableRow;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One administrative action recorded by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct AuditLog {
    #[serde(alias = "_id", deserialize_with = "lenient_string")]
    pub id: String,
    pub action: String,
    #[serde(alias = "actor")]
    pub actor_email: String,
    pub resource_type: String,
    #[serde(deserialize_with = "lenient_string")]
    pub resource_id: String,
    pub ip_address: Option<String>,
    pub details: Option<Value>,
    #[serde(alias = "timestamp")]
    pub created_at: String,
}

impl TableRow for AuditLog {
    fn cell(&self, key: &str) -> String {
        match key {
            "action" => self.action.clone(),
            "actor" => self.actor_email.clone(),
            "resource" => {
                if self.resource_id.is_empty() {
                    self.resource_type.clone()
                } else {
                    format!("{}:{}", self.resource_type, self.resource_id)
                }
            }
            "ip" => self.ip_address.clone().unwrap_or_default(),
            "details" => self
                .details
                .as_ref()
                .map(Value::to_string)
                .unwrap_or_default(),
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_cell() {
        let log: AuditLog = serde_json::from_str(
            r#"{"id": 1, "action": "campaign.approve", "actor": "root@example.org", "resourceType": "campaign", "resourceId": 9, "timestamp": "2026-02-01T08:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(log.cell("resource"), "campaign:9");
        assert_eq!(log.cell("actor"), "root@example.org");
        assert_eq!(log.cell("createdAt"), "Feb 01, 2026 08:00");
    }
}
