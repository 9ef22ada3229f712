//! Builder draft persistence over a key/value store.
//!
//! Drafts live under `campaignBuilder-<templateId>` as the JSON-serialised
//! `PageConfig`. The browser supplies a localStorage-backed store; tests use
//! `MemoryStore`.

use crate::model::page_config::{PageConfig, Template};
use log::warn;
use std::cell::RefCell;
use std::collections::HashMap;
use thiserror::Error;

pub const DRAFT_KEY_PREFIX: &str = "campaignBuilder-";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("Storage is not available")]
    Unavailable,

    #[error("Could not write '{key}': {reason}")]
    Write { key: String, reason: String },

    #[error("Could not serialise draft: {0}")]
    Serialize(String),
}

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str);
}

/// In-process store, optionally capped to emulate a storage quota.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
    quota: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(bytes: usize) -> Self {
        Self {
            entries: RefCell::default(),
            quota: Some(bytes),
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if let Some(quota) = self.quota {
            if value.len() > quota {
                return Err(StorageError::Write {
                    key: key.to_string(),
                    reason: "quota exceeded".to_string(),
                });
            }
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

pub fn draft_key(template_id: &str) -> String {
    format!("{DRAFT_KEY_PREFIX}{template_id}")
}

pub struct DraftStore<S> {
    store: S,
}

impl<S: KeyValueStore> DraftStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Stored draft for `template`, or a fresh copy of its default config when
    /// nothing usable is stored.
    pub fn load(&self, template: &Template) -> PageConfig {
        let key = draft_key(&template.id);
        let Some(raw) = self.store.get(&key) else {
            return PageConfig::from_template(template);
        };

        match serde_json::from_str::<PageConfig>(&raw) {
            Ok(config) if config.template_id == template.id => config,
            Ok(config) => {
                warn!(
                    "Draft {key} belongs to template '{}'; using defaults",
                    config.template_id
                );
                PageConfig::from_template(template)
            }
            Err(err) => {
                warn!("Discarding malformed draft {key}: {err}");
                PageConfig::from_template(template)
            }
        }
    }

    pub fn has_draft(&self, template_id: &str) -> bool {
        self.store.get(&draft_key(template_id)).is_some()
    }

    pub fn save(&self, config: &PageConfig) -> Result<(), StorageError> {
        let json =
            serde_json::to_string(config).map_err(|e| StorageError::Serialize(e.to_string()))?;
        self.store.set(&draft_key(&config.template_id), &json)
    }

    pub fn discard(&self, template_id: &str) {
        self.store.remove(&draft_key(template_id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::template_catalog::find_template;

    #[test]
    fn test_missing_draft_uses_template_default() {
        let drafts = DraftStore::new(MemoryStore::new());
        let template = find_template("classic").unwrap();
        assert_eq!(drafts.load(&template), template.config);
        assert!(!drafts.has_draft("classic"));
    }

    #[test]
    fn test_save_then_load_returns_edit() {
        let drafts = DraftStore::new(MemoryStore::new());
        let template = find_template("classic").unwrap();
        let edited = drafts
            .load(&template)
            .set_section_visibility("story", false);
        drafts.save(&edited).unwrap();

        assert!(drafts.has_draft("classic"));
        assert!(!drafts.load(&template).section("story").unwrap().visible);
    }

    #[test]
    fn test_draft_key_format() {
        assert_eq!(draft_key("minimal"), "campaignBuilder-minimal");
    }

    #[test]
    fn test_malformed_draft_falls_back() {
        let store = MemoryStore::new();
        store.set("campaignBuilder-classic", "{not json").unwrap();
        let drafts = DraftStore::new(store);
        let template = find_template("classic").unwrap();
        assert_eq!(drafts.load(&template), template.config);
    }

    #[test]
    fn test_foreign_template_draft_falls_back() {
        let store = MemoryStore::new();
        let other = find_template("minimal").unwrap().config;
        store
            .set("campaignBuilder-classic", &serde_json::to_string(&other).unwrap())
            .unwrap();
        let drafts = DraftStore::new(store);
        let template = find_template("classic").unwrap();
        assert_eq!(drafts.load(&template).template_id, "classic");
    }

    #[test]
    fn test_discard_removes_draft() {
        let drafts = DraftStore::new(MemoryStore::new());
        let config = find_template("minimal").unwrap().config;
        drafts.save(&config).unwrap();
        drafts.discard("minimal");
        assert!(!drafts.has_draft("minimal"));
    }

    #[test]
    fn test_quota_failure_is_reported() {
        let drafts = DraftStore::new(MemoryStore::with_quota(10));
        let config = find_template("classic").unwrap().config;
        assert!(matches!(drafts.save(&config), Err(StorageError::Write { .. })));
    }
}
