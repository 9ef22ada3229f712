//! Builder state: the chosen template, the working config and its baseline.

use std::rc::Rc;

use common::model::page_config::{PageConfig, Template};
use common::model::template_catalog::catalog;
use common::storage::DraftStore;

use crate::storage::LocalStore;

use super::helpers::config_hash;

pub struct CampaignBuilder {
    pub templates: Vec<Template>,
    /// `None` while the template picker is shown.
    pub active: Option<Template>,
    /// Replaced, never mutated in place; see `update_config`.
    pub config: Rc<PageConfig>,
    /// Hash of the active template's default config.
    pub baseline: String,
    pub drafts: DraftStore<LocalStore>,
}

impl CampaignBuilder {
    pub fn new() -> Self {
        let templates = catalog();
        let placeholder = templates
            .first()
            .map(PageConfig::from_template)
            .unwrap_or_else(|| PageConfig {
                template_id: String::new(),
                theme: Default::default(),
                sections: Vec::new(),
            });
        Self {
            templates,
            active: None,
            config: Rc::new(placeholder),
            baseline: String::new(),
            drafts: DraftStore::new(LocalStore),
        }
    }

    /// True when the working config differs from the template default.
    pub fn is_customized(&self) -> bool {
        self.active.is_some() && config_hash(&self.config) != self.baseline
    }

    pub fn has_draft(&self, template_id: &str) -> bool {
        self.drafts.has_draft(template_id)
    }
}
