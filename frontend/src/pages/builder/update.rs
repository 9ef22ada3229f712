//! Update function for the campaign page builder.
//!
//! Every edit goes through `update_config`, producing a fresh `Rc`, and is
//! written straight to the draft store. There is no undo history and no
//! debouncing of writes.

use std::collections::BTreeMap;
use std::rc::Rc;

use common::model::page_config::{update_config, ContentValue, PageConfig};
use gloo_file::{futures::read_as_bytes, Blob};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::components::confirm::confirm;
use crate::components::toast;

use super::helpers::{config_hash, data_url};
use super::messages::Msg;
use super::state::CampaignBuilder;

const HERO_SECTION: &str = "hero";
const HERO_IMAGE_FIELD: &str = "imageUrl";

pub fn update(component: &mut CampaignBuilder, ctx: &Context<CampaignBuilder>, msg: Msg) -> bool {
    match msg {
        Msg::PickTemplate(id) => {
            let Some(template) = component.templates.iter().find(|t| t.id == id).cloned() else {
                log::warn!("Unknown template '{id}'");
                return false;
            };
            let config = component.drafts.load(&template);
            for key in config.duplicate_section_keys() {
                log::warn!("Template '{}' repeats section key '{key}'; editing the first one", template.id);
            }
            component.baseline = config_hash(&PageConfig::from_template(&template));
            component.config = Rc::new(config);
            component.active = Some(template);
            true
        }
        Msg::SetTheme { role, value } => {
            apply(component, |config| config.set_theme_property(&role, &value));
            true
        }
        Msg::SetVisibility { section, visible } => {
            apply(component, |config| config.set_section_visibility(&section, visible));
            true
        }
        Msg::SetField { section, field, value } => {
            apply(component, |config| {
                config.set_section_content_field(&section, &field, ContentValue::Text(value))
            });
            true
        }
        Msg::SetNestedField { section, field, entry, value } => {
            let mut object = match component
                .config
                .section(&section)
                .and_then(|s| s.content.get(&field))
            {
                Some(ContentValue::Object(map)) => map.clone(),
                _ => BTreeMap::new(),
            };
            object.insert(entry, ContentValue::Text(value));
            apply(component, |config| {
                config.set_section_content_field(&section, &field, ContentValue::Object(object))
            });
            true
        }
        Msg::HeroImageSelected(file) => {
            let mime = file.type_();
            let link = ctx.link().clone();
            spawn_local(async move {
                let blob = Blob::from(file);
                match read_as_bytes(&blob).await {
                    Ok(bytes) => link.send_message(Msg::HeroImageLoaded(data_url(&mime, &bytes))),
                    Err(err) => toast::error(&format!("Could not read image: {err}")),
                }
            });
            false
        }
        Msg::HeroImageLoaded(url) => {
            apply(component, |config| {
                config.set_section_content_field(HERO_SECTION, HERO_IMAGE_FIELD, ContentValue::Text(url))
            });
            true
        }
        Msg::GoBack => {
            let Some(template) = &component.active else {
                return false;
            };
            if !confirm("Leave the builder? Your customizations for this template will be discarded.") {
                return false;
            }
            component.drafts.discard(&template.id);
            component.active = None;
            true
        }
    }
}

/// Replaces the working config and persists it. A failed write keeps the
/// in-memory edit.
fn apply<F>(component: &mut CampaignBuilder, edit: F)
where
    F: FnOnce(&PageConfig) -> PageConfig,
{
    component.config = update_config(&component.config, edit);
    if let Err(err) = component.drafts.save(&component.config) {
        log::error!("Could not save draft: {err}");
    }
}
