//! Campaign page configuration edited by the builder.
//!
//! A `PageConfig` is cloned out of a catalog `Template`, held behind an `Rc`
//! in the builder, and replaced wholesale on every edit. Sections are looked
//! up by `key`; when keys collide the first matching section wins.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::rc::Rc;

/// Flat map of colour role (e.g. `primary`, `background`) to a CSS colour.
pub type Theme = BTreeMap<String, String>;

/// A static catalog entry. Never mutated; builders clone `config`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub id: String,
    pub name: String,
    pub description: String,
    pub config: PageConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageConfig {
    pub template_id: String,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub key: String,
    pub label: String,
    #[serde(default = "default_true")]
    pub visible: bool,
    #[serde(default)]
    pub allow_toggle: bool,
    #[serde(default)]
    pub allow_edit: bool,
    #[serde(default)]
    pub content: BTreeMap<String, ContentValue>,
}

/// A section content value: either plain text or a nested object
/// (e.g. a call-to-action with its own `label` and `url`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContentValue {
    Text(String),
    Object(BTreeMap<String, ContentValue>),
}

fn default_true() -> bool {
    true
}

impl From<&str> for ContentValue {
    fn from(value: &str) -> Self {
        ContentValue::Text(value.to_string())
    }
}

impl From<String> for ContentValue {
    fn from(value: String) -> Self {
        ContentValue::Text(value)
    }
}

impl ContentValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ContentValue::Text(text) => Some(text),
            ContentValue::Object(_) => None,
        }
    }
}

impl Section {
    /// Text of a content field, empty when absent or not a string.
    pub fn content_text(&self, field: &str) -> &str {
        self.content
            .get(field)
            .and_then(ContentValue::as_text)
            .unwrap_or("")
    }
}

impl PageConfig {
    pub fn from_template(template: &Template) -> Self {
        template.config.clone()
    }

    pub fn section(&self, key: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.key == key)
    }

    fn section_mut(&mut self, key: &str) -> Option<&mut Section> {
        self.sections.iter_mut().find(|section| section.key == key)
    }

    /// Returns a copy with `content[field_name] = value` on the section
    /// identified by `section_key`. Unknown keys leave the copy unchanged.
    pub fn set_section_content_field(
        &self,
        section_key: &str,
        field_name: &str,
        value: ContentValue,
    ) -> Self {
        let mut next = self.clone();
        if let Some(section) = next.section_mut(section_key) {
            section.content.insert(field_name.to_string(), value);
        }
        next
    }

    pub fn set_section_visibility(&self, section_key: &str, visible: bool) -> Self {
        let mut next = self.clone();
        if let Some(section) = next.section_mut(section_key) {
            section.visible = visible;
        }
        next
    }

    /// No colour format validation is performed.
    pub fn set_theme_property(&self, property: &str, value: &str) -> Self {
        let mut next = self.clone();
        next.theme.insert(property.to_string(), value.to_string());
        next
    }

    pub fn theme_color<'a>(&'a self, role: &str, fallback: &'a str) -> &'a str {
        self.theme.get(role).map(String::as_str).unwrap_or(fallback)
    }

    /// Section keys that occur more than once, in first-seen order.
    pub fn duplicate_section_keys(&self) -> Vec<String> {
        let mut seen = std::collections::BTreeSet::new();
        let mut duplicates = Vec::new();
        for section in &self.sections {
            if !seen.insert(section.key.as_str()) && !duplicates.contains(&section.key) {
                duplicates.push(section.key.clone());
            }
        }
        duplicates
    }
}

/// Copy-on-write update: applies `edit` to the current config and hands back
/// a new `Rc`, so callers can decide re-renders by pointer identity.
pub fn update_config<F>(current: &Rc<PageConfig>, edit: F) -> Rc<PageConfig>
where
    F: FnOnce(&PageConfig) -> PageConfig,
{
    Rc::new(edit(current))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PageConfig {
        let section = |key: &str, visible: bool| Section {
            key: key.to_string(),
            label: key.to_uppercase(),
            visible,
            allow_toggle: true,
            allow_edit: true,
            content: BTreeMap::from([("title".to_string(), ContentValue::from(key))]),
        };
        PageConfig {
            template_id: "classic".to_string(),
            theme: BTreeMap::from([("primary".to_string(), "#123456".to_string())]),
            sections: vec![section("hero", true), section("story", true), section("footer", false)],
        }
    }

    #[test]
    fn test_toggle_visibility_only_touches_target_section() {
        let original = sample();
        let updated = original.set_section_visibility("story", false);

        assert!(!updated.section("story").unwrap().visible);
        assert_eq!(updated.section("hero"), original.section("hero"));
        assert_eq!(updated.section("footer"), original.section("footer"));
        assert!(original.section("story").unwrap().visible);
    }

    #[test]
    fn test_set_content_field() {
        let updated = sample().set_section_content_field("hero", "subtitle", "Help us".into());
        let hero = updated.section("hero").unwrap();
        assert_eq!(hero.content_text("subtitle"), "Help us");
        assert_eq!(hero.content_text("title"), "hero");
    }

    #[test]
    fn test_unknown_section_is_silent_noop() {
        let original = sample();
        assert_eq!(original.set_section_visibility("missing", false), original);
        assert_eq!(
            original.set_section_content_field("missing", "title", "x".into()),
            original
        );
    }

    #[test]
    fn test_duplicate_keys_first_match_wins() {
        let mut config = sample();
        let mut clone = config.sections[0].clone();
        clone.label = "Second hero".to_string();
        config.sections.push(clone);

        assert_eq!(config.duplicate_section_keys(), vec!["hero".to_string()]);
        let updated = config.set_section_visibility("hero", false);
        assert!(!updated.sections[0].visible);
        assert!(updated.sections[3].visible);
    }

    #[test]
    fn test_set_theme_property_accepts_any_string() {
        let updated = sample().set_theme_property("accent", "not-a-colour");
        assert_eq!(updated.theme_color("accent", "#000"), "not-a-colour");
        assert_eq!(updated.theme_color("missing", "#000"), "#000");
    }

    #[test]
    fn test_update_config_returns_new_reference() {
        let current = Rc::new(sample());
        let next = update_config(&current, |config| config.set_theme_property("primary", "#fff"));
        assert!(!Rc::ptr_eq(&current, &next));
        assert_eq!(current.theme_color("primary", ""), "#123456");
        assert_eq!(next.theme_color("primary", ""), "#fff");
    }

    #[test]
    fn test_json_uses_camel_case_and_nested_content() {
        let json = r##"{
            "templateId": "classic",
            "theme": {"primary": "#000"},
            "sections": [{
                "key": "donate",
                "label": "Donate",
                "visible": true,
                "allowToggle": false,
                "allowEdit": true,
                "content": {"title": "Give", "cta": {"label": "Donate now", "url": "/donate"}}
            }]
        }"##;
        let config: PageConfig = serde_json::from_str(json).unwrap();
        let donate = config.section("donate").unwrap();
        assert!(donate.allow_edit);
        assert!(!donate.allow_toggle);
        assert!(matches!(donate.content.get("cta"), Some(ContentValue::Object(_))));

        let back = serde_json::to_value(&config).unwrap();
        assert_eq!(back["templateId"], "classic");
        assert_eq!(back["sections"][0]["allowEdit"], true);
    }
}
