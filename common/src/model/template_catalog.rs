//! Fixed registry of donation page templates offered by the builder.

use crate::model::page_config::{ContentValue, PageConfig, Section, Template, Theme};
use std::collections::BTreeMap;

pub fn catalog() -> Vec<Template> {
    vec![classic(), minimal(), spotlight()]
}

pub fn find_template(id: &str) -> Option<Template> {
    catalog().into_iter().find(|template| template.id == id)
}

fn theme(pairs: &[(&str, &str)]) -> Theme {
    pairs
        .iter()
        .map(|(role, color)| (role.to_string(), color.to_string()))
        .collect()
}

fn section(
    key: &str,
    label: &str,
    allow_toggle: bool,
    fields: &[(&str, &str)],
) -> Section {
    Section {
        key: key.to_string(),
        label: label.to_string(),
        visible: true,
        allow_toggle,
        allow_edit: true,
        content: fields
            .iter()
            .map(|(name, value)| (name.to_string(), ContentValue::from(*value)))
            .collect(),
    }
}

fn call_to_action(label: &str, url: &str) -> ContentValue {
    ContentValue::Object(BTreeMap::from([
        ("label".to_string(), ContentValue::from(label)),
        ("url".to_string(), ContentValue::from(url)),
    ]))
}

fn donate_section(title: &str, button: &str) -> Section {
    let mut donate = section("donate", "Donate", false, &[("title", title)]);
    donate
        .content
        .insert("cta".to_string(), call_to_action(button, "#donate"));
    donate
}

fn classic() -> Template {
    Template {
        id: "classic".to_string(),
        name: "Classic".to_string(),
        description: "Hero banner, story, progress bar and a donate call to action.".to_string(),
        config: PageConfig {
            template_id: "classic".to_string(),
            theme: theme(&[
                ("primary", "#1976d2"),
                ("secondary", "#424242"),
                ("background", "#ffffff"),
                ("text", "#212121"),
                ("accent", "#ffb300"),
            ]),
            sections: vec![
                section(
                    "hero",
                    "Hero",
                    false,
                    &[
                        ("title", "Help us reach our goal"),
                        ("subtitle", "Every contribution counts."),
                        ("imageUrl", ""),
                    ],
                ),
                section(
                    "story",
                    "Our story",
                    true,
                    &[("heading", "Why this matters"), ("body", "Tell supporters **why** you are raising funds.")],
                ),
                section("progress", "Progress", true, &[("label", "Raised so far")]),
                donate_section("Make a difference today", "Donate now"),
                section("updates", "Updates", true, &[("heading", "Latest updates")]),
                section("footer", "Footer", true, &[("text", "Thank you for your support.")]),
            ],
        },
    }
}

fn minimal() -> Template {
    Template {
        id: "minimal".to_string(),
        name: "Minimal".to_string(),
        description: "A single column with a short message and a donate button.".to_string(),
        config: PageConfig {
            template_id: "minimal".to_string(),
            theme: theme(&[
                ("primary", "#000000"),
                ("background", "#fafafa"),
                ("text", "#333333"),
            ]),
            sections: vec![
                section("hero", "Header", false, &[("title", "Support our cause"), ("subtitle", "")]),
                section("story", "Message", true, &[("heading", ""), ("body", "A few words for your donors.")]),
                donate_section("Give now", "Give"),
            ],
        },
    }
}

fn spotlight() -> Template {
    Template {
        id: "spotlight".to_string(),
        name: "Spotlight".to_string(),
        description: "Large image hero with progress front and centre.".to_string(),
        config: PageConfig {
            template_id: "spotlight".to_string(),
            theme: theme(&[
                ("primary", "#d81b60"),
                ("secondary", "#880e4f"),
                ("background", "#fff8fb"),
                ("text", "#1a1a1a"),
                ("accent", "#00897b"),
            ]),
            sections: vec![
                section(
                    "hero",
                    "Spotlight",
                    false,
                    &[("title", "Be part of the story"), ("subtitle", ""), ("imageUrl", "")],
                ),
                section("progress", "Progress", false, &[("label", "Together we have raised")]),
                section("story", "Story", true, &[("heading", "The story"), ("body", "")]),
                donate_section("Join the supporters", "Support"),
                section("footer", "Footer", true, &[("text", "")]),
            ],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ids_match_configs() {
        for template in catalog() {
            assert_eq!(template.id, template.config.template_id);
            assert!(template.config.duplicate_section_keys().is_empty());
        }
    }

    #[test]
    fn test_find_template() {
        assert_eq!(find_template("minimal").unwrap().name, "Minimal");
        assert!(find_template("unknown").is_none());
    }
}
