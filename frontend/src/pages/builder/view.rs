//! View rendering for the campaign page builder.
//!
//! Two screens: the template picker, and the editor made of an inspector
//! sidebar next to the live preview.

use common::model::page_config::{ContentValue, Section, Template};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::preview::preview;
use super::state::CampaignBuilder;

pub fn view(component: &CampaignBuilder, ctx: &Context<CampaignBuilder>) -> Html {
    let link = ctx.link();
    match &component.active {
        None => template_picker(component, link),
        Some(template) => editor(component, template, link),
    }
}

fn template_picker(component: &CampaignBuilder, link: &Scope<CampaignBuilder>) -> Html {
    html! {
        <div class="template-picker">
            <h2>{"Choose a template"}</h2>
            <div class="template-grid">
                {
                    for component.templates.iter().map(|template| {
                        let id = template.id.clone();
                        let onclick = link.callback(move |_| Msg::PickTemplate(id.clone()));
                        html! {
                            <button class="template-card" {onclick}>
                                <h3>{ template.name.clone() }</h3>
                                <p>{ template.description.clone() }</p>
                                if component.has_draft(&template.id) {
                                    <span class="draft-note">{"Draft saved"}</span>
                                }
                            </button>
                        }
                    })
                }
            </div>
        </div>
    }
}

fn editor(component: &CampaignBuilder, template: &Template, link: &Scope<CampaignBuilder>) -> Html {
    html! {
        <div class="builder">
            <aside class="inspector">
                <div class="inspector-header">
                    <button class="icon-btn" title="Back to templates" onclick={link.callback(|_| Msg::GoBack)}>
                        <i class="material-icons">{"arrow_back"}</i>
                    </button>
                    <h3>{ template.name.clone() }</h3>
                    if component.is_customized() {
                        <span class="dirty-dot" title="Customized"></span>
                    }
                </div>
                { theme_inputs(component, link) }
                { for component.config.sections.iter().map(|section| section_inspector(section, link)) }
            </aside>
            <main class="preview-pane">
                { preview(&component.config) }
            </main>
        </div>
    }
}

fn theme_inputs(component: &CampaignBuilder, link: &Scope<CampaignBuilder>) -> Html {
    html! {
        <fieldset class="inspector-group">
            <legend>{"Theme"}</legend>
            {
                for component.config.theme.iter().map(|(role, color)| {
                    let role_name = role.clone();
                    let oninput = link.callback(move |e: InputEvent| Msg::SetTheme {
                        role: role_name.clone(),
                        value: e.target_unchecked_into::<HtmlInputElement>().value(),
                    });
                    html! {
                        <label class="color-field">
                            <span>{ role.clone() }</span>
                            <input type="color" value={color.clone()} {oninput} />
                        </label>
                    }
                })
            }
        </fieldset>
    }
}

fn section_inspector(section: &Section, link: &Scope<CampaignBuilder>) -> Html {
    let key = section.key.clone();
    let visible = section.visible;
    let ontoggle = link.callback(move |_: Event| Msg::SetVisibility {
        section: key.clone(),
        visible: !visible,
    });

    html! {
        <fieldset class="inspector-group">
            <legend>{ section.label.clone() }</legend>
            if section.allow_toggle {
                <label class="toggle">
                    <input type="checkbox" checked={section.visible} onchange={ontoggle} />
                    <span>{"Visible"}</span>
                </label>
            }
            if section.allow_edit {
                { for section.content.iter().map(|(field, value)| content_editor(section, field, value, link)) }
            }
        </fieldset>
    }
}

fn content_editor(
    section: &Section,
    field: &str,
    value: &ContentValue,
    link: &Scope<CampaignBuilder>,
) -> Html {
    match value {
        ContentValue::Text(_) if section.key == "hero" && field == "imageUrl" => hero_image_input(link),
        ContentValue::Text(text) if field == "body" => {
            let (section_key, field_name) = (section.key.clone(), field.to_string());
            let oninput = link.callback(move |e: InputEvent| Msg::SetField {
                section: section_key.clone(),
                field: field_name.clone(),
                value: e.target_unchecked_into::<HtmlTextAreaElement>().value(),
            });
            html! {
                <label class="form-field">
                    <span class="form-label">{ field.to_string() }</span>
                    <textarea value={text.clone()} {oninput} rows="6"></textarea>
                </label>
            }
        }
        ContentValue::Text(text) => {
            let (section_key, field_name) = (section.key.clone(), field.to_string());
            let oninput = link.callback(move |e: InputEvent| Msg::SetField {
                section: section_key.clone(),
                field: field_name.clone(),
                value: e.target_unchecked_into::<HtmlInputElement>().value(),
            });
            html! {
                <label class="form-field">
                    <span class="form-label">{ field.to_string() }</span>
                    <input type="text" value={text.clone()} {oninput} />
                </label>
            }
        }
        ContentValue::Object(entries) => html! {
            <div class="nested-field">
                <span class="form-label">{ field.to_string() }</span>
                {
                    for entries.iter().map(|(entry, nested)| {
                        let (section_key, field_name, entry_name) =
                            (section.key.clone(), field.to_string(), entry.clone());
                        let oninput = link.callback(move |e: InputEvent| Msg::SetNestedField {
                            section: section_key.clone(),
                            field: field_name.clone(),
                            entry: entry_name.clone(),
                            value: e.target_unchecked_into::<HtmlInputElement>().value(),
                        });
                        html! {
                            <label class="form-field">
                                <span class="form-label">{ entry.clone() }</span>
                                <input type="text" value={nested.as_text().unwrap_or("").to_string()} {oninput} />
                            </label>
                        }
                    })
                }
            </div>
        },
    }
}

fn hero_image_input(link: &Scope<CampaignBuilder>) -> Html {
    let onchange = link.batch_callback(|e: Event| {
        let input = e.target_unchecked_into::<HtmlInputElement>();
        input
            .files()
            .and_then(|files| files.get(0))
            .map(Msg::HeroImageSelected)
    });
    html! {
        <label class="form-field">
            <span class="form-label">{"Hero image"}</span>
            <input type="file" accept="image/*" {onchange} />
        </label>
    }
}
