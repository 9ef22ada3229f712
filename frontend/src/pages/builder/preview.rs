//! Live preview of the donation page.
//!
//! Only visible sections are rendered, in config order, with the theme roles
//! applied as inline styles. Unknown section keys fall back to a generic
//! title/body block.

use common::markdown::render_markdown;
use common::model::page_config::{ContentValue, PageConfig, Section};
use yew::prelude::*;

pub fn preview(config: &PageConfig) -> Html {
    let style = format!(
        "background:{};color:{};",
        config.theme_color("background", "#ffffff"),
        config.theme_color("text", "#212121")
    );
    html! {
        <div class="page-preview" {style}>
            { for config.sections.iter().filter(|s| s.visible).map(|s| section(config, s)) }
        </div>
    }
}

fn section(config: &PageConfig, section: &Section) -> Html {
    let primary = config.theme_color("primary", "#1976d2");
    let accent = config.theme_color("accent", primary);

    match section.key.as_str() {
        "hero" => {
            let image = section.content_text("imageUrl");
            let style = if image.is_empty() {
                format!("background:{primary};")
            } else {
                format!("background-image:url('{image}');background-size:cover;")
            };
            html! {
                <header class="preview-hero" {style}>
                    <h1>{ section.content_text("title") }</h1>
                    <p>{ section.content_text("subtitle") }</p>
                </header>
            }
        }
        "story" => {
            let body = Html::from_html_unchecked(AttrValue::from(render_markdown(section.content_text("body"))));
            html! {
                <article class="preview-story">
                    <h2>{ section.content_text("heading") }</h2>
                    <div class="markdown-preview">{ body }</div>
                </article>
            }
        }
        "progress" => html! {
            <div class="preview-progress">
                <span>{ section.content_text("label") }</span>
                <div class="progress-track">
                    <div class="progress-fill" style={format!("width:60%;background:{accent};")}></div>
                </div>
            </div>
        },
        "donate" => {
            let (label, url) = match section.content.get("cta") {
                Some(ContentValue::Object(cta)) => (
                    cta.get("label").and_then(ContentValue::as_text).unwrap_or("Donate"),
                    cta.get("url").and_then(ContentValue::as_text).unwrap_or("#"),
                ),
                _ => ("Donate", "#"),
            };
            html! {
                <div class="preview-donate">
                    <h2>{ section.content_text("title") }</h2>
                    <a class="btn" href={url.to_string()} style={format!("background:{primary};color:#fff;")}>
                        { label }
                    </a>
                </div>
            }
        }
        "footer" => html! {
            <footer class="preview-footer" style={format!("border-top:2px solid {};", config.theme_color("secondary", primary))}>
                { section.content_text("text") }
            </footer>
        },
        _ => {
            let heading = match section.content_text("heading") {
                "" => section.content_text("title"),
                heading => heading,
            };
            html! {
                <section class="preview-section">
                    <h2>{ heading }</h2>
                    <p>{ section.content_text("body") }</p>
                </section>
            }
        }
    }
}
