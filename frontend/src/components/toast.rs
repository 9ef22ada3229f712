//! Toast notifications for action outcomes.
//!
//! A styled `div` is appended to `<body>` and removed after the configured
//! `toastDurationMs`. Toasts stack upwards from the bottom of the screen.

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::api::client;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    fn background(&self) -> &'static str {
        match self {
            ToastKind::Success => "rgba(46, 125, 50, 0.95)",
            ToastKind::Error => "rgba(198, 40, 40, 0.95)",
            ToastKind::Info => "rgba(0, 0, 0, 0.8)",
        }
    }
}

pub fn success(message: &str) {
    show_toast(message, ToastKind::Success);
}

pub fn error(message: &str) {
    show_toast(message, ToastKind::Error);
}

pub fn info(message: &str) {
    show_toast(message, ToastKind::Info);
}

pub fn show_toast(message: &str, kind: ToastKind) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };

    let stacked = document.get_elements_by_class_name("console-toast").length();
    toast.set_class_name("console-toast");
    toast.set_text_content(Some(message));

    let html_toast: HtmlElement = toast.unchecked_into();
    let style = html_toast.style();
    style.set_property("position", "fixed").ok();
    style
        .set_property("bottom", &format!("{}px", 20 + stacked * 52))
        .ok();
    style.set_property("left", "50%").ok();
    style.set_property("transform", "translateX(-50%)").ok();
    style.set_property("background", kind.background()).ok();
    style.set_property("color", "#fff").ok();
    style.set_property("padding", "10px 20px").ok();
    style.set_property("border-radius", "4px").ok();
    style.set_property("z-index", "10000").ok();
    style.set_property("font-family", "Arial, sans-serif").ok();

    if body.append_child(&html_toast).is_ok() {
        let duration = client::config().toast_duration_ms;
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(duration).await;
            if let Some(parent) = html_toast.parent_node() {
                parent.remove_child(&html_toast).ok();
            }
        });
    }
}
