//! Labelled form controls with an inline field error.
//!
//! Each helper takes a `Callback<String>` that receives the control's value on
//! every input, so forms keep raw strings and validate on submit.

use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::{classes, html, Callback, Event, Html, InputEvent, TargetCast};

fn field_error(error: Option<&str>) -> Html {
    match error {
        Some(message) => html! { <span class="field-error">{ message.to_string() }</span> },
        None => html! {},
    }
}

pub fn text_field(
    label: &str,
    input_type: &'static str,
    value: &str,
    error: Option<&str>,
    on_input: Callback<String>,
) -> Html {
    let oninput = Callback::from(move |e: InputEvent| {
        on_input.emit(e.target_unchecked_into::<HtmlInputElement>().value())
    });
    html! {
        <label class={classes!("form-field", error.map(|_| "invalid"))}>
            <span class="form-label">{ label.to_string() }</span>
            <input type={input_type} value={value.to_string()} {oninput} />
            { field_error(error) }
        </label>
    }
}

pub fn textarea_field(
    label: &str,
    value: &str,
    error: Option<&str>,
    max_chars: Option<usize>,
    on_input: Callback<String>,
) -> Html {
    let oninput = Callback::from(move |e: InputEvent| {
        on_input.emit(e.target_unchecked_into::<HtmlTextAreaElement>().value())
    });
    let counter = max_chars.map(|max| format!("{}/{}", value.chars().count(), max));
    html! {
        <label class={classes!("form-field", error.map(|_| "invalid"))}>
            <span class="form-label">{ label.to_string() }</span>
            <textarea value={value.to_string()} rows={5} {oninput} />
            {
                match counter {
                    Some(text) => html! { <span class="char-counter">{ text }</span> },
                    None => html! {},
                }
            }
            { field_error(error) }
        </label>
    }
}

/// Dropdown of `(value, label)` pairs with a leading placeholder option.
pub fn select_field(
    label: &str,
    value: &str,
    options: &[(String, String)],
    placeholder: &str,
    error: Option<&str>,
    on_change: Callback<String>,
) -> Html {
    let onchange = Callback::from(move |e: Event| {
        on_change.emit(e.target_unchecked_into::<HtmlSelectElement>().value())
    });
    html! {
        <label class={classes!("form-field", error.map(|_| "invalid"))}>
            <span class="form-label">{ label.to_string() }</span>
            <select {onchange}>
                <option value="" selected={value.is_empty()}>{ placeholder.to_string() }</option>
                {
                    for options.iter().map(|(option_value, option_label)| html! {
                        <option value={option_value.clone()} selected={option_value == value}>
                            { option_label.clone() }
                        </option>
                    })
                }
            </select>
            { field_error(error) }
        </label>
    }
}
