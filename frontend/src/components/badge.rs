use yew::{classes, html, Html};

/// Coloured pill for status-like values.
pub fn status_badge(status: &str) -> Html {
    let tone = match status.to_lowercase().as_str() {
        "active" | "approved" | "paid" | "success" | "successful" | "completed" | "subscribed"
        | "sent" => "badge-success",
        "pending" | "draft" | "queued" | "sending" => "badge-warning",
        "rejected" | "suspended" | "banned" | "failed" | "unsubscribed" => "badge-danger",
        _ => "badge-neutral",
    };
    html! { <span class={classes!("badge", tone)}>{ status.to_string() }</span> }
}
