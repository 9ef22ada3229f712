use yew::{html, Callback, Html, MouseEvent};

/// Persistent page-level error with a manual retry.
pub fn error_banner(message: &str, on_retry: Callback<MouseEvent>) -> Html {
    html! {
        <div class="error-banner" role="alert">
            <i class="material-icons">{"error_outline"}</i>
            <span>{ message.to_string() }</span>
            <button class="btn" onclick={on_retry}>{"Retry"}</button>
        </div>
    }
}

pub fn empty_state(message: &str) -> Html {
    html! {
        <div class="empty-state">
            <i class="material-icons">{"inbox"}</i>
            <p>{ message.to_string() }</p>
        </div>
    }
}

pub fn loading_indicator() -> Html {
    html! {
        <div class="loading">
            <div class="spin"></div>
            <span>{"Loading..."}</span>
        </div>
    }
}
