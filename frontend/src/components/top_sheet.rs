use uuid::Uuid;
use yew::{classes, html, Callback, Children, Component, Context, Html, Properties};

/// Modal sheet sliding down from the top of the viewport.
///
/// Visibility is driven by the `open` prop; the `show` class carries the
/// transition. Clicking the backdrop or the close button emits `on_close`.
pub struct TopSheet {
    pub id: String,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub open: bool,
    pub title: String,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub children: Children,
}

impl Component for TopSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("id-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        if !props.open {
            return html! {};
        }
        let on_close = props.on_close.reform(|_: yew::MouseEvent| ());
        let on_backdrop = props.on_close.reform(|_: yew::MouseEvent| ());

        html! {
            <div class="top-sheet-backdrop" onclick={on_backdrop}>
                <div
                    class={classes!("top-sheet", "show")}
                    id={self.id.clone()}
                    onclick={Callback::from(|e: yew::MouseEvent| e.stop_propagation())}
                >
                    <div class="top-sheet-header">
                        <h3>{ &props.title }</h3>
                        <button class="icon-btn" title="Close" onclick={on_close}>
                            <i class="material-icons">{"close"}</i>
                        </button>
                    </div>
                    <div class="top-sheet-body">
                        { for props.children.iter() }
                    </div>
                </div>
            </div>
        }
    }
}
