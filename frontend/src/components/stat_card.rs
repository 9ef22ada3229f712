use yew::{html, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub label: String,
    pub value: String,
    #[prop_or_default]
    pub icon: Option<String>,
    #[prop_or_default]
    pub hint: Option<String>,
}

pub struct StatCard;

impl Component for StatCard {
    type Message = ();
    type Properties = StatCardProps;

    fn create(_ctx: &Context<Self>) -> Self {
        StatCard
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        html! {
            <div class="stat-card">
                {
                    match &props.icon {
                        Some(icon) => html! { <i class="material-icons">{ icon.clone() }</i> },
                        None => html! {},
                    }
                }
                <div class="stat-card-body">
                    <span class="stat-card-label">{ &props.label }</span>
                    <span class="stat-card-value">{ &props.value }</span>
                    {
                        match &props.hint {
                            Some(hint) => html! { <span class="stat-card-hint">{ hint.clone() }</span> },
                            None => html! {},
                        }
                    }
                </div>
            </div>
        }
    }
}
