//! Campaign page builder: pick a template, customise its theme and sections,
//! and watch the donation page change in the live preview.
//!
//! Responsibilities
//! - Provide the `Component` implementation that delegates to `update::update`
//!   and `view::view`.
//! - Keep one draft per template in local storage so a reload resumes editing.

use yew::prelude::*;

mod helpers;
mod messages;
mod preview;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::CampaignBuilder;

impl Component for CampaignBuilder {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        CampaignBuilder::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
