//! Email outreach: compose a message for a segment and review sent batches.

use common::error::ApiError;
use common::forms::{submit, OutreachForm};
use common::model::campaign::Campaign;
use common::model::outreach::{OutreachCampaign, Segment};
use common::validation::FormErrors;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::{campaigns, outreach};
use crate::components::form_field::{select_field, text_field, textarea_field};
use crate::components::toast;

use super::resources::OutreachCampaignsPage;

pub enum Field {
    Segment,
    Campaign,
    Subject,
    Body,
}

pub enum Msg {
    OptionsLoaded(Result<(Vec<Segment>, Vec<Campaign>), ApiError>),
    Input(Field, String),
    Submit,
    Sent(Result<OutreachCampaign, ApiError>),
}

pub struct OutreachScreen {
    segments: Vec<(String, String)>,
    campaigns: Vec<(String, String)>,
    form: OutreachForm,
    errors: FormErrors,
    sending: bool,
    reload: u32,
}

impl Component for OutreachScreen {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        spawn_local(async move {
            let options = async {
                let segments = outreach::segment_options().await?;
                let campaigns = campaigns::options().await?;
                Ok::<_, ApiError>((segments, campaigns))
            };
            link.send_message(Msg::OptionsLoaded(options.await));
        });
        Self {
            segments: Vec::new(),
            campaigns: Vec::new(),
            form: OutreachForm::default(),
            errors: FormErrors::new(),
            sending: false,
            reload: 0,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::OptionsLoaded(Ok((segments, campaigns))) => {
                self.segments = segments.into_iter().map(|s| (s.id, s.name)).collect();
                self.campaigns = campaigns.into_iter().map(|c| (c.id, c.title)).collect();
            }
            Msg::OptionsLoaded(Err(err)) => toast::error(&err.to_string()),
            Msg::Input(field, value) => match field {
                Field::Segment => self.form.segment_id = value,
                Field::Campaign => self.form.campaign_id = value,
                Field::Subject => self.form.subject = value,
                Field::Body => self.form.body = value,
            },
            Msg::Submit => {
                let link = ctx.link().clone();
                match submit(&self.form, |request| {
                    spawn_local(async move {
                        link.send_message(Msg::Sent(outreach::send_campaign(request).await));
                    })
                }) {
                    Ok(()) => {
                        self.errors = FormErrors::new();
                        self.sending = true;
                    }
                    Err(errors) => self.errors = errors,
                }
            }
            Msg::Sent(Ok(sent)) => {
                self.sending = false;
                self.form = OutreachForm::default();
                self.reload += 1;
                toast::success(&format!("\"{}\" is on its way", sent.subject));
            }
            Msg::Sent(Err(err)) => {
                self.sending = false;
                toast::error(&err.to_string());
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });

        html! {
            <div class="page">
                <form class="console-form" {onsubmit}>
                    <h3>{"Send an email"}</h3>
                    { select_field("Segment", &self.form.segment_id, &self.segments, "Choose a segment",
                        self.errors.get("segment_id"), link.callback(|v| Msg::Input(Field::Segment, v))) }
                    { select_field("Campaign", &self.form.campaign_id, &self.campaigns, "Choose a campaign",
                        self.errors.get("campaign_id"), link.callback(|v| Msg::Input(Field::Campaign, v))) }
                    { text_field("Subject", "text", &self.form.subject, self.errors.get("subject"),
                        link.callback(|v| Msg::Input(Field::Subject, v))) }
                    { textarea_field("Message", &self.form.body, self.errors.get("body"), None,
                        link.callback(|v| Msg::Input(Field::Body, v))) }
                    <div class="form-actions">
                        <button type="submit" class="btn btn-primary" disabled={self.sending}>
                            { if self.sending { "Sending..." } else { "Send" } }
                        </button>
                    </div>
                </form>
                <OutreachCampaignsPage reload={self.reload} />
            </div>
        }
    }
}
