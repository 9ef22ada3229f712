//! Invite supporters to a campaign by email or through a social channel.

use common::error::ApiError;
use common::forms::{submit, InvitationForm};
use common::model::campaign::Campaign;
use common::model::outreach::InvitationChannel;
use common::validation::{FormErrors, MAX_DESCRIPTION_LEN};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::{campaigns, outreach};
use crate::components::form_field::{select_field, textarea_field};
use crate::components::toast;

pub enum Msg {
    CampaignsLoaded(Result<Vec<Campaign>, ApiError>),
    Campaign(String),
    Channel(String),
    Recipients(String),
    Message(String),
    Submit,
    Sent(Result<usize, ApiError>),
}

pub struct InvitationsScreen {
    campaigns: Vec<(String, String)>,
    form: InvitationForm,
    errors: FormErrors,
    sending: bool,
}

fn channel_options() -> Vec<(String, String)> {
    InvitationChannel::ALL
        .iter()
        .map(|channel| {
            let label = match channel {
                InvitationChannel::Email => "Email",
                InvitationChannel::Facebook => "Facebook",
                InvitationChannel::Twitter => "Twitter / X",
                InvitationChannel::Whatsapp => "WhatsApp",
                InvitationChannel::Linkedin => "LinkedIn",
            };
            (channel.as_str().to_string(), label.to_string())
        })
        .collect()
}

impl Component for InvitationsScreen {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        spawn_local(async move {
            link.send_message(Msg::CampaignsLoaded(campaigns::options().await));
        });
        Self {
            campaigns: Vec::new(),
            form: InvitationForm::default(),
            errors: FormErrors::new(),
            sending: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::CampaignsLoaded(Ok(list)) => {
                self.campaigns = list.into_iter().map(|c| (c.id, c.title)).collect();
            }
            Msg::CampaignsLoaded(Err(err)) => toast::error(&err.to_string()),
            Msg::Campaign(id) => self.form.campaign_id = id,
            Msg::Channel(value) => match InvitationChannel::parse(&value) {
                Some(channel) => self.form.channel = channel,
                None => log::warn!("Ignoring unknown invitation channel {value:?}"),
            },
            Msg::Recipients(recipients) => self.form.recipients = recipients,
            Msg::Message(message) => self.form.message = message,
            Msg::Submit => {
                let link = ctx.link().clone();
                match submit(&self.form, |request| {
                    let count = request.recipients.len();
                    spawn_local(async move {
                        let result = outreach::send_invitation(request).await.map(|_| count);
                        link.send_message(Msg::Sent(result));
                    })
                }) {
                    Ok(()) => {
                        self.errors = FormErrors::new();
                        self.sending = true;
                    }
                    Err(errors) => self.errors = errors,
                }
            }
            Msg::Sent(Ok(count)) => {
                self.sending = false;
                let message = match self.form.channel {
                    InvitationChannel::Email => format!("Sent {count} invitation(s)"),
                    channel => format!("Shared on {}", channel.as_str()),
                };
                toast::success(&message);
                self.form = InvitationForm {
                    campaign_id: self.form.campaign_id.clone(),
                    channel: self.form.channel,
                    ..InvitationForm::default()
                };
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
        let by_email = self.form.channel == InvitationChannel::Email;

        html! {
            <div class="page">
                <form class="console-form" {onsubmit}>
                    <h3>{"Invite supporters"}</h3>
                    { select_field("Campaign", &self.form.campaign_id, &self.campaigns, "Choose a campaign",
                        self.errors.get("campaign_id"), link.callback(Msg::Campaign)) }
                    { select_field("Channel", self.form.channel.as_str(), &channel_options(), "Choose a channel",
                        None, link.callback(Msg::Channel)) }
                    if by_email {
                        { textarea_field("Recipients", &self.form.recipients, self.errors.get("recipients"), None,
                            link.callback(Msg::Recipients)) }
                        <p class="form-hint">{"Separate addresses with commas or new lines."}</p>
                    }
                    { textarea_field("Message", &self.form.message, self.errors.get("message"),
                        Some(MAX_DESCRIPTION_LEN), link.callback(Msg::Message)) }
                    <div class="form-actions">
                        <button type="submit" class="btn btn-primary" disabled={self.sending}>
                            { if by_email { "Send invitations" } else { "Share" } }
                        </button>
                    </div>
                </form>
            </div>
        }
    }
}
