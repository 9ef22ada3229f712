//! Audience segments: creation form above the segment list.

use common::error::ApiError;
use common::forms::{submit, SegmentForm};
use common::model::outreach::Segment;
use common::validation::{FormErrors, MAX_DESCRIPTION_LEN};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::outreach;
use crate::components::form_field::{text_field, textarea_field};
use crate::components::toast;

use super::resources::{ids, SegmentsPage};

#[derive(Properties, PartialEq)]
pub struct SegmentsProps {
    pub on_open_contacts: Callback<String>,
}

pub enum Msg {
    Name(String),
    Description(String),
    Submit,
    Created(Result<Segment, ApiError>),
    Navigate(&'static str, String),
}

pub struct SegmentsScreen {
    form: SegmentForm,
    errors: FormErrors,
    saving: bool,
    reload: u32,
}

impl Component for SegmentsScreen {
    type Message = Msg;
    type Properties = SegmentsProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            form: SegmentForm::default(),
            errors: FormErrors::new(),
            saving: false,
            reload: 0,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Name(name) => self.form.name = name,
            Msg::Description(description) => self.form.description = description,
            Msg::Submit => {
                let link = ctx.link().clone();
                match submit(&self.form, |request| {
                    spawn_local(async move {
                        link.send_message(Msg::Created(outreach::create_segment(request).await));
                    })
                }) {
                    Ok(()) => {
                        self.errors = FormErrors::new();
                        self.saving = true;
                    }
                    Err(errors) => self.errors = errors,
                }
            }
            Msg::Created(Ok(segment)) => {
                self.saving = false;
                self.form = SegmentForm::default();
                self.reload += 1;
                toast::success(&format!("Created segment \"{}\"", segment.name));
            }
            Msg::Created(Err(err)) => {
                self.saving = false;
                toast::error(&err.to_string());
            }
            Msg::Navigate(action, id) => {
                if action == ids::CONTACTS {
                    ctx.props().on_open_contacts.emit(id);
                }
                return false;
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
                <form class="console-form inline-form" {onsubmit}>
                    <h3>{"New segment"}</h3>
                    { text_field("Name", "text", &self.form.name, self.errors.get("name"), link.callback(Msg::Name)) }
                    { textarea_field("Description", &self.form.description, self.errors.get("description"),
                        Some(MAX_DESCRIPTION_LEN), link.callback(Msg::Description)) }
                    <div class="form-actions">
                        <button type="submit" class="btn btn-primary" disabled={self.saving}>{"Create segment"}</button>
                    </div>
                </form>
                <SegmentsPage
                    reload={self.reload}
                    on_navigate={link.callback(|(action, id): (&'static str, String)| Msg::Navigate(action, id))}
                />
            </div>
        }
    }
}
