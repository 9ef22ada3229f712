//! Contacts of one segment: manual add, CSV import and the contact list.

use common::error::ApiError;
use common::forms::{submit, ContactForm};
use common::import::{parse_contacts_csv, ImportReport};
use common::model::outreach::Segment;
use common::requests::NewContact;
use common::validation::FormErrors;
use gloo_file::{futures::read_as_bytes, Blob};
use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::outreach;
use crate::components::form_field::{select_field, text_field};
use crate::components::toast;

use super::resources::ContactsPage;

#[derive(Properties, PartialEq)]
pub struct ContactsProps {
    #[prop_or_default]
    pub segment_id: Option<String>,
}

pub enum Msg {
    SegmentsLoaded(Result<Vec<Segment>, ApiError>),
    SelectSegment(String),
    Email(String),
    Name(String),
    Submit,
    FileSelected(web_sys::File),
    FileParsed(Result<ImportReport, String>),
    Saved(Result<usize, ApiError>),
}

pub struct ContactsScreen {
    segments: Vec<Segment>,
    segment_id: Option<String>,
    form: ContactForm,
    errors: FormErrors,
    last_import: Option<ImportReport>,
    saving: bool,
    reload: u32,
}

impl ContactsScreen {
    fn save(&mut self, ctx: &Context<Self>, contacts: Vec<NewContact>) {
        let Some(segment_id) = self.segment_id.clone() else {
            toast::error("Choose a segment first");
            return;
        };
        self.saving = true;
        let link = ctx.link().clone();
        let count = contacts.len();
        spawn_local(async move {
            let result = outreach::add_contacts(segment_id, contacts).await.map(|_| count);
            link.send_message(Msg::Saved(result));
        });
    }
}

impl Component for ContactsScreen {
    type Message = Msg;
    type Properties = ContactsProps;

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        spawn_local(async move {
            link.send_message(Msg::SegmentsLoaded(outreach::segment_options().await));
        });
        Self {
            segments: Vec::new(),
            segment_id: ctx.props().segment_id.clone(),
            form: ContactForm::default(),
            errors: FormErrors::new(),
            last_import: None,
            saving: false,
            reload: 0,
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().segment_id != old_props.segment_id {
            self.segment_id = ctx.props().segment_id.clone();
            self.last_import = None;
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SegmentsLoaded(Ok(segments)) => {
                if self.segment_id.is_none() {
                    self.segment_id = segments.first().map(|segment| segment.id.clone());
                }
                self.segments = segments;
            }
            Msg::SegmentsLoaded(Err(err)) => toast::error(&err.to_string()),
            Msg::SelectSegment(id) => {
                self.segment_id = (!id.is_empty()).then_some(id);
                self.last_import = None;
            }
            Msg::Email(email) => self.form.email = email,
            Msg::Name(name) => self.form.name = name,
            Msg::Submit => {
                let mut contact = None;
                match submit(&self.form, |valid| contact = Some(valid)) {
                    Ok(()) => self.errors = FormErrors::new(),
                    Err(errors) => self.errors = errors,
                }
                if let Some(contact) = contact {
                    self.save(ctx, vec![contact]);
                }
            }
            Msg::FileSelected(file) => {
                let link = ctx.link().clone();
                spawn_local(async move {
                    let blob = Blob::from(file);
                    let parsed = match read_as_bytes(&blob).await {
                        Ok(bytes) => parse_contacts_csv(&String::from_utf8_lossy(&bytes))
                            .map_err(|err| err.to_string()),
                        Err(err) => Err(format!("Could not read file: {err}")),
                    };
                    link.send_message(Msg::FileParsed(parsed));
                });
                return false;
            }
            Msg::FileParsed(Ok(report)) => {
                log::info!(
                    "CSV import: {} contacts, {} rejected, {} duplicates",
                    report.contacts.len(),
                    report.rejected.len(),
                    report.duplicates
                );
                if report.contacts.is_empty() {
                    toast::error("No valid contacts found in the file");
                } else {
                    self.save(ctx, report.contacts.clone());
                }
                self.last_import = Some(report);
            }
            Msg::FileParsed(Err(message)) => toast::error(&message),
            Msg::Saved(Ok(count)) => {
                self.saving = false;
                self.form = ContactForm::default();
                self.reload += 1;
                toast::success(&format!("Added {count} contact(s)"));
            }
            Msg::Saved(Err(err)) => {
                self.saving = false;
                toast::error(&err.to_string());
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let options: Vec<(String, String)> = self
            .segments
            .iter()
            .map(|segment| (segment.id.clone(), segment.name.clone()))
            .collect();
        let selected = self.segment_id.clone().unwrap_or_default();
        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });
        let onchange = link.batch_callback(|e: Event| {
            let input = e.target_unchecked_into::<HtmlInputElement>();
            let file = input.files().and_then(|files| files.get(0));
            input.set_value("");
            file.map(Msg::FileSelected)
        });

        html! {
            <div class="page">
                { select_field("Segment", &selected, &options, "Choose a segment", None, link.callback(Msg::SelectSegment)) }
                if self.segment_id.is_some() {
                    <div class="contact-tools">
                        <form class="console-form inline-form" {onsubmit}>
                            { text_field("Email", "email", &self.form.email, self.errors.get("email"), link.callback(Msg::Email)) }
                            { text_field("Name", "text", &self.form.name, None, link.callback(Msg::Name)) }
                            <button type="submit" class="btn btn-primary" disabled={self.saving}>{"Add contact"}</button>
                        </form>
                        <label class="btn file-btn">
                            <i class="material-icons">{"upload_file"}</i>
                            {"Import CSV"}
                            <input type="file" accept=".csv,text/csv" hidden=true {onchange} />
                        </label>
                    </div>
                    { self.import_summary() }
                    <ContactsPage scope={self.segment_id.clone()} reload={self.reload} />
                }
            </div>
        }
    }
}

impl ContactsScreen {
    fn import_summary(&self) -> Html {
        let Some(report) = &self.last_import else {
            return html! {};
        };
        if report.rejected.is_empty() && report.duplicates == 0 {
            return html! {};
        }
        html! {
            <div class="import-report">
                <p>{ format!(
                    "{} imported, {} skipped as duplicates, {} rejected",
                    report.contacts.len(),
                    report.duplicates,
                    report.rejected.len()
                ) }</p>
                <ul>
                    { for report.rejected.iter().take(10).map(|row| html! {
                        <li>{ format!("Line {}: {} ({})", row.line, row.value, row.reason) }</li>
                    }) }
                </ul>
            </div>
        }
    }
}
