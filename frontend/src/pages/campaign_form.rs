//! Create or edit a fundraising campaign.

use common::error::ApiError;
use common::forms::{submit, CampaignForm};
use common::model::campaign::Campaign;
use common::model::category::Category;
use common::validation::{FormErrors, MAX_DESCRIPTION_LEN};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::{campaigns, categories};
use crate::components::banner::{error_banner, loading_indicator};
use crate::components::form_field::{select_field, text_field, textarea_field};
use crate::components::toast;

#[derive(Properties, PartialEq)]
pub struct CampaignFormProps {
    /// `None` creates a new campaign.
    #[prop_or_default]
    pub campaign_id: Option<String>,
    pub on_done: Callback<()>,
}

pub enum Field {
    Title,
    Description,
    Goal,
    Category,
    EndDate,
}

pub enum Msg {
    Loaded(Result<Campaign, ApiError>),
    CategoriesLoaded(Result<Vec<Category>, ApiError>),
    Retry,
    Input(Field, String),
    Submit,
    Saved(Result<Campaign, ApiError>),
}

pub struct CampaignFormPage {
    form: CampaignForm,
    errors: FormErrors,
    categories: Vec<Category>,
    load_error: Option<String>,
    loading: bool,
    saving: bool,
}

impl CampaignFormPage {
    fn load(ctx: &Context<Self>) {
        let link = ctx.link().clone();
        spawn_local(async move {
            link.send_message(Msg::CategoriesLoaded(categories::list().await));
        });
        if let Some(id) = ctx.props().campaign_id.clone() {
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::Loaded(campaigns::get(id).await));
            });
        }
    }
}

impl Component for CampaignFormPage {
    type Message = Msg;
    type Properties = CampaignFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self::load(ctx);
        Self {
            form: CampaignForm::default(),
            errors: FormErrors::new(),
            categories: Vec::new(),
            load_error: None,
            loading: ctx.props().campaign_id.is_some(),
            saving: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(Ok(campaign)) => {
                self.form = CampaignForm::from_campaign(&campaign);
                self.loading = false;
            }
            Msg::Loaded(Err(err)) => {
                self.load_error = Some(err.to_string());
                self.loading = false;
            }
            Msg::CategoriesLoaded(Ok(categories)) => self.categories = categories,
            Msg::CategoriesLoaded(Err(err)) => {
                log::warn!("Categories unavailable: {err}");
            }
            Msg::Retry => {
                self.load_error = None;
                self.loading = ctx.props().campaign_id.is_some();
                Self::load(ctx);
            }
            Msg::Input(field, value) => {
                match field {
                    Field::Title => self.form.title = value,
                    Field::Description => self.form.description = value,
                    Field::Goal => self.form.goal_amount = value,
                    Field::Category => self.form.category = value,
                    Field::EndDate => self.form.end_date = value,
                }
            }
            Msg::Submit => {
                let link = ctx.link().clone();
                let campaign_id = ctx.props().campaign_id.clone();
                let result = submit(&self.form, |request| {
                    spawn_local(async move {
                        let saved = match campaign_id {
                            Some(id) => campaigns::update(id, request).await,
                            None => campaigns::create(request).await,
                        };
                        link.send_message(Msg::Saved(saved));
                    });
                });
                match result {
                    Ok(()) => {
                        self.errors = FormErrors::new();
                        self.saving = true;
                    }
                    Err(errors) => self.errors = errors,
                }
            }
            Msg::Saved(Ok(campaign)) => {
                self.saving = false;
                toast::success(&format!("Saved \"{}\"", campaign.title));
                ctx.props().on_done.emit(());
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
        if self.loading {
            return loading_indicator();
        }
        if let Some(message) = &self.load_error {
            return error_banner(message, link.callback(|_| Msg::Retry));
        }

        let editing = ctx.props().campaign_id.is_some();
        let category_options: Vec<(String, String)> = self
            .categories
            .iter()
            .map(|category| (category.filter_value().to_string(), category.name.clone()))
            .collect();
        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });

        html! {
            <form class="console-form" {onsubmit}>
                <h2>{ if editing { "Edit campaign" } else { "New campaign" } }</h2>
                { text_field("Title", "text", &self.form.title, self.errors.get("title"),
                    link.callback(|v| Msg::Input(Field::Title, v))) }
                { textarea_field("Description", &self.form.description, self.errors.get("description"),
                    Some(MAX_DESCRIPTION_LEN), link.callback(|v| Msg::Input(Field::Description, v))) }
                { text_field("Goal amount", "number", &self.form.goal_amount, self.errors.get("goal_amount"),
                    link.callback(|v| Msg::Input(Field::Goal, v))) }
                { select_field("Category", &self.form.category, &category_options, "Choose a category",
                    self.errors.get("category"), link.callback(|v| Msg::Input(Field::Category, v))) }
                { text_field("End date", "date", &self.form.end_date, None,
                    link.callback(|v| Msg::Input(Field::EndDate, v))) }
                <div class="form-actions">
                    <button type="button" class="btn" onclick={ctx.props().on_done.reform(|_: MouseEvent| ())}>{"Cancel"}</button>
                    <button type="submit" class="btn btn-primary" disabled={self.saving}>
                        { if self.saving { "Saving..." } else { "Save" } }
                    </button>
                </div>
            </form>
        }
    }
}
