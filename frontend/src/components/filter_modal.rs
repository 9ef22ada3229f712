//! Filter editor shown in a top sheet.
//!
//! Edits happen on a `FilterDraft`; the parent only hears about them when the
//! user applies or clears. Clearing emits an empty `FilterSet`.

use common::filters::{FilterDraft, FilterField, FilterSet};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use super::top_sheet::TopSheet;

#[derive(Properties, PartialEq)]
pub struct FilterModalProps {
    pub open: bool,
    pub fields: Vec<FilterField>,
    pub applied: FilterSet,
    pub on_change: Callback<FilterSet>,
    pub on_close: Callback<()>,
}

pub enum Msg {
    Set(String, String),
    Apply,
    ClearAll,
}

pub struct FilterModal {
    draft: FilterDraft,
}

impl Component for FilterModal {
    type Message = Msg;
    type Properties = FilterModalProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            draft: FilterDraft::from_applied(&ctx.props().applied),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let props = ctx.props();
        if (props.open && !old_props.open) || props.applied != old_props.applied {
            self.draft = FilterDraft::from_applied(&props.applied);
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Set(field, value) => {
                self.draft.set(&field, &value);
                true
            }
            Msg::Apply => {
                ctx.props().on_change.emit(self.draft.apply());
                ctx.props().on_close.emit(());
                false
            }
            Msg::ClearAll => {
                let cleared = self.draft.clear_all();
                ctx.props().on_change.emit(cleared);
                ctx.props().on_close.emit(());
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let link = ctx.link();

        html! {
            <TopSheet open={props.open} title="Filters" on_close={props.on_close.clone()}>
                <div class="filter-fields">
                    { for props.fields.iter().map(|field| self.field_control(field, link)) }
                </div>
                <div class="form-actions">
                    <button class="btn" onclick={link.callback(|_| Msg::ClearAll)}>{"Clear all"}</button>
                    <button class="btn btn-primary" onclick={link.callback(|_| Msg::Apply)}>{"Apply"}</button>
                </div>
            </TopSheet>
        }
    }
}

impl FilterModal {
    fn field_control(&self, field: &FilterField, link: &Scope<Self>) -> Html {
        let key = field.key.clone();
        let current = self.draft.get(&field.key).to_string();

        let control = if field.options.is_empty() {
            let oninput = link.callback(move |e: InputEvent| {
                Msg::Set(key.clone(), e.target_unchecked_into::<HtmlInputElement>().value())
            });
            html! { <input type="text" value={current} {oninput} /> }
        } else {
            let onchange = link.callback(move |e: Event| {
                Msg::Set(key.clone(), e.target_unchecked_into::<HtmlSelectElement>().value())
            });
            html! {
                <select {onchange}>
                    <option value="" selected={current.is_empty()}>{"Any"}</option>
                    {
                        for field.options.iter().map(|option| html! {
                            <option value={option.value.clone()} selected={option.value == current}>
                                { option.label.clone() }
                            </option>
                        })
                    }
                </select>
            }
        };

        html! {
            <label class="form-field">
                <span class="form-label">{ field.label.clone() }</span>
                { control }
            </label>
        }
    }
}
