//! Update function for `ResourceList`.
//!
//! Fetches are fire-and-forget `spawn_local` tasks that report back with the
//! generation they were started under; `Loaded` drops anything older than
//! the latest request.

use common::error::ApiError;
use common::forms::{Form, RejectionForm};
use common::table::{ListState, SortState, TableRow};
use common::validation::FormErrors;
use gloo_timers::callback::Timeout;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::client;
use crate::components::confirm::confirm;
use crate::components::toast;

use super::messages::Msg;
use super::state::ResourceList;
use super::{Resource, RowAction};

pub fn update<R: Resource>(
    component: &mut ResourceList<R>,
    ctx: &Context<ResourceList<R>>,
    msg: Msg<R::Row>,
) -> bool {
    match msg {
        Msg::Load => {
            let generation = component.requests.begin();
            component.rows = ListState::Loading;
            let link = ctx.link().clone();
            let context = component.context.clone();
            let query = component.query.clone();
            spawn_local(async move {
                let result = R::fetch(context, query).await;
                link.send_message(Msg::Loaded(generation, result));
            });
            true
        }
        Msg::Loaded(generation, result) => {
            if !component.requests.accept(generation) {
                log::debug!("{}: dropping stale response #{generation}", R::TITLE);
                return false;
            }
            match result {
                Ok(page) => {
                    component.query.page = page.page.max(1);
                    component.rows = ListState::Loaded(page);
                }
                Err(err) => {
                    if matches!(err, ApiError::Unauthorized) {
                        if let Some(auth) = &component.auth {
                            auth.logout.emit(());
                        }
                    }
                    component.rows = ListState::Error(err.to_string());
                }
            }
            true
        }
        Msg::FilterFieldsLoaded(fields) => {
            component.filter_fields = fields;
            true
        }
        Msg::SearchInput(text) => {
            component.search_text = text.clone();
            let ticket = component.search.trigger(text);
            let link = ctx.link().clone();
            component.search_timer = Some(Timeout::new(
                client::config().search_debounce_ms,
                move || link.send_message(Msg::SearchElapsed(ticket)),
            ));
            true
        }
        Msg::SearchElapsed(ticket) => {
            let Some(search) = component.search.fire(ticket) else {
                return false;
            };
            component.search_timer = None;
            if search.trim() != component.query.search.trim() {
                component.query.search = search;
                component.query.page = 1;
                ctx.link().send_message(Msg::Load);
            }
            false
        }
        Msg::Sort(key) => {
            component.sort = Some(SortState::toggle(component.sort.as_ref(), key));
            true
        }
        Msg::OpenFilters => {
            component.filters_open = true;
            true
        }
        Msg::CloseFilters => {
            component.filters_open = false;
            true
        }
        Msg::ApplyFilters(filters) => {
            if filters != component.query.filters {
                component.query.filters = filters;
                component.query.page = 1;
                ctx.link().send_message(Msg::Load);
            }
            true
        }
        Msg::PreviousPage => {
            let can_move = component.rows.data().is_some_and(|page| page.has_previous());
            if can_move {
                component.query.page -= 1;
                ctx.link().send_message(Msg::Load);
            }
            can_move
        }
        Msg::NextPage => {
            let can_move = component.rows.data().is_some_and(|page| page.has_next());
            if can_move {
                component.query.page += 1;
                ctx.link().send_message(Msg::Load);
            }
            can_move
        }
        Msg::ShowDetail(row) => {
            component.detail = Some(row);
            true
        }
        Msg::CloseDetail => {
            component.detail = None;
            true
        }
        Msg::Action(action, row) => {
            if action.navigates {
                ctx.props().on_navigate.emit((action.id, row.row_id()));
                return false;
            }
            if action.needs_reason {
                component.pending_reason = Some((action, row));
                component.reason = RejectionForm::default();
                component.reason_errors = FormErrors::new();
                return true;
            }
            if let Some(message) = action.confirm {
                if !confirm(message) {
                    return false;
                }
            }
            run_action(component, ctx, action, row, None);
            true
        }
        Msg::ReasonInput(reason) => {
            component.reason.reason = reason;
            component.reason_errors = FormErrors::new();
            true
        }
        Msg::SubmitReason => {
            match component.reason.validate() {
                Ok(request) => {
                    if let Some((action, row)) = component.pending_reason.take() {
                        run_action(component, ctx, action, row, Some(request.reason));
                    }
                }
                Err(errors) => component.reason_errors = errors,
            }
            true
        }
        Msg::CancelReason => {
            component.pending_reason = None;
            true
        }
        Msg::ActionFinished(result) => {
            component.action_running = false;
            match result {
                Ok(message) => {
                    if !message.is_empty() {
                        toast::success(&message);
                    }
                    component.detail = None;
                    ctx.link().send_message(Msg::Load);
                }
                Err(err) => toast::error(&err.to_string()),
            }
            true
        }
        Msg::AuthChanged(auth) => {
            component.context.admin = auth.is_admin();
            component.auth = Some(auth);
            true
        }
    }
}

fn run_action<R: Resource>(
    component: &mut ResourceList<R>,
    ctx: &Context<ResourceList<R>>,
    action: RowAction,
    row: R::Row,
    reason: Option<String>,
) {
    component.action_running = true;
    log::info!("{}: {} on {}", R::TITLE, action.id, row.row_id());
    let link = ctx.link().clone();
    spawn_local(async move {
        let result = R::perform(action.id, row, reason).await;
        link.send_message(Msg::ActionFinished(result));
    });
}
