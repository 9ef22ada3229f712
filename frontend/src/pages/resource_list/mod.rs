//! Generic list page: one REST collection rendered as a sortable, searchable,
//! filterable table with server-driven pagination.
//!
//! Responsibilities
//! - `Resource` describes a collection: how to fetch it, which columns and
//!   search fields it has, optional filter dropdown sources, and row actions.
//! - `ResourceList<R>` wires a `Resource` into a Yew component following the
//!   same Elm-style split as the builder: `state`, `messages`, `update`, `view`.
//! - Search input is debounced; every fetch carries a request generation so a
//!   slow earlier response never overwrites a newer one.

use std::future::Future;

use common::error::ApiError;
use common::filters::{FilterField, ListQuery};
use common::table::{Page, TableRow};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::components::data_table::Column;
use crate::context::AuthContext;

mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::ResourceList;

/// What a list page needs to know about the caller.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListContext {
    /// Parent record the collection is nested under (e.g. a segment id).
    pub scope: Option<String>,
    pub admin: bool,
}

/// A per-row affordance. Actions that `navigates` are forwarded to the
/// parent via `on_navigate` instead of calling `Resource::perform`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowAction {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub confirm: Option<&'static str>,
    pub needs_reason: bool,
    pub navigates: bool,
}

impl RowAction {
    pub const fn new(id: &'static str, label: &'static str, icon: &'static str) -> Self {
        Self {
            id,
            label,
            icon,
            confirm: None,
            needs_reason: false,
            navigates: false,
        }
    }

    pub const fn confirm(mut self, message: &'static str) -> Self {
        self.confirm = Some(message);
        self
    }

    pub const fn with_reason(mut self) -> Self {
        self.needs_reason = true;
        self
    }

    pub const fn navigation(mut self) -> Self {
        self.navigates = true;
        self
    }
}

pub trait Resource: 'static {
    type Row: TableRow + Clone + PartialEq + 'static;

    const TITLE: &'static str;
    const EMPTY_MESSAGE: &'static str;
    /// Fields matched by the client-side search box.
    const SEARCH_FIELDS: &'static [&'static str];

    fn columns() -> Vec<Column>;

    fn fetch(
        context: ListContext,
        query: ListQuery,
    ) -> impl Future<Output = Result<Page<Self::Row>, ApiError>> + 'static;

    /// Filters offered in the modal, possibly populated from a second collection.
    fn filter_fields(_context: ListContext) -> impl Future<Output = Vec<FilterField>> + 'static {
        async { Vec::new() }
    }

    fn row_actions(_context: &ListContext, _row: &Self::Row) -> Vec<RowAction> {
        Vec::new()
    }

    /// Runs `action` against `row` and returns the toast text on success.
    fn perform(
        _action: &'static str,
        _row: Self::Row,
        _reason: Option<String>,
    ) -> impl Future<Output = Result<String, ApiError>> + 'static {
        async { Ok(String::new()) }
    }

    /// Optional header above the table (e.g. stat cards).
    fn summary(_rows: &[Self::Row]) -> Html {
        html! {}
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct ResourceListProps {
    #[prop_or_default]
    pub scope: Option<String>,
    /// Bumped by the parent to force a reload after an external change.
    #[prop_or_default]
    pub reload: u32,
    #[prop_or_default]
    pub on_navigate: Callback<(&'static str, String)>,
}

impl<R: Resource> Component for ResourceList<R> {
    type Message = Msg<R::Row>;
    type Properties = ResourceListProps;

    fn create(ctx: &Context<Self>) -> Self {
        let (auth, handle) = match ctx
            .link()
            .context::<AuthContext>(ctx.link().callback(Msg::AuthChanged))
        {
            Some((auth, handle)) => (Some(auth), Some(handle)),
            None => (None, None),
        };
        let context = ListContext {
            scope: ctx.props().scope.clone(),
            admin: auth.as_ref().is_some_and(AuthContext::is_admin),
        };

        let link = ctx.link().clone();
        let filter_context = context.clone();
        spawn_local(async move {
            let fields = R::filter_fields(filter_context).await;
            link.send_message(Msg::FilterFieldsLoaded(fields));
        });
        ctx.link().send_message(Msg::Load);

        ResourceList::new(context, auth, handle)
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let props = ctx.props();
        if props.scope != old_props.scope {
            self.context.scope = props.scope.clone();
            self.query.page = 1;
            ctx.link().send_message(Msg::Load);
        } else if props.reload != old_props.reload {
            ctx.link().send_message(Msg::Load);
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
