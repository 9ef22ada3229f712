//! Runtime state of a `ResourceList` page.

use std::marker::PhantomData;

use common::filters::{FilterField, ListQuery};
use common::forms::RejectionForm;
use common::sequencing::{Debouncer, RequestSequencer};
use common::table::{ListState, Page, SortState};
use common::validation::FormErrors;
use gloo_timers::callback::Timeout;
use yew::context::ContextHandle;

use crate::api::client;
use crate::context::AuthContext;

use super::{ListContext, Resource, RowAction};

pub struct ResourceList<R: Resource> {
    pub rows: ListState<Page<R::Row>>,
    /// Query sent with the next fetch. `search` is only updated once the
    /// debounce window closes.
    pub query: ListQuery,
    /// Raw search box content, applied client side on every keystroke.
    pub search_text: String,
    pub search: Debouncer<String>,
    /// Dropping the timer cancels it.
    pub search_timer: Option<Timeout>,
    pub requests: RequestSequencer,
    pub sort: Option<SortState>,
    pub filter_fields: Vec<FilterField>,
    pub filters_open: bool,
    pub detail: Option<R::Row>,
    /// Action waiting for a typed reason before it runs.
    pub pending_reason: Option<(RowAction, R::Row)>,
    pub reason: RejectionForm,
    pub reason_errors: FormErrors,
    pub action_running: bool,
    pub context: ListContext,
    pub auth: Option<AuthContext>,
    pub _auth_handle: Option<ContextHandle<AuthContext>>,
    _resource: PhantomData<R>,
}

impl<R: Resource> ResourceList<R> {
    pub fn new(
        context: ListContext,
        auth: Option<AuthContext>,
        auth_handle: Option<ContextHandle<AuthContext>>,
    ) -> Self {
        Self {
            rows: ListState::Idle,
            query: ListQuery::first_page(client::config().page_size),
            search_text: String::new(),
            search: Debouncer::new(),
            search_timer: None,
            requests: RequestSequencer::new(),
            sort: None,
            filter_fields: Vec::new(),
            filters_open: false,
            detail: None,
            pending_reason: None,
            reason: RejectionForm::default(),
            reason_errors: FormErrors::new(),
            action_running: false,
            context,
            auth,
            _auth_handle: auth_handle,
            _resource: PhantomData,
        }
    }

    /// Rows of the current page after the instant client-side search and sort.
    pub fn visible(&self) -> Vec<R::Row> {
        match self.rows.data() {
            Some(page) => common::table::visible_rows(
                &page.items,
                R::SEARCH_FIELDS,
                &self.search_text,
                self.sort.as_ref(),
            ),
            None => Vec::new(),
        }
    }
}
