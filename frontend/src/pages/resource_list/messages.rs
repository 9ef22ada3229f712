use common::error::ApiError;
use common::filters::{FilterField, FilterSet};
use common::table::Page;

use crate::context::AuthContext;

use super::RowAction;

pub enum Msg<Row> {
    Load,
    /// Response of the fetch started with the given generation.
    Loaded(u64, Result<Page<Row>, ApiError>),
    FilterFieldsLoaded(Vec<FilterField>),
    SearchInput(String),
    /// The debounce timer for the given ticket elapsed.
    SearchElapsed(u64),
    Sort(&'static str),
    OpenFilters,
    CloseFilters,
    ApplyFilters(FilterSet),
    PreviousPage,
    NextPage,
    ShowDetail(Row),
    CloseDetail,
    Action(RowAction, Row),
    ReasonInput(String),
    SubmitReason,
    CancelReason,
    ActionFinished(Result<String, ApiError>),
    AuthChanged(AuthContext),
}
