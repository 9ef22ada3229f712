//! Sortable table rendering for any `TableRow`.

use common::table::{SortDirection, SortState, TableRow};
use yew::{classes, html, Callback, Html};

use super::badge::status_badge;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Column {
    pub key: &'static str,
    pub label: &'static str,
    pub sortable: bool,
    /// Render the cell as a status badge.
    pub badge: bool,
}

impl Column {
    pub const fn new(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            sortable: true,
            badge: false,
        }
    }

    pub const fn badge(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            sortable: true,
            badge: true,
        }
    }

    pub const fn plain(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            sortable: false,
            badge: false,
        }
    }
}

fn sort_indicator(sort: Option<&SortState>, key: &str) -> &'static str {
    match sort {
        Some(state) if state.key == key => match state.direction {
            SortDirection::Ascending => "arrow_upward",
            SortDirection::Descending => "arrow_downward",
        },
        _ => "",
    }
}

/// Renders `rows` (already filtered and sorted). `row_actions` renders the
/// trailing action cell for a row.
pub fn data_table<R, F>(
    rows: &[R],
    columns: &[Column],
    sort: Option<&SortState>,
    on_sort: Callback<&'static str>,
    on_row_click: Callback<R>,
    row_actions: F,
) -> Html
where
    R: TableRow + Clone + 'static,
    F: Fn(&R) -> Html,
{
    html! {
        <table class="data-table">
            <thead>
                <tr>
                    {
                        for columns.iter().map(|column| {
                            let key = column.key;
                            let onclick = column.sortable.then(|| on_sort.reform(move |_: yew::MouseEvent| key));
                            html! {
                                <th class={classes!(column.sortable.then_some("sortable"))} {onclick}>
                                    { column.label }
                                    <i class="material-icons sort-icon">{ sort_indicator(sort, key) }</i>
                                </th>
                            }
                        })
                    }
                    <th class="actions-col"></th>
                </tr>
            </thead>
            <tbody>
                {
                    for rows.iter().map(|row| {
                        let clicked = row.clone();
                        let onclick = on_row_click.reform(move |_: yew::MouseEvent| clicked.clone());
                        html! {
                            <tr key={row.row_id()}>
                                {
                                    for columns.iter().map(|column| {
                                        let value = row.cell(column.key);
                                        html! {
                                            <td onclick={onclick.clone()}>
                                                { if column.badge { status_badge(&value) } else { html! { <>{ value }</> } } }
                                            </td>
                                        }
                                    })
                                }
                                <td class="actions-col">{ row_actions(row) }</td>
                            </tr>
                        }
                    })
                }
            </tbody>
        </table>
    }
}
