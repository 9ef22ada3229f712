//! View rendering for `ResourceList`.

use common::table::{ListState, TableRow};
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use crate::components::banner::{empty_state, error_banner, loading_indicator};
use crate::components::data_table::data_table;
use crate::components::filter_modal::FilterModal;
use crate::components::form_field::textarea_field;
use crate::components::top_sheet::TopSheet;

use super::messages::Msg;
use super::state::ResourceList;
use super::Resource;

pub fn view<R: Resource>(component: &ResourceList<R>, ctx: &Context<ResourceList<R>>) -> Html {
    let link = ctx.link();

    html! {
        <section class="resource-list">
            { toolbar(component, link) }
            { body(component, link) }
            { pagination(component, link) }
            { detail_sheet(component, link) }
            { reason_sheet(component, link) }
            <FilterModal
                open={component.filters_open}
                fields={component.filter_fields.clone()}
                applied={component.query.filters.clone()}
                on_change={link.callback(Msg::ApplyFilters)}
                on_close={link.callback(|_| Msg::CloseFilters)}
            />
        </section>
    }
}

fn toolbar<R: Resource>(component: &ResourceList<R>, link: &Scope<ResourceList<R>>) -> Html {
    let oninput = link.callback(|e: InputEvent| {
        Msg::SearchInput(e.target_unchecked_into::<HtmlInputElement>().value())
    });
    let active_filters = component.query.filters.len();

    html! {
        <div class="list-toolbar">
            <h2>{ R::TITLE }</h2>
            <input
                class="search-input"
                type="search"
                placeholder="Search..."
                value={component.search_text.clone()}
                {oninput}
            />
            if !component.filter_fields.is_empty() {
                <button class="btn" onclick={link.callback(|_| Msg::OpenFilters)}>
                    <i class="material-icons">{"filter_list"}</i>
                    {"Filters"}
                    if active_filters > 0 {
                        <span class="filter-count">{ active_filters }</span>
                    }
                </button>
            }
        </div>
    }
}

fn body<R: Resource>(component: &ResourceList<R>, link: &Scope<ResourceList<R>>) -> Html {
    match &component.rows {
        ListState::Idle | ListState::Loading => loading_indicator(),
        ListState::Error(message) => error_banner(message, link.callback(|_| Msg::Load)),
        ListState::Loaded(page) => {
            let rows = component.visible();
            let summary = R::summary(&page.items);
            if rows.is_empty() {
                return html! { <>{ summary }{ empty_state(R::EMPTY_MESSAGE) }</> };
            }
            let columns = R::columns();
            let on_sort = link.callback(Msg::Sort);
            let on_row_click = link.callback(Msg::ShowDetail);
            let table = data_table(
                &rows,
                &columns,
                component.sort.as_ref(),
                on_sort,
                on_row_click,
                |row: &R::Row| row_actions(component, link, row),
            );
            html! { <>{ summary }{ table }</> }
        }
    }
}

fn row_actions<R: Resource>(
    component: &ResourceList<R>,
    link: &Scope<ResourceList<R>>,
    row: &R::Row,
) -> Html {
    let actions = R::row_actions(&component.context, row);
    html! {
        <div class="row-actions">
            {
                for actions.into_iter().map(|action| {
                    let target = row.clone();
                    let onclick = link.callback(move |e: MouseEvent| {
                        e.stop_propagation();
                        Msg::Action(action, target.clone())
                    });
                    html! {
                        <button
                            class="icon-btn"
                            title={action.label}
                            disabled={component.action_running}
                            {onclick}
                        >
                            <i class="material-icons">{ action.icon }</i>
                        </button>
                    }
                })
            }
        </div>
    }
}

fn pagination<R: Resource>(component: &ResourceList<R>, link: &Scope<ResourceList<R>>) -> Html {
    let Some(page) = component.rows.data() else {
        return html! {};
    };
    if page.total_pages <= 1 {
        return html! {};
    }
    let total = page
        .total
        .map(|total| format!(" ({total} total)"))
        .unwrap_or_default();

    html! {
        <div class="pagination">
            <button
                class="btn"
                disabled={!page.has_previous()}
                onclick={link.callback(|_| Msg::PreviousPage)}
            >
                {"Previous"}
            </button>
            <span>{ format!("Page {} of {}{}", page.page, page.total_pages, total) }</span>
            <button
                class="btn"
                disabled={!page.has_next()}
                onclick={link.callback(|_| Msg::NextPage)}
            >
                {"Next"}
            </button>
        </div>
    }
}

fn detail_sheet<R: Resource>(component: &ResourceList<R>, link: &Scope<ResourceList<R>>) -> Html {
    let Some(row) = &component.detail else {
        return html! {};
    };
    let columns = R::columns();

    html! {
        <TopSheet open=true title={R::TITLE} on_close={link.callback(|_| Msg::CloseDetail)}>
            <dl class="detail-list">
                {
                    for columns.iter().map(|column| html! {
                        <>
                            <dt>{ column.label }</dt>
                            <dd>{ row.cell(column.key) }</dd>
                        </>
                    })
                }
            </dl>
            { row_actions(component, link, row) }
        </TopSheet>
    }
}

fn reason_sheet<R: Resource>(component: &ResourceList<R>, link: &Scope<ResourceList<R>>) -> Html {
    let Some((action, _)) = &component.pending_reason else {
        return html! {};
    };

    html! {
        <TopSheet open=true title={action.label} on_close={link.callback(|_| Msg::CancelReason)}>
            { textarea_field(
                "Reason",
                &component.reason.reason,
                component.reason_errors.get("reason"),
                Some(common::validation::MAX_DESCRIPTION_LEN),
                link.callback(Msg::ReasonInput),
            ) }
            <div class="form-actions">
                <button class="btn" onclick={link.callback(|_| Msg::CancelReason)}>{"Cancel"}</button>
                <button
                    class="btn btn-danger"
                    disabled={component.action_running}
                    onclick={link.callback(|_| Msg::SubmitReason)}
                >
                    { action.label }
                </button>
            </div>
        </TopSheet>
    }
}
