//! Sortable, paginated data table.
//!
//! # Design
//! - Sort directive and page are controlled by props; clicks go through the engine callbacks.
//! - `rows: None` renders the loading state.

use std::rc::Rc;

use crate::components::pagination::Pagination;
use crate::core::table::{DataTable, SortDirection, SortDirective, TableBody, TableFooter};
use yew::prelude::*;

#[derive(Properties)]
pub struct DataTableProps<R: 'static> {
    pub table: Rc<DataTable<R>>,
    #[prop_or_default]
    pub rows: Option<Rc<Vec<R>>>,
    #[prop_or_default]
    pub directive: SortDirective,
    #[prop_or(1usize)]
    pub page: usize,
    #[prop_or_default]
    pub class: Classes,
}

impl<R: 'static> PartialEq for DataTableProps<R> {
    fn eq(&self, other: &Self) -> bool {
        let same_rows = match (&self.rows, &other.rows) {
            (Some(left), Some(right)) => Rc::ptr_eq(left, right),
            (None, None) => true,
            _ => false,
        };
        Rc::ptr_eq(&self.table, &other.table)
            && same_rows
            && self.directive == other.directive
            && self.page == other.page
            && self.class == other.class
    }
}

#[function_component(DataTableView)]
pub fn data_table_view<R: 'static>(props: &DataTableProps<R>) -> Html {
    let table = Rc::clone(&props.table);
    let rows = props.rows.as_deref().map(Vec::as_slice);
    let view = table.view(rows, &props.directive, props.page);
    let span = view.headers.len() + usize::from(view.numeration);

    let header = view.headers.iter().map(|cell| {
        let onclick = {
            let table = Rc::clone(&table);
            let directive = props.directive.clone();
            let key = cell.key.clone();
            Callback::from(move |_: MouseEvent| {
                let _ = table.header_clicked(&directive, &key);
            })
        };
        let arrow = match cell.direction {
            Some(SortDirection::Asc) => " ▲",
            Some(SortDirection::Desc) => " ▼",
            None => "",
        };
        let style = cell
            .width
            .as_ref()
            .map_or_else(|| "width: auto".to_string(), |width| format!("width: {width}"));
        html! {
            <th
                class={classes!(cell.sortable.then_some("cursor-pointer select-none"))}
                style={style}
                onclick={onclick}
            >
                {cell.title.clone()}{arrow}
            </th>
        }
    });

    let body = match &view.body {
        TableBody::Loading => html! {
            <tr><td colspan={span.to_string()} class="text-center p-10">
                <span class="loading loading-spinner"></span>
                <p>{"Chargement..."}</p>
            </td></tr>
        },
        TableBody::Empty => html! {
            <tr><td colspan={span.to_string()} class="text-center p-10">{"Aucune donnée"}</td></tr>
        },
        TableBody::Rows(rows) => html! {
            {for rows.iter().map(|row| {
                let clickable = table.rows_clickable();
                let onclick = {
                    let table = Rc::clone(&table);
                    let index = row.source_index;
                    Callback::from(move |_: MouseEvent| table.row_clicked(index))
                };
                html! {
                    <tr
                        class={classes!(
                            row.striped.then_some("bg-base-200"),
                            clickable.then_some("hover cursor-pointer")
                        )}
                        onclick={clickable.then_some(onclick)}
                    >
                        if let Some(number) = row.number {
                            <td class="text-base-content/60">{number}</td>
                        }
                        {for row.cells.iter().map(|cell| html! { <td>{cell.clone()}</td> })}
                    </tr>
                }
            })}
        },
    };

    let footer = view.footer.map(|footer| match footer {
        TableFooter::Count(count) => html! {
            <p>{format!("{count} éléments affichés")}</p>
        },
        TableFooter::Pager(pager) => {
            let state = table.page_state(props.page, rows.map_or(0, <[R]>::len));
            let on_change = {
                let table = Rc::clone(&table);
                Callback::from(move |page: usize| {
                    let requested = i64::try_from(page).unwrap_or(i64::MAX);
                    let _ = table.request_page(state, requested);
                })
            };
            html! { <Pagination page={pager.page} page_count={pager.page_count} on_change={on_change} /> }
        }
    });

    html! {
        <div class={classes!("overflow-x-auto", props.class.clone())}>
            <table class="table w-full">
                <thead>
                    <tr>
                        if view.numeration {
                            <th>{"#"}</th>
                        }
                        {for header}
                    </tr>
                </thead>
                <tbody>{body}</tbody>
                if let Some(footer) = footer {
                    <tfoot>
                        <tr><td colspan={span.to_string()}>{footer}</td></tr>
                    </tfoot>
                }
            </table>
        </div>
    }
}
