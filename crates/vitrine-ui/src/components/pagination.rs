//! Previous/next pager for paginated tables.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    #[prop_or(1usize)]
    pub page: usize,
    #[prop_or(1usize)]
    pub page_count: usize,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub on_change: Callback<usize>,
}

#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    let total = props.page_count.max(1);
    let current = props.page.clamp(1, total);
    let on_change = props.on_change.clone();

    let go_prev = {
        let on_change = on_change.clone();
        Callback::from(move |_| {
            if current > 1 {
                on_change.emit(current - 1);
            }
        })
    };
    let go_next = Callback::from(move |_| {
        if current < total {
            on_change.emit(current + 1);
        }
    });

    html! {
        <div class={classes!("join", "pagination", props.class.clone())}>
            <button class="btn join-item" disabled={current <= 1} onclick={go_prev}>{"«"}</button>
            <button class="btn join-item">{format!("Page {current} / {total}")}</button>
            <button class="btn join-item" disabled={current >= total} onclick={go_next}>{"»"}</button>
        </div>
    }
}
