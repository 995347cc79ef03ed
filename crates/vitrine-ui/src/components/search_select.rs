//! Search-select (combo-box) component.
//!
//! # Design
//! - Items and selection are controlled by props; only the typed query and open flag are local.
//! - Options and transitions come from [`crate::core::selection::SearchSelect`].

use crate::components::highlighted;
use crate::core::selection::{Item, SearchSelect, SelectionState, display_value};
use tracing::error;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SearchSelectProps {
    #[prop_or_default]
    pub items: Vec<Item>,
    pub selected: SelectionState,
    #[prop_or_default]
    pub allow_custom_value: bool,
    #[prop_or_default]
    pub allow_deselect: bool,
    #[prop_or_default]
    pub loading: bool,
    #[prop_or(AttrValue::Static("Rechercher..."))]
    pub placeholder: AttrValue,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub class: Classes,
    pub on_change: Callback<SelectionState>,
}

#[function_component(SearchSelectView)]
pub fn search_select_view(props: &SearchSelectProps) -> Html {
    let query = use_state(String::new);
    let open = use_state(|| false);

    let engine = {
        let on_change = props.on_change.clone();
        SearchSelect::builder()
            .multi(props.selected.is_multi())
            .allow_custom_value(props.allow_custom_value)
            .allow_deselect(props.allow_deselect)
            .on_change(move |state| on_change.emit(state))
            .build()
    };
    let engine = match engine {
        Ok(engine) => engine,
        Err(err) => {
            error!(error = %err, "search select misconfigured");
            return html! {};
        }
    };

    let view = engine.view(&props.items, &query, &props.selected, props.loading);

    let oninput = {
        let query = query.clone();
        let open = open.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                query.set(input.value());
                open.set(true);
            }
        })
    };
    let onfocus = {
        let open = open.clone();
        Callback::from(move |_: FocusEvent| open.set(true))
    };
    let onclose = {
        let open = open.clone();
        let query = query.clone();
        Callback::from(move |_: MouseEvent| {
            open.set(false);
            query.set(String::new());
        })
    };

    let input_value = if *open {
        (*query).clone()
    } else {
        display_value(&props.selected)
    };

    let render_option = |item: &Item| {
        let is_custom = view.custom().is_some_and(|custom| custom == item);
        let chosen = props.selected.contains(&item.id);
        let onclick = {
            let engine = engine.clone();
            let selected = props.selected.clone();
            let candidate = item.clone();
            let loading = props.loading;
            let open = open.clone();
            let query = query.clone();
            Callback::from(move |_: MouseEvent| {
                engine.choose(&selected, &candidate, loading);
                if !engine.is_multi() {
                    open.set(false);
                    query.set(String::new());
                }
            })
        };
        html! {
            <li class={classes!(item.disabled.then_some("disabled"))}>
                <button
                    type="button"
                    class={classes!(chosen.then_some("active"))}
                    disabled={item.disabled}
                    onclick={onclick}
                >
                    if engine.is_multi() {
                        <input type="checkbox" class="checkbox checkbox-sm" checked={chosen} readonly={true} />
                    }
                    if is_custom {
                        <span class="italic">{format!("« {} »", item.label)}</span>
                    } else {
                        {highlighted(&item.label, &query)}
                    }
                </button>
            </li>
        }
    };

    html! {
        <div class={classes!("dropdown", "w-full", open.then_some("dropdown-open"), props.class.clone())}>
            <input
                type="search"
                class="input input-bordered w-full"
                id={props.id.clone()}
                placeholder={props.placeholder.clone()}
                disabled={props.disabled}
                value={input_value}
                oninput={oninput}
                onfocus={onfocus}
            />
            if *open {
                <ul class="dropdown-content menu bg-base-100 rounded-box shadow w-full max-h-64 overflow-y-auto z-10">
                    if props.loading {
                        <li class="disabled"><span class="loading loading-dots loading-sm"></span></li>
                    } else if view.is_empty() {
                        <li class="disabled"><span>{"Aucun résultat"}</span></li>
                    } else {
                        {for view.options.iter().map(render_option)}
                    }
                    <li><button type="button" class="btn btn-ghost btn-xs" onclick={onclose}>{"Fermer"}</button></li>
                </ul>
            }
        </div>
    }
}
