//! File drop target.

use crate::core::drop_zone::DropZoneState;
use web_sys::{DragEvent, File};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DropZoneProps {
    #[prop_or_default]
    pub multiple: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub on_drop: Callback<Vec<File>>,
}

fn dropped_files(event: &DragEvent) -> Vec<File> {
    let Some(list) = event.data_transfer().and_then(|transfer| transfer.files()) else {
        return Vec::new();
    };
    (0..list.length()).filter_map(|idx| list.item(idx)).collect()
}

#[function_component(DropZone)]
pub fn drop_zone(props: &DropZoneProps) -> Html {
    let state = use_state(DropZoneState::default);

    let ondragover = {
        let state = state.clone();
        Callback::from(move |event: DragEvent| {
            event.prevent_default();
            if !state.is_dragging() {
                let mut next = *state;
                next.drag_over();
                state.set(next);
            }
        })
    };
    let ondragleave = {
        let state = state.clone();
        Callback::from(move |_: DragEvent| {
            let mut next = *state;
            next.drag_leave();
            state.set(next);
        })
    };
    let ondrop = {
        let state = state.clone();
        let on_drop = props.on_drop.clone();
        let multiple = props.multiple;
        Callback::from(move |event: DragEvent| {
            event.prevent_default();
            let mut next = *state;
            let files = next.drop(dropped_files(&event), multiple);
            state.set(next);
            if !files.is_empty() {
                on_drop.emit(files);
            }
        })
    };

    html! {
        <div
            class={classes!("border-2", "rounded-box", "p-6", state.classes(), props.class.clone())}
            ondragover={ondragover}
            ondragleave={ondragleave}
            ondrop={ondrop}
        >
            { for props.children.iter() }
        </div>
    }
}
