//! Modal host for confirmation and input dialogs.
//!
//! # Design
//! - Owns the [`DialogHost`] queue and drains the inbox paired with the app's
//!   [`crate::core::dialogs::DialogHandle`].
//! - The input value is local; a required, blank submission keeps the modal open with a hint.

use std::cell::RefCell;
use std::rc::Rc;

use crate::core::dialogs::{DialogHost, DialogInbox, DialogTone};
use crate::error::UiError;
use gloo::timers::callback::Interval;
use yew::prelude::*;

const POLL_MS: u32 = 100;

#[derive(Properties)]
pub struct DialogHostProps {
    pub inbox: Rc<RefCell<DialogInbox>>,
    #[prop_or_default]
    pub class: Classes,
}

impl PartialEq for DialogHostProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inbox, &other.inbox) && self.class == other.class
    }
}

const fn confirm_button_class(tone: DialogTone) -> &'static str {
    match tone {
        DialogTone::Danger => "btn-error",
        DialogTone::Warning => "btn-warning",
        DialogTone::Info => "btn-info",
    }
}

#[function_component(DialogHostView)]
pub fn dialog_host_view(props: &DialogHostProps) -> Html {
    let host = use_mut_ref(DialogHost::new);
    let value = use_state(String::new);
    let missing = use_state(|| false);
    let refresh = use_force_update();

    {
        let host = host.clone();
        let value = value.clone();
        let refresh = refresh.clone();
        use_effect_with_deps(
            move |inbox: &Rc<RefCell<DialogInbox>>| {
                let inbox = Rc::clone(inbox);
                let interval = Interval::new(POLL_MS, move || {
                    let mut host = host.borrow_mut();
                    let was_empty = host.is_empty();
                    if host.absorb(&mut inbox.borrow_mut()) > 0 && was_empty {
                        let seed = host
                            .current()
                            .and_then(|request| request.input())
                            .map(|options| options.default_value.clone())
                            .unwrap_or_default();
                        value.set(seed);
                        refresh.force_update();
                    }
                });
                move || drop(interval)
            },
            Rc::clone(&props.inbox),
        );
    }

    let Some(request) = host.borrow().current().cloned() else {
        return html! {};
    };

    let advance = {
        let host = host.clone();
        let value = value.clone();
        let missing = missing.clone();
        let refresh = refresh.clone();
        move || {
            let next_seed = host
                .borrow()
                .current()
                .and_then(|request| request.input())
                .map(|options| options.default_value.clone())
                .unwrap_or_default();
            value.set(next_seed);
            missing.set(false);
            refresh.force_update();
        }
    };

    let on_cancel = {
        let host = host.clone();
        let advance = advance.clone();
        Callback::from(move |_: MouseEvent| {
            if host.borrow_mut().cancel() {
                advance();
            }
        })
    };
    let on_confirm = {
        let host = host.clone();
        let value = value.clone();
        let missing = missing.clone();
        Callback::from(move |_: MouseEvent| {
            let result = host.borrow_mut().submit(&value);
            match result {
                Ok(true) => advance(),
                Ok(false) => {}
                Err(UiError::InputRequired) => missing.set(true),
                Err(err) => tracing::warn!(error = %err, "dialog submission failed"),
            }
        })
    };
    let oninput = {
        let value = value.clone();
        let missing = missing.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                value.set(input.value());
                missing.set(false);
            }
        })
    };

    html! {
        <div class={classes!("modal", "modal-open", props.class.clone())} role="dialog" aria-modal="true">
            <div class={classes!("modal-box", format!("dialog-{}", request.tone.as_str()))}>
                <h3 class="font-bold text-lg">{request.title.clone()}</h3>
                <p class="py-4">{request.message.clone()}</p>
                if let Some(options) = request.input() {
                    <input
                        type="text"
                        class={classes!("input", "input-bordered", "w-full", missing.then_some("input-error"))}
                        placeholder={options.placeholder.clone()}
                        value={(*value).clone()}
                        oninput={oninput}
                    />
                    if *missing {
                        <p class="text-error text-sm mt-1">{UiError::InputRequired.to_string()}</p>
                    }
                }
                <div class="modal-action">
                    <button class="btn" onclick={on_cancel}>{request.cancel_label.clone()}</button>
                    <button class={classes!("btn", confirm_button_class(request.tone))} onclick={on_confirm}>
                        {request.confirm_label.clone()}
                    </button>
                </div>
            </div>
        </div>
    }
}
