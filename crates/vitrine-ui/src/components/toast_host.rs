//! Toast stack host.
//!
//! # Design
//! - Owns the [`ToastCenter`] and drains the inbox paired with the app's [`crate::core::toast::Notifier`].
//! - A single interval both absorbs new requests and expires old ones.

use std::cell::RefCell;
use std::rc::Rc;

use crate::components::now_ms;
use crate::config::ToastConfig;
use crate::core::toast::{Toast, ToastCenter, ToastInbox};
use gloo::timers::callback::Interval;
use yew::prelude::*;

const POLL_MS: u32 = 200;

#[derive(Properties)]
pub struct ToastHostProps {
    pub inbox: Rc<RefCell<ToastInbox>>,
    #[prop_or_default]
    pub config: ToastConfig,
    #[prop_or_default]
    pub class: Classes,
}

impl PartialEq for ToastHostProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inbox, &other.inbox)
            && self.config == other.config
            && self.class == other.class
    }
}

#[function_component(ToastHostView)]
pub fn toast_host_view(props: &ToastHostProps) -> Html {
    let center = use_mut_ref({
        let config = props.config.clone();
        move || ToastCenter::new(config)
    });
    let refresh = use_force_update();

    {
        let center = center.clone();
        let refresh = refresh.clone();
        use_effect_with_deps(
            move |inbox: &Rc<RefCell<ToastInbox>>| {
                let inbox = Rc::clone(inbox);
                let interval = Interval::new(POLL_MS, move || {
                    let now = now_ms();
                    let mut center = center.borrow_mut();
                    let added = center.absorb(&mut inbox.borrow_mut(), now);
                    let expired = center.expire(now);
                    if added > 0 || !expired.is_empty() {
                        refresh.force_update();
                    }
                });
                move || drop(interval)
            },
            Rc::clone(&props.inbox),
        );
    }

    let on_dismiss = {
        let center = center.clone();
        Callback::from(move |id: u64| {
            if center.borrow_mut().dismiss(id) {
                refresh.force_update();
            }
        })
    };

    let toasts: Vec<Toast> = center.borrow().active().cloned().collect();
    html! {
        <div class={classes!("toast", "toast-end", "toast-top", props.class.clone())} aria-live="polite" aria-atomic="true">
            {for toasts.iter().map(|toast| render_toast(toast, on_dismiss.clone()))}
        </div>
    }
}

fn render_toast(toast: &Toast, on_dismiss: Callback<u64>) -> Html {
    let id = toast.id;
    let on_close = Callback::from(move |_| on_dismiss.emit(id));
    html! {
        <div class={classes!("alert", format!("alert-{}", toast.kind.as_str()))} role="status">
            <span>{toast.message.clone()}</span>
            <button class="btn btn-ghost btn-xs" aria-label="Fermer" onclick={on_close}>{"✕"}</button>
        </div>
    }
}
