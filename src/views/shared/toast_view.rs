use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::CONFIG;
use crate::state::{Toast, ToastKind};

#[derive(Properties, PartialEq)]
pub struct ToastViewportProps {
    pub toasts: Vec<Toast>,
    pub on_dismiss: Callback<u32>,
}

#[function_component(ToastViewport)]
pub fn toast_viewport(props: &ToastViewportProps) -> Html {
    html! {
        <div class="toast-viewport">
            { for props.toasts.iter().map(|toast| html! {
                <ToastItem key={toast.id.to_string()} toast={toast.clone()} on_dismiss={props.on_dismiss.clone()} />
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: Toast,
    on_dismiss: Callback<u32>,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    // Auto-cierre; si el toast se desmonta antes, el Timeout se cancela al soltarlo
    {
        let id = props.toast.id;
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with(id, move |_| {
            let timeout = Timeout::new(CONFIG.ui_config.toast_duration_ms, move || {
                on_dismiss.emit(id)
            });
            move || drop(timeout)
        });
    }

    let class = match props.toast.kind {
        ToastKind::Success => "toast",
        ToastKind::Error => "toast toast-destructive",
    };
    let id = props.toast.id;

    html! {
        <div {class} role="status">
            <div class="toast-body">
                <div class="toast-title">{&props.toast.title}</div>
                <div class="toast-description">{&props.toast.description}</div>
            </div>
            <button class="btn-close" onclick={props.on_dismiss.reform(move |_| id)}>{"✕"}</button>
        </div>
    }
}
