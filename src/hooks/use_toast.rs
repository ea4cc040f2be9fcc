use yew::prelude::*;

use crate::state::{ToastAction, ToastState};
use crate::views::shared::ToastViewport;

#[derive(Clone, PartialEq)]
pub struct UseToastHandle {
    dispatcher: UseReducerDispatcher<ToastState>,
}

impl UseToastHandle {
    pub fn success(&self, title: &str, description: &str) {
        self.dispatcher.dispatch(ToastAction::success(title, description));
    }

    pub fn error(&self, title: &str, description: &str) {
        self.dispatcher.dispatch(ToastAction::error(title, description));
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let state = use_reducer(ToastState::default);
    let handle = UseToastHandle {
        dispatcher: state.dispatcher(),
    };

    let on_dismiss = {
        let dispatcher = state.dispatcher();
        Callback::from(move |id: u32| dispatcher.dispatch(ToastAction::Dismiss(id)))
    };

    html! {
        <ContextProvider<UseToastHandle> context={handle}>
            {props.children.clone()}
            <ToastViewport toasts={state.toasts.clone()} {on_dismiss} />
        </ContextProvider<UseToastHandle>>
    }
}

#[hook]
pub fn use_toast() -> UseToastHandle {
    use_context::<UseToastHandle>().expect("use_toast debe usarse dentro de ToastProvider")
}
