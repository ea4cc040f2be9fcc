use yew::prelude::*;

use crate::viewmodels::AuthTab;
use crate::views::auth::{LoginView, RegisterView};

#[derive(Properties, PartialEq)]
pub struct AuthViewProps {
    pub tab: AuthTab,
    pub on_tab_change: Callback<AuthTab>,
    pub on_registered: Callback<String>,
}

/// Pantalla de acceso: pestañas de login y registro
#[function_component(AuthView)]
pub fn auth_view(props: &AuthViewProps) -> Html {
    let tab_button = |tab: AuthTab, label: &'static str| {
        let class = classes!("tab-trigger", (props.tab == tab).then_some("active"));
        html! {
            <button type="button" {class} onclick={props.on_tab_change.reform(move |_| tab)}>
                {label}
            </button>
        }
    };

    html! {
        <AuthLayout title="Bienvenido" subtitle="Administre su flota de buses con facilidad">
            <div class="tabs-list">
                { tab_button(AuthTab::Login, "Iniciar Sesión") }
                { tab_button(AuthTab::Register, "Registrarse") }
            </div>
            {
                match props.tab {
                    AuthTab::Login => html! { <LoginView /> },
                    AuthTab::Register => html! {
                        <RegisterView on_registered={props.on_registered.clone()} />
                    },
                }
            }
        </AuthLayout>
    }
}

#[derive(Properties, PartialEq)]
pub struct AuthLayoutProps {
    pub title: AttrValue,
    pub subtitle: AttrValue,
    pub children: Children,
}

/// Marco común de las pantallas de acceso (logo + tarjeta)
#[function_component(AuthLayout)]
pub fn auth_layout(props: &AuthLayoutProps) -> Html {
    html! {
        <div class="auth-screen">
            <div class="auth-container">
                <div class="auth-brand">
                    <div class="logo-icon">{"🚌"}</div>
                    <h1>{"Routify"}</h1>
                    <p>{"Gestión de flotas de buses privados"}</p>
                </div>
                <div class="card">
                    <div class="card-header">
                        <h2 class="card-title">{props.title.clone()}</h2>
                        <p class="card-description">{props.subtitle.clone()}</p>
                    </div>
                    <div class="card-content">
                        {props.children.clone()}
                    </div>
                    <div class="card-footer">
                        <p>{"Routify - La solución integral para empresas de transporte"}</p>
                    </div>
                </div>
            </div>
        </div>
    }
}
