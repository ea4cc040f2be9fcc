// ============================================================================
// APP VIEW - COMPONENTE PRINCIPAL
// ============================================================================
// Proveedores de contexto (sesión, empresas, toasts) y navegación por estado.
// La pantalla pedida pasa siempre por la guardia de autenticación.
// ============================================================================

use yew::prelude::*;

use crate::hooks::{use_auth, AuthProvider, CompaniesProvider, ToastProvider};
use crate::viewmodels::{resolve_screen, AuthTab, Screen};
use crate::views::auth::{AuthView, VerificationView};
use crate::views::company_setup::CompanySetup;
use crate::views::dashboard::DashboardView;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <AuthProvider>
            <CompaniesProvider>
                <ToastProvider>
                    <AppRouter />
                </ToastProvider>
            </CompaniesProvider>
        </AuthProvider>
    }
}

#[function_component(AppRouter)]
fn app_router() -> Html {
    let auth = use_auth();
    let requested = use_state(Screen::default);

    let screen = resolve_screen(&auth.session, &requested);
    if screen != *requested {
        log::debug!("🔀 Redirección {:?} -> {:?}", *requested, screen);
    }

    let navigate = {
        let requested = requested.clone();
        move |target: Screen| {
            let requested = requested.clone();
            Callback::from(move |_: ()| requested.set(target.clone()))
        }
    };

    match screen {
        Screen::Auth(tab) => {
            let on_tab_change = {
                let requested = requested.clone();
                Callback::from(move |tab: AuthTab| requested.set(Screen::Auth(tab)))
            };
            let on_registered = {
                let requested = requested.clone();
                Callback::from(move |email: String| requested.set(Screen::Verify { email }))
            };
            html! { <AuthView {tab} {on_tab_change} {on_registered} /> }
        }
        Screen::Verify { email } => {
            // Un email nuevo remonta el formulario de verificación
            let key = email.clone();
            html! {
                <VerificationView
                    key={key}
                    email={email}
                    on_success={navigate(Screen::Auth(AuthTab::Login))}
                />
            }
        }
        Screen::Dashboard => html! {
            <DashboardView
                on_create_company={navigate(Screen::CompanySetup)}
                on_signed_out={navigate(Screen::Auth(AuthTab::Login))}
            />
        },
        Screen::CompanySetup => html! {
            <CompanySetup
                on_created={navigate(Screen::Dashboard)}
                on_cancel={navigate(Screen::Dashboard)}
            />
        },
    }
}
