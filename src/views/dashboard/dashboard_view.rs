use yew::prelude::*;

use crate::hooks::{use_auth, use_companies, use_toast};
use crate::viewmodels::{resolve_selection, DashboardView as Selection};
use crate::views::dashboard::{CompanyDashboard, CompanySelector, NoCompany};
use crate::views::shared::Sidebar;

#[derive(Properties, PartialEq)]
pub struct DashboardViewProps {
    pub on_create_company: Callback<()>,
    pub on_signed_out: Callback<()>,
}

/// Shell del dashboard: sidebar, cabecera con usuario y empresa activa
#[function_component(DashboardView)]
pub fn dashboard_view(props: &DashboardViewProps) -> Html {
    let auth = use_auth();
    let companies = use_companies();
    let toast = use_toast();
    let selected_id = use_state(|| None::<String>);

    let on_select = {
        let selected_id = selected_id.clone();
        Callback::from(move |id: String| selected_id.set(Some(id)))
    };

    let on_sign_out = {
        let auth = auth.clone();
        let on_signed_out = props.on_signed_out.clone();
        Callback::from(move |_: MouseEvent| {
            auth.sign_out();
            toast.success("Sesión cerrada", "Ha cerrado sesión correctamente");
            on_signed_out.emit(());
        })
    };

    let display_name = auth
        .identity()
        .map(|identity| identity.display_name().to_string())
        .unwrap_or_default();

    let selection = resolve_selection(&companies.companies, selected_id.as_deref());

    html! {
        <div class="dashboard-layout">
            <Sidebar />
            <div class="dashboard-main">
                <header class="dashboard-header">
                    if let Selection::Selected(company) = &selection {
                        <CompanySelector
                            companies={companies.companies.clone()}
                            selected={company.clone()}
                            {on_select}
                            on_create={props.on_create_company.clone()}
                        />
                    }
                    <div class="user-menu">
                        <span class="user-name">{display_name}</span>
                        <button class="btn-secondary" onclick={on_sign_out}>{"Cerrar sesión"}</button>
                    </div>
                </header>
                <main class="dashboard-content">
                    {
                        match selection {
                            Selection::NoCompany => html! {
                                <NoCompany on_create={props.on_create_company.clone()} />
                            },
                            Selection::Selected(company) => html! {
                                <CompanyDashboard {company} />
                            },
                        }
                    }
                </main>
            </div>
        </div>
    }
}
