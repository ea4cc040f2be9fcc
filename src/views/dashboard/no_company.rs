use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NoCompanyProps {
    pub on_create: Callback<()>,
}

#[function_component(NoCompany)]
pub fn no_company(props: &NoCompanyProps) -> Html {
    html! {
        <div class="no-company">
            <div class="no-company-icon">{"🏢"}</div>
            <h2>{"No tiene empresas registradas"}</h2>
            <p>{"Registre su primera empresa para comenzar a gestionar su flota."}</p>
            <button class="btn-primary" onclick={props.on_create.reform(|_| ())}>
                {"Crear empresa"}
            </button>
        </div>
    }
}
