use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::models::Company;
use crate::viewmodels::filter_companies;

#[derive(Properties, PartialEq)]
pub struct CompanySelectorProps {
    pub companies: Vec<Company>,
    pub selected: Company,
    pub on_select: Callback<String>,
    pub on_create: Callback<()>,
}

/// Desplegable de empresas con búsqueda por nombre
#[function_component(CompanySelector)]
pub fn company_selector(props: &CompanySelectorProps) -> Html {
    let open = use_state(|| false);
    let search_term = use_state(String::new);

    let on_toggle = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(!*open))
    };

    let on_search = {
        let search_term = search_term.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            search_term.set(input.value());
        })
    };

    let on_create = {
        let open = open.clone();
        let on_create = props.on_create.clone();
        Callback::from(move |_: MouseEvent| {
            open.set(false);
            on_create.emit(());
        })
    };

    let filtered = filter_companies(&props.companies, &search_term);

    html! {
        <div class="company-selector">
            <button type="button" class="company-selector-trigger" onclick={on_toggle}>
                <span class="company-name">{&props.selected.name}</span>
                <span class="chevron">{ if *open { "▲" } else { "▼" } }</span>
            </button>
            if *open {
                <div class="company-selector-popover">
                    <input
                        type="text"
                        class="company-search"
                        placeholder="Buscar empresa..."
                        value={(*search_term).clone()}
                        oninput={on_search}
                    />
                    <div class="company-list">
                        if filtered.is_empty() {
                            <div class="company-empty">{"No se encontraron empresas"}</div>
                        } else {
                            { for filtered.iter().map(|company| {
                                let id = company.id.clone();
                                let open = open.clone();
                                let on_select = props.on_select.clone();
                                let class = classes!(
                                    "company-item",
                                    (company.id == props.selected.id).then_some("selected")
                                );
                                html! {
                                    <div
                                        {class}
                                        onclick={Callback::from(move |_: MouseEvent| {
                                            open.set(false);
                                            on_select.emit(id.clone());
                                        })}
                                    >
                                        <div class="company-name">{&company.name}</div>
                                        <div class="company-code">{&company.tax_id}</div>
                                    </div>
                                }
                            }) }
                        }
                    </div>
                    <button type="button" class="company-create" onclick={on_create}>
                        {"+ Crear empresa"}
                    </button>
                </div>
            }
        </div>
    }
}
