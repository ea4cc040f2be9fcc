use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

use crate::hooks::{use_auth, use_companies, use_toast};
use crate::utils::FieldErrors;
use crate::viewmodels::CompanyForm;
use crate::views::shared::FormField;

const CREATED_TITLE: &str = "Empresa creada";
const CREATED_DESCRIPTION: &str = "Su empresa ha sido creada correctamente";
const FAILED_TITLE: &str = "Error al crear la empresa";
const FAILED_DESCRIPTION: &str = "No se pudo crear la empresa. Intente nuevamente.";

#[derive(Properties, PartialEq)]
pub struct CompanySetupProps {
    pub on_created: Callback<()>,
    pub on_cancel: Callback<()>,
}

/// Alta de empresa
#[function_component(CompanySetup)]
pub fn company_setup(props: &CompanySetupProps) -> Html {
    let auth = use_auth();
    let companies = use_companies();
    let toast = use_toast();
    let form = use_state(CompanyForm::default);
    let errors = use_state(FieldErrors::default);

    let update = {
        let form = form.clone();
        move |apply: fn(&mut CompanyForm, String)| {
            let form = form.clone();
            Callback::from(move |value: String| {
                let mut next = (*form).clone();
                apply(&mut next, value);
                form.set(next);
            })
        }
    };

    let on_description = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.description = textarea.value();
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        let errors = errors.clone();
        let on_created = props.on_created.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let data = match form.validate() {
                Ok(data) => data,
                Err(field_errors) => {
                    errors.set(field_errors);
                    return;
                }
            };
            errors.set(FieldErrors::default());

            let Some(identity) = auth.identity() else {
                log::warn!("⚠️ Alta de empresa sin sesión activa");
                return;
            };

            match companies.create_company(identity, data) {
                Ok(company) => {
                    log::info!("🏢 Empresa registrada: {}", company.name);
                    toast.success(CREATED_TITLE, CREATED_DESCRIPTION);
                    on_created.emit(());
                }
                Err(e) => {
                    log::error!("❌ Error creando empresa: {}", e);
                    toast.error(FAILED_TITLE, FAILED_DESCRIPTION);
                }
            }
        })
    };

    let error = |field: &str| errors.get(field).map(str::to_string);

    html! {
        <div class="company-setup">
            <div class="card">
                <div class="card-header">
                    <h2 class="card-title">{"Registrar Empresa"}</h2>
                    <p class="card-description">
                        {"Ingrese los datos de su empresa de transporte"}
                    </p>
                </div>
                <form class="card-content company-form" onsubmit={on_submit}>
                    <FormField
                        id="company-name"
                        label="Nombre de la Empresa"
                        placeholder="Transportes XYZ"
                        value={form.name.clone()}
                        oninput={update(|form, value| form.name = value)}
                        error={error("name")}
                    />
                    <FormField
                        id="company-nit"
                        label="NIT"
                        placeholder="900.123.456-7"
                        value={form.nit.clone()}
                        oninput={update(|form, value| form.nit = value)}
                        error={error("nit")}
                    />
                    <FormField
                        id="company-email"
                        label="Correo Electrónico"
                        placeholder="contacto@empresa.com"
                        value={form.email.clone()}
                        oninput={update(|form, value| form.email = value)}
                        error={error("email")}
                    />
                    <FormField
                        id="company-phone"
                        label="Teléfono"
                        placeholder="(601) 123-4567"
                        value={form.phone.clone()}
                        oninput={update(|form, value| form.phone = value)}
                        error={error("phone")}
                    />
                    <FormField
                        id="company-address"
                        label="Dirección"
                        placeholder="Calle 123 #45-67, Bogotá"
                        value={form.address.clone()}
                        oninput={update(|form, value| form.address = value)}
                        error={error("address")}
                    />
                    <div class="form-group">
                        <label for="company-description">{"Descripción (opcional)"}</label>
                        <textarea
                            id="company-description"
                            placeholder="Breve descripción de su empresa"
                            value={form.description.clone()}
                            oninput={on_description}
                        />
                    </div>
                    <div class="form-actions">
                        <button
                            type="button"
                            class="btn-secondary"
                            onclick={props.on_cancel.reform(|_| ())}
                        >
                            {"Cancelar"}
                        </button>
                        <button type="submit" class="btn-primary">{"Crear Empresa"}</button>
                    </div>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{ToastAction, ToastKind, ToastState};
    use std::rc::Rc;
    use yew::Reducible;

    #[test]
    fn test_creation_toasts_use_company_setup_texts() {
        let state = Rc::new(ToastState::default())
            .reduce(ToastAction::success(CREATED_TITLE, CREATED_DESCRIPTION))
            .reduce(ToastAction::error(FAILED_TITLE, FAILED_DESCRIPTION));

        assert_eq!(state.toasts[0].kind, ToastKind::Success);
        assert_eq!(state.toasts[0].title, "Empresa creada");
        assert_eq!(state.toasts[0].description, "Su empresa ha sido creada correctamente");
        assert_eq!(state.toasts[1].kind, ToastKind::Error);
        assert_eq!(state.toasts[1].title, "Error al crear la empresa");
        assert_eq!(
            state.toasts[1].description,
            "No se pudo crear la empresa. Intente nuevamente."
        );
    }
}
