use yew::prelude::*;

use crate::hooks::{use_auth, use_toast};
use crate::utils::FieldErrors;
use crate::viewmodels::RegisterForm;
use crate::views::shared::FormField;

#[derive(Properties, PartialEq)]
pub struct RegisterViewProps {
    /// Recibe el email del registro pendiente
    pub on_registered: Callback<String>,
}

#[function_component(RegisterView)]
pub fn register_view(props: &RegisterViewProps) -> Html {
    let auth = use_auth();
    let toast = use_toast();
    let form = use_state(RegisterForm::default);
    let errors = use_state(FieldErrors::default);

    let update = {
        let form = form.clone();
        move |apply: fn(&mut RegisterForm, String)| {
            let form = form.clone();
            Callback::from(move |value: String| {
                let mut next = (*form).clone();
                apply(&mut next, value);
                form.set(next);
            })
        }
    };

    let on_submit = {
        let form = form.clone();
        let errors = errors.clone();
        let on_registered = props.on_registered.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            // Sin llamada al store si el formulario no es válido
            let submission = match form.validate() {
                Ok(submission) => submission,
                Err(field_errors) => {
                    errors.set(field_errors);
                    return;
                }
            };
            errors.set(FieldErrors::default());

            match auth.sign_up(&submission.name, &submission.email, &submission.password) {
                Ok(pending) => {
                    toast.success(
                        "Registro exitoso",
                        "Se ha enviado un código de verificación a su correo electrónico",
                    );
                    on_registered.emit(pending.email);
                }
                Err(e) => {
                    log::error!("❌ Error en registro: {}", e);
                    toast.error(
                        "Error en el registro",
                        "No se pudo completar el registro. Intente nuevamente.",
                    );
                }
            }
        })
    };

    let error = |field: &str| errors.get(field).map(str::to_string);

    html! {
        <form class="register-form" onsubmit={on_submit}>
            <FormField
                id="register-name"
                label="Nombre Completo"
                placeholder="Juan Pérez"
                value={form.name.clone()}
                oninput={update(|form, value| form.name = value)}
                error={error("name")}
            />
            <FormField
                id="register-email"
                label="Correo Electrónico"
                placeholder="correo@ejemplo.com"
                value={form.email.clone()}
                oninput={update(|form, value| form.email = value)}
                error={error("email")}
            />
            <FormField
                id="register-password"
                label="Contraseña"
                input_type="password"
                placeholder="••••••••"
                value={form.password.clone()}
                oninput={update(|form, value| form.password = value)}
                error={error("password")}
            />
            <FormField
                id="register-confirm-password"
                label="Confirmar Contraseña"
                input_type="password"
                placeholder="••••••••"
                value={form.confirm_password.clone()}
                oninput={update(|form, value| form.confirm_password = value)}
                error={error("confirm_password")}
            />
            <button type="submit" class="btn-primary">{"Registrarse"}</button>
        </form>
    }
}
