use yew::prelude::*;

use crate::hooks::{use_auth, use_toast};
use crate::utils::FieldErrors;
use crate::viewmodels::LoginForm;
use crate::views::shared::FormField;

#[function_component(LoginView)]
pub fn login_view() -> Html {
    let auth = use_auth();
    let toast = use_toast();
    let form = use_state(LoginForm::default);
    let errors = use_state(FieldErrors::default);

    let on_email = {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            next.email = value;
            form.set(next);
        })
    };

    let on_password = {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            next.password = value;
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        let errors = errors.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let (email, password) = match form.validate() {
                Ok(values) => values,
                Err(field_errors) => {
                    errors.set(field_errors);
                    return;
                }
            };
            errors.set(FieldErrors::default());

            // El AuthProvider re-renderiza y la guardia lleva al dashboard
            if auth.sign_in(&email, &password).is_err() {
                toast.error(
                    "Error de inicio de sesión",
                    "Correo o contraseña incorrectos. Intente nuevamente.",
                );
            }
        })
    };

    html! {
        <form class="login-form" onsubmit={on_submit}>
            <FormField
                id="login-email"
                label="Correo Electrónico"
                placeholder="correo@ejemplo.com"
                value={form.email.clone()}
                oninput={on_email}
                error={errors.get("email").map(str::to_string)}
            />
            <FormField
                id="login-password"
                label="Contraseña"
                input_type="password"
                placeholder="••••••••"
                value={form.password.clone()}
                oninput={on_password}
                error={errors.get("password").map(str::to_string)}
            />
            <button type="submit" class="btn-primary">{"Iniciar Sesión"}</button>
        </form>
    }
}
