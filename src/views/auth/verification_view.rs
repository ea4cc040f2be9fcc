use yew::prelude::*;

use crate::hooks::{use_auth, use_toast};
use crate::utils::FieldErrors;
use crate::viewmodels::VerificationForm;
use crate::views::shared::FormField;

#[derive(Properties, PartialEq)]
pub struct VerificationViewProps {
    pub email: AttrValue,
    pub on_success: Callback<()>,
}

#[function_component(VerificationView)]
pub fn verification_view(props: &VerificationViewProps) -> Html {
    let auth = use_auth();
    let toast = use_toast();
    let form = {
        let email = props.email.clone();
        use_state(move || VerificationForm::for_email(&email))
    };
    let errors = use_state(FieldErrors::default);

    let on_code = {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            next.code = value;
            form.set(next);
        })
    };

    let on_submit = {
        let auth = auth.clone();
        let toast = toast.clone();
        let form = form.clone();
        let errors = errors.clone();
        let on_success = props.on_success.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let (email, code) = match form.validate() {
                Ok(values) => values,
                Err(field_errors) => {
                    errors.set(field_errors);
                    return;
                }
            };
            errors.set(FieldErrors::default());

            match auth.confirm_sign_up(&email, &code) {
                Ok(()) => {
                    toast.success(
                        "Verificación exitosa",
                        "Su cuenta ha sido verificada. Puede iniciar sesión ahora.",
                    );
                    on_success.emit(());
                }
                Err(e) => {
                    log::error!("❌ Error confirmando registro: {}", e);
                    toast.error(
                        "Error de verificación",
                        "Código inválido o expirado. Intente nuevamente.",
                    );
                }
            }
        })
    };

    let on_resend = {
        let email = props.email.clone();
        Callback::from(move |_: MouseEvent| match auth.resend_confirmation_code(&email) {
            Ok(_) => toast.success("Código reenviado", "Revise su correo electrónico"),
            Err(e) => {
                log::error!("❌ Error reenviando código: {}", e);
                toast.error("Error", "No se pudo reenviar el código. Intente nuevamente.");
            }
        })
    };

    html! {
        <form class="verification-form" onsubmit={on_submit}>
            <FormField
                id="verify-email"
                label="Correo Electrónico"
                value={form.email.clone()}
                oninput={Callback::noop()}
                error={errors.get("email").map(str::to_string)}
                disabled={true}
            />
            <FormField
                id="verify-code"
                label="Código de Verificación"
                placeholder="123456"
                value={form.code.clone()}
                oninput={on_code}
                error={errors.get("code").map(str::to_string)}
            />
            <button type="submit" class="btn-primary">{"Verificar Cuenta"}</button>
            <button type="button" class="btn-link" onclick={on_resend}>{"Reenviar código"}</button>
        </form>
    }
}
