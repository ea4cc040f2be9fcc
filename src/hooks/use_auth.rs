// ============================================================================
// USE AUTH - Contexto de sesión compartido por toda la app
// ============================================================================
// El AuthProvider crea el SessionStore una sola vez y re-renderiza cuando el
// store notifica un cambio de sesión.
// ============================================================================

use std::rc::Rc;

use yew::prelude::*;

use crate::error::{InvalidCodeError, InvalidCredentialsError, RegistrationError};
use crate::models::{Identity, PendingRegistration, Session};
use crate::state::SessionStore;

#[derive(Clone)]
pub struct UseAuthHandle {
    pub session: Session,
    store: Rc<SessionStore>,
}

impl PartialEq for UseAuthHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store) && self.session == other.session
    }
}

impl UseAuthHandle {
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.session.identity()
    }

    pub fn sign_up(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<PendingRegistration, RegistrationError> {
        self.store.sign_up(name, email, password)
    }

    pub fn confirm_sign_up(&self, email: &str, code: &str) -> Result<(), InvalidCodeError> {
        self.store.confirm_sign_up(email, code)
    }

    pub fn resend_confirmation_code(
        &self,
        email: &str,
    ) -> Result<PendingRegistration, InvalidCodeError> {
        self.store.resend_confirmation_code(email)
    }

    pub fn sign_in(&self, email: &str, password: &str) -> Result<Identity, InvalidCredentialsError> {
        self.store.sign_in(email, password)
    }

    pub fn sign_out(&self) {
        self.store.sign_out();
    }
}

#[derive(Properties, PartialEq)]
pub struct AuthProviderProps {
    pub children: Children,
}

#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let store = use_memo((), |_| SessionStore::browser());
    let session = use_state({
        let store = store.clone();
        move || store.session()
    });

    {
        let store = store.clone();
        let session = session.clone();
        use_effect_with((), move |_| {
            let id = store.subscribe(move |new_session| session.set(new_session.clone()));
            move || store.unsubscribe(id)
        });
    }

    let handle = UseAuthHandle {
        session: (*session).clone(),
        store,
    };

    html! {
        <ContextProvider<UseAuthHandle> context={handle}>
            {props.children.clone()}
        </ContextProvider<UseAuthHandle>>
    }
}

/// Acceso a la sesión. Debe usarse dentro de `AuthProvider`.
#[hook]
pub fn use_auth() -> UseAuthHandle {
    use_context::<UseAuthHandle>().expect("use_auth debe usarse dentro de AuthProvider")
}
