// ============================================================================
// SESSION STORE - Estado de autenticación compartido por toda la UI
// ============================================================================
// Única pieza de estado que cruza componentes. Se lee y escribe solo desde
// el hilo de la UI; la identidad se persiste en una entrada de localStorage.
// ============================================================================

use crate::config::CONFIG;
use crate::error::{InvalidCodeError, InvalidCredentialsError, RegistrationError};
use crate::models::{Identity, PendingRegistration, Session};
use crate::services::{IdentityProvider, MockIdentityProvider};
use crate::state::reactivity::{ReactiveState, SubscriptionId};
use crate::utils::{
    load_from_storage, remove_from_storage, save_to_storage, BrowserStorage, KeyValueStorage,
    STORAGE_KEY_USER,
};

pub struct SessionStore {
    provider: Box<dyn IdentityProvider>,
    storage: Box<dyn KeyValueStorage>,
    session: ReactiveState<Session>,
}

impl SessionStore {
    /// Crear el store leyendo la identidad persistida (arranque / recarga)
    pub fn restore(
        provider: Box<dyn IdentityProvider>,
        storage: Box<dyn KeyValueStorage>,
    ) -> Self {
        let session = Self::load_session(storage.as_ref());
        Self {
            provider,
            storage,
            session: ReactiveState::new(session),
        }
    }

    /// Store del navegador: proveedor mock + localStorage
    pub fn browser() -> Self {
        Self::restore(
            Box::new(MockIdentityProvider::from_config(&CONFIG)),
            Box::new(BrowserStorage),
        )
    }

    fn load_session(storage: &dyn KeyValueStorage) -> Session {
        let raw = match storage.get_item(STORAGE_KEY_USER) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Session::Anonymous,
            Err(e) => {
                log::warn!("⚠️ No se pudo leer la sesión guardada: {}", e);
                return Session::Anonymous;
            }
        };

        match load_from_storage::<Identity>(storage, STORAGE_KEY_USER) {
            Some(identity) if identity.is_valid() => {
                log::info!("✅ Sesión restaurada: {}", identity.email());
                Session::Authenticated(identity)
            }
            _ => {
                log::warn!("⚠️ Sesión guardada corrupta, se descarta ({} bytes)", raw.len());
                if let Err(e) = remove_from_storage(storage, STORAGE_KEY_USER) {
                    log::error!("❌ Error eliminando sesión corrupta: {}", e);
                }
                Session::Anonymous
            }
        }
    }

    pub fn session(&self) -> Session {
        self.session.get()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session().is_authenticated()
    }

    pub fn identity(&self) -> Option<Identity> {
        self.session().identity().cloned()
    }

    /// Registrar cuenta. La validación del formulario ocurre antes, en el viewmodel.
    pub fn sign_up(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<PendingRegistration, RegistrationError> {
        log::info!("📝 Registro: {}", email);
        self.provider.sign_up(name, email, password)
    }

    pub fn confirm_sign_up(&self, email: &str, code: &str) -> Result<(), InvalidCodeError> {
        self.provider.confirm_sign_up(email, code)
    }

    pub fn resend_confirmation_code(
        &self,
        email: &str,
    ) -> Result<PendingRegistration, InvalidCodeError> {
        self.provider.resend_confirmation_code(email)
    }

    /// Login: autentica, persiste la identidad y notifica
    pub fn sign_in(&self, email: &str, password: &str) -> Result<Identity, InvalidCredentialsError> {
        let identity = match self.provider.authenticate(email, password) {
            Ok(identity) => identity,
            Err(e) => {
                log::error!("❌ Login fallido: {}", email);
                return Err(e);
            }
        };

        if let Err(e) = save_to_storage(self.storage.as_ref(), STORAGE_KEY_USER, &identity) {
            log::error!("❌ Error guardando sesión: {}", e);
        }

        log::info!("✅ Login exitoso: {}", identity.email());
        self.session.set(Session::Authenticated(identity.clone()));
        Ok(identity)
    }

    /// Logout: siempre tiene éxito
    pub fn sign_out(&self) {
        if let Err(e) = remove_from_storage(self.storage.as_ref(), STORAGE_KEY_USER) {
            log::warn!("⚠️ Error limpiando sesión guardada: {}", e);
        }
        log::info!("👋 Logout");
        self.session.set(Session::Anonymous);
    }

    /// Suscribirse a cambios de sesión
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&Session) + 'static,
    {
        self.session.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.session.unsubscribe(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorageError;
    use crate::services::PasswordPolicy;
    use crate::utils::MemoryStorage;
    use chrono::Duration;
    use std::cell::RefCell;
    use std::rc::Rc;

    const EMAIL: &str = "ana@routify.co";
    const PASSWORD: &str = "clave123";

    fn store_with(storage: Rc<MemoryStorage>) -> SessionStore {
        SessionStore::restore(Box::new(MockIdentityProvider::default()), Box::new(storage))
    }

    /// Store con una cuenta ya verificada
    fn store_with_account(storage: Rc<MemoryStorage>) -> SessionStore {
        let store = store_with(storage);
        let pending = store.sign_up("Ana", EMAIL, PASSWORD).unwrap();
        store.confirm_sign_up(EMAIL, &pending.verification_code).unwrap();
        store
    }

    /// Almacén que siempre falla (localStorage deshabilitado)
    struct BrokenStorage;

    impl KeyValueStorage for BrokenStorage {
        fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable)
        }
        fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }
        fn remove_item(&self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }
    }

    #[test]
    fn test_starts_anonymous_without_persisted_identity() {
        let store = store_with(Rc::new(MemoryStorage::new()));
        assert_eq!(store.session(), Session::Anonymous);
        assert!(store.identity().is_none());
    }

    #[test]
    fn test_sign_in_unregistered_email_fails() {
        let storage = Rc::new(MemoryStorage::new());
        let store = store_with(storage.clone());

        assert_eq!(store.sign_in("nadie@routify.co", PASSWORD), Err(InvalidCredentialsError));
        assert!(!store.is_authenticated());
        assert!(storage.is_empty());
    }

    #[test]
    fn test_sign_in_wrong_password_fails() {
        let store = store_with_account(Rc::new(MemoryStorage::new()));
        assert_eq!(store.sign_in(EMAIL, "otra1234"), Err(InvalidCredentialsError));
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_sign_in_before_confirmation_fails() {
        let store = store_with(Rc::new(MemoryStorage::new()));
        store.sign_up("Ana", EMAIL, PASSWORD).unwrap();
        assert_eq!(store.sign_in(EMAIL, PASSWORD), Err(InvalidCredentialsError));
    }

    #[test]
    fn test_sign_in_persists_across_reload() {
        let storage = Rc::new(MemoryStorage::new());
        let store = store_with_account(storage.clone());

        let identity = store.sign_in(EMAIL, PASSWORD).unwrap();
        assert!(store.is_authenticated());
        assert_eq!(identity.display_name(), "Ana");

        // Recarga simulada: nuevo store (y nuevo proveedor) sobre el mismo almacén
        let reloaded = store_with(storage);
        assert!(reloaded.is_authenticated());
        assert_eq!(reloaded.identity(), Some(identity));
    }

    #[test]
    fn test_mixed_case_email_signs_in_and_persists_normalized() {
        let storage = Rc::new(MemoryStorage::new());
        let store = store_with(storage.clone());
        let pending = store.sign_up("Ana", "  Ana@Routify.CO ", PASSWORD).unwrap();
        assert_eq!(pending.email, EMAIL);
        store
            .confirm_sign_up("ANA@routify.co", &pending.verification_code)
            .unwrap();

        // Una cuenta activa ya no tiene registro pendiente
        assert!(matches!(
            store.confirm_sign_up(EMAIL, &pending.verification_code),
            Err(InvalidCodeError::UnknownRegistration(_))
        ));
        assert!(matches!(
            store.resend_confirmation_code(EMAIL),
            Err(InvalidCodeError::UnknownRegistration(_))
        ));

        store.sign_in("Ana@Routify.co", PASSWORD).unwrap();
        let raw = storage.get_item(STORAGE_KEY_USER).unwrap().unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json, serde_json::json!({ "email": EMAIL, "display_name": "Ana" }));

        let reloaded = store_with(storage);
        assert_eq!(reloaded.identity().map(|i| i.email().to_string()), Some(EMAIL.to_string()));
    }

    #[test]
    fn test_sign_out_clears_session_and_storage() {
        let storage = Rc::new(MemoryStorage::new());
        let store = store_with_account(storage.clone());
        store.sign_in(EMAIL, PASSWORD).unwrap();
        assert_eq!(storage.len(), 1);

        store.sign_out();
        assert!(!store.is_authenticated());
        assert!(storage.get_item(STORAGE_KEY_USER).unwrap().is_none());

        let reloaded = store_with(storage);
        assert!(!reloaded.is_authenticated());
    }

    #[test]
    fn test_sign_out_when_anonymous_succeeds() {
        let store = store_with(Rc::new(MemoryStorage::new()));
        store.sign_out();
        assert_eq!(store.session(), Session::Anonymous);
    }

    #[test]
    fn test_corrupt_persisted_identity_is_discarded() {
        let storage = Rc::new(MemoryStorage::new());
        storage.set_item(STORAGE_KEY_USER, "{\"email\":42}").unwrap();

        let store = store_with(storage.clone());
        assert!(!store.is_authenticated());
        assert!(storage.get_item(STORAGE_KEY_USER).unwrap().is_none());
    }

    #[test]
    fn test_persisted_identity_with_empty_email_is_discarded() {
        let storage = Rc::new(MemoryStorage::new());
        storage
            .set_item(STORAGE_KEY_USER, r#"{"email":"  ","display_name":"Ana"}"#)
            .unwrap();

        let store = store_with(storage.clone());
        assert_eq!(store.session(), Session::Anonymous);
        assert!(storage.is_empty());
    }

    #[test]
    fn test_duplicate_and_weak_sign_ups() {
        let store = store_with_account(Rc::new(MemoryStorage::new()));
        assert!(matches!(
            store.sign_up("Otra Ana", EMAIL, PASSWORD),
            Err(RegistrationError::DuplicateEmail(_))
        ));
        assert!(matches!(
            store.sign_up("Luis", "luis@routify.co", "abcdef"),
            Err(RegistrationError::WeakPassword(_))
        ));
    }

    #[test]
    fn test_wrong_code_then_right_code() {
        let store = store_with(Rc::new(MemoryStorage::new()));
        let pending = store.sign_up("Ana", EMAIL, PASSWORD).unwrap();
        let wrong = if pending.verification_code == "000000" { "111111" } else { "000000" };

        assert_eq!(store.confirm_sign_up(EMAIL, wrong), Err(InvalidCodeError::Mismatch));
        store.confirm_sign_up(EMAIL, &pending.verification_code).unwrap();
        assert!(store.sign_in(EMAIL, PASSWORD).is_ok());
    }

    #[test]
    fn test_expired_code_fails_and_resend_recovers() {
        let provider = MockIdentityProvider::new(Duration::zero(), PasswordPolicy::default());
        let store = SessionStore::restore(Box::new(provider), Box::new(MemoryStorage::new()));

        let pending = store.sign_up("Ana", EMAIL, PASSWORD).unwrap();
        assert_eq!(
            store.confirm_sign_up(EMAIL, &pending.verification_code),
            Err(InvalidCodeError::Expired)
        );
        // Sigue pendiente: se puede pedir otro código (que también expira con TTL 0)
        let fresh = store.resend_confirmation_code(EMAIL).unwrap();
        assert_eq!(fresh.email, EMAIL);
        assert!(store.resend_confirmation_code("nadie@routify.co").is_err());
    }

    #[test]
    fn test_subscribers_observe_sign_in_and_sign_out() {
        let store = store_with_account(Rc::new(MemoryStorage::new()));
        let seen: Rc<RefCell<Vec<bool>>> = Rc::new(RefCell::new(Vec::new()));
        let seen_clone = seen.clone();
        let id = store.subscribe(move |session| seen_clone.borrow_mut().push(session.is_authenticated()));

        store.sign_in(EMAIL, PASSWORD).unwrap();
        store.sign_out();
        store.unsubscribe(id);
        store.sign_in(EMAIL, PASSWORD).unwrap();

        assert_eq!(*seen.borrow(), vec![true, false]);
    }

    #[test]
    fn test_failed_sign_in_does_not_notify() {
        let store = store_with(Rc::new(MemoryStorage::new()));
        let calls = Rc::new(RefCell::new(0));
        let calls_clone = calls.clone();
        store.subscribe(move |_| *calls_clone.borrow_mut() += 1);

        let _ = store.sign_in("nadie@routify.co", PASSWORD);
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn test_storage_failures_do_not_break_auth() {
        let provider = MockIdentityProvider::default();
        provider.seed_account("Ana", EMAIL, PASSWORD);
        let store = SessionStore::restore(Box::new(provider), Box::new(BrokenStorage));
        assert!(!store.is_authenticated());

        store.sign_in(EMAIL, PASSWORD).unwrap();
        assert!(store.is_authenticated());

        store.sign_out();
        assert!(!store.is_authenticated());
    }
}
