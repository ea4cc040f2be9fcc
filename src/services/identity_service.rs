// ============================================================================
// IDENTITY SERVICE - Proveedor de identidad (mock en memoria)
// ============================================================================
// El SessionStore solo conoce el trait `IdentityProvider`. La implementación
// mock reemplaza al proveedor de identidad alojado: directorio de cuentas,
// registros pendientes, códigos de verificación y política de contraseñas.
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::config::AppConfig;
use crate::error::{InvalidCodeError, InvalidCredentialsError, RegistrationError};
use crate::models::{Identity, PendingRegistration};
use crate::utils::{
    DEMO_ACCOUNT_EMAIL, DEMO_ACCOUNT_NAME, DEMO_ACCOUNT_PASSWORD, VERIFICATION_CODE_LENGTH,
};

pub trait IdentityProvider {
    /// Registrar cuenta pendiente de verificación
    fn sign_up(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<PendingRegistration, RegistrationError>;

    /// Activar cuenta con el código recibido
    fn confirm_sign_up(&self, email: &str, code: &str) -> Result<(), InvalidCodeError>;

    /// Emitir un código nuevo para un registro pendiente
    fn resend_confirmation_code(&self, email: &str) -> Result<PendingRegistration, InvalidCodeError>;

    /// Validar credenciales de una cuenta activa
    fn authenticate(&self, email: &str, password: &str) -> Result<Identity, InvalidCredentialsError>;
}

/// Política de contraseñas del lado "servidor"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordPolicy {
    pub min_length: usize,
}

impl PasswordPolicy {
    pub fn check(&self, password: &str) -> Result<(), RegistrationError> {
        if password.chars().count() < self.min_length {
            return Err(RegistrationError::WeakPassword(format!(
                "debe tener al menos {} caracteres",
                self.min_length
            )));
        }
        if !password.chars().any(char::is_alphabetic) {
            return Err(RegistrationError::WeakPassword(
                "debe contener al menos una letra".to_string(),
            ));
        }
        if !password.chars().any(|c| c.is_ascii_digit()) {
            return Err(RegistrationError::WeakPassword(
                "debe contener al menos un número".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self { min_length: 6 }
    }
}

#[derive(Debug, Clone)]
struct Account {
    identity: Identity,
    password: String,
    confirmed: bool,
}

/// Proveedor de identidad mock. Nada sale del proceso: las cuentas viven en memoria.
pub struct MockIdentityProvider {
    accounts: RefCell<HashMap<String, Account>>,
    pending: RefCell<HashMap<String, PendingRegistration>>,
    code_ttl: Duration,
    policy: PasswordPolicy,
}

impl MockIdentityProvider {
    pub fn new(code_ttl: Duration, policy: PasswordPolicy) -> Self {
        Self {
            accounts: RefCell::new(HashMap::new()),
            pending: RefCell::new(HashMap::new()),
            code_ttl,
            policy,
        }
    }

    /// Proveedor configurado desde `AppConfig` (con cuenta demo si aplica)
    pub fn from_config(config: &AppConfig) -> Self {
        let provider = Self::new(
            Duration::hours(config.auth_config.verification_code_ttl_hours),
            PasswordPolicy {
                min_length: config.auth_config.min_password_length,
            },
        );
        if config.should_seed_demo_account() {
            provider.seed_account(DEMO_ACCOUNT_NAME, DEMO_ACCOUNT_EMAIL, DEMO_ACCOUNT_PASSWORD);
            log::info!("🧪 Cuenta demo disponible: {}", DEMO_ACCOUNT_EMAIL);
        }
        provider
    }

    /// Insertar una cuenta ya confirmada
    pub fn seed_account(&self, name: &str, email: &str, password: &str) {
        let Some(identity) = Identity::new(&normalize_email(email), name) else {
            log::warn!("⚠️ Cuenta demo ignorada: email vacío");
            return;
        };
        self.accounts.borrow_mut().insert(
            identity.email().to_string(),
            Account {
                identity,
                password: password.to_string(),
                confirmed: true,
            },
        );
    }

    /// Registro pendiente (si existe) para un email
    pub fn pending_registration(&self, email: &str) -> Option<PendingRegistration> {
        self.pending.borrow().get(&normalize_email(email)).cloned()
    }

    pub fn is_confirmed(&self, email: &str) -> bool {
        self.accounts
            .borrow()
            .get(&normalize_email(email))
            .map(|account| account.confirmed)
            .unwrap_or(false)
    }

    fn issue_code(&self, email: &str) -> PendingRegistration {
        let pending = PendingRegistration {
            email: email.to_string(),
            verification_code: generate_verification_code(),
            expires_at: Utc::now() + self.code_ttl,
        };
        self.pending
            .borrow_mut()
            .insert(email.to_string(), pending.clone());
        // Sin backend de correo: el código solo se muestra en consola
        log::info!("✉️ Código de verificación para {}: {}", email, pending.verification_code);
        pending
    }
}

impl Default for MockIdentityProvider {
    fn default() -> Self {
        Self::new(Duration::hours(24), PasswordPolicy::default())
    }
}

impl IdentityProvider for MockIdentityProvider {
    fn sign_up(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<PendingRegistration, RegistrationError> {
        let email = normalize_email(email);
        let identity = Identity::new(&email, name).ok_or(RegistrationError::InvalidEmail)?;
        if self.accounts.borrow().contains_key(&email) {
            log::warn!("⚠️ Registro rechazado, email duplicado: {}", email);
            return Err(RegistrationError::DuplicateEmail(email));
        }
        self.policy.check(password)?;

        self.accounts.borrow_mut().insert(
            email.clone(),
            Account {
                identity,
                password: password.to_string(),
                confirmed: false,
            },
        );

        log::info!("📝 Cuenta pendiente de verificación: {}", email);
        Ok(self.issue_code(&email))
    }

    fn confirm_sign_up(&self, email: &str, code: &str) -> Result<(), InvalidCodeError> {
        let email = normalize_email(email);
        let pending = self
            .pending
            .borrow()
            .get(&email)
            .cloned()
            .ok_or_else(|| InvalidCodeError::UnknownRegistration(email.clone()))?;

        if pending.verification_code != code.trim() {
            return Err(InvalidCodeError::Mismatch);
        }
        if pending.is_expired_at(Utc::now()) {
            return Err(InvalidCodeError::Expired);
        }

        let mut accounts = self.accounts.borrow_mut();
        let account = accounts
            .get_mut(&email)
            .ok_or_else(|| InvalidCodeError::UnknownRegistration(email.clone()))?;
        account.confirmed = true;
        self.pending.borrow_mut().remove(&email);

        log::info!("✅ Cuenta verificada: {}", email);
        Ok(())
    }

    fn resend_confirmation_code(&self, email: &str) -> Result<PendingRegistration, InvalidCodeError> {
        let email = normalize_email(email);
        if !self.pending.borrow().contains_key(&email) {
            return Err(InvalidCodeError::UnknownRegistration(email));
        }
        Ok(self.issue_code(&email))
    }

    fn authenticate(&self, email: &str, password: &str) -> Result<Identity, InvalidCredentialsError> {
        let email = normalize_email(email);
        let accounts = self.accounts.borrow();
        match accounts.get(&email) {
            Some(account) if account.confirmed && account.password == password => {
                Ok(account.identity.clone())
            }
            Some(account) if !account.confirmed => {
                log::warn!("⚠️ Login de cuenta sin verificar: {}", email);
                Err(InvalidCredentialsError)
            }
            _ => Err(InvalidCredentialsError),
        }
    }
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Los bits de un UUID v4 salen de `getrandom` (crypto.getRandomValues en el
/// navegador), así que sirven como fuente aleatoria sin otra dependencia.
fn generate_verification_code() -> String {
    let modulus = 10u128.pow(VERIFICATION_CODE_LENGTH as u32);
    let value = Uuid::new_v4().as_u128() % modulus;
    format!("{:0width$}", value, width = VERIFICATION_CODE_LENGTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> MockIdentityProvider {
        MockIdentityProvider::default()
    }

    #[test]
    fn test_verification_code_shape() {
        for _ in 0..50 {
            let code = generate_verification_code();
            assert_eq!(code.len(), VERIFICATION_CODE_LENGTH);
            assert!(code.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_password_policy() {
        let policy = PasswordPolicy { min_length: 6 };
        assert!(policy.check("abc123").is_ok());
        assert!(matches!(policy.check("ab12"), Err(RegistrationError::WeakPassword(_))));
        assert!(matches!(policy.check("abcdef"), Err(RegistrationError::WeakPassword(_))));
        assert!(matches!(policy.check("123456"), Err(RegistrationError::WeakPassword(_))));
    }

    #[test]
    fn test_duplicate_email_is_case_insensitive() {
        let provider = provider();
        provider.sign_up("Ana", "ana@routify.co", "clave123").unwrap();
        assert_eq!(
            provider.sign_up("Ana", "  ANA@Routify.co ", "clave123"),
            Err(RegistrationError::DuplicateEmail("ana@routify.co".to_string()))
        );
    }

    #[test]
    fn test_confirm_then_authenticate() {
        let provider = provider();
        let pending = provider.sign_up("Ana", "ana@routify.co", "clave123").unwrap();
        assert_eq!(provider.authenticate("ana@routify.co", "clave123"), Err(InvalidCredentialsError));

        provider
            .confirm_sign_up("ana@routify.co", &pending.verification_code)
            .unwrap();
        assert!(provider.is_confirmed("ana@routify.co"));
        assert!(provider.pending_registration("ana@routify.co").is_none());

        let identity = provider.authenticate("Ana@routify.co", "clave123").unwrap();
        assert_eq!(identity.email(), "ana@routify.co");
        assert_eq!(identity.display_name(), "Ana");
    }

    #[test]
    fn test_confirm_unknown_email() {
        assert_eq!(
            provider().confirm_sign_up("nadie@routify.co", "123456"),
            Err(InvalidCodeError::UnknownRegistration("nadie@routify.co".to_string()))
        );
    }

    #[test]
    fn test_resend_replaces_code() {
        let provider = provider();
        provider.sign_up("Ana", "ana@routify.co", "clave123").unwrap();
        let fresh = provider.resend_confirmation_code("ana@routify.co").unwrap();
        assert_eq!(provider.pending_registration("ana@routify.co"), Some(fresh.clone()));
        provider
            .confirm_sign_up("ana@routify.co", &fresh.verification_code)
            .unwrap();
    }

    #[test]
    fn test_seeded_demo_account_signs_in() {
        let provider = MockIdentityProvider::from_config(&AppConfig::default());
        let identity = provider
            .authenticate(DEMO_ACCOUNT_EMAIL, DEMO_ACCOUNT_PASSWORD)
            .unwrap();
        assert_eq!(identity.display_name(), DEMO_ACCOUNT_NAME);
    }
}
