use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identidad del usuario autenticado (lo único que se persiste en localStorage)
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct Identity {
    email: String,
    display_name: String,
}

impl Identity {
    /// Crear identidad. Devuelve `None` si el email está vacío;
    /// un nombre vacío se sustituye por el email.
    pub fn new(email: &str, display_name: &str) -> Option<Self> {
        let email = email.trim();
        if email.is_empty() {
            return None;
        }
        let display_name = match display_name.trim() {
            "" => email,
            name => name,
        };
        Some(Self {
            email: email.to_string(),
            display_name: display_name.to_string(),
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Una identidad deserializada puede venir con campos vacíos
    pub fn is_valid(&self) -> bool {
        !self.email.trim().is_empty()
    }
}

/// Estado de sesión: o anónima, o autenticada con identidad completa
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated(Identity),
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated(_))
    }

    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Session::Authenticated(identity) => Some(identity),
            Session::Anonymous => None,
        }
    }
}

/// Registro pendiente de verificación (puente entre registro y verificación)
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct PendingRegistration {
    pub email: String,
    pub verification_code: String,
    pub expires_at: DateTime<Utc>,
}

impl PendingRegistration {
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_identity_requires_email() {
        assert!(Identity::new("", "Juan").is_none());
        assert!(Identity::new("   ", "Juan").is_none());

        let identity = Identity::new(" juan@routify.co ", " Juan Pérez ").unwrap();
        assert_eq!(identity.email(), "juan@routify.co");
        assert_eq!(identity.display_name(), "Juan Pérez");
    }

    #[test]
    fn test_identity_display_name_falls_back_to_email() {
        let identity = Identity::new("ana@routify.co", "").unwrap();
        assert_eq!(identity.display_name(), "ana@routify.co");
    }

    #[test]
    fn test_session_views() {
        let anonymous = Session::default();
        assert!(!anonymous.is_authenticated());
        assert!(anonymous.identity().is_none());

        let identity = Identity::new("ana@routify.co", "Ana").unwrap();
        let session = Session::Authenticated(identity.clone());
        assert!(session.is_authenticated());
        assert_eq!(session.identity(), Some(&identity));
    }

    #[test]
    fn test_identity_serialized_shape() {
        let identity = Identity::new("ana@routify.co", "Ana").unwrap();
        let json = serde_json::to_value(&identity).unwrap();
        assert_eq!(json["email"], "ana@routify.co");
        assert_eq!(json["display_name"], "Ana");
    }

    #[test]
    fn test_pending_registration_expiry_boundary() {
        let now = Utc::now();
        let pending = PendingRegistration {
            email: "ana@routify.co".to_string(),
            verification_code: "123456".to_string(),
            expires_at: now + Duration::minutes(5),
        };
        assert!(!pending.is_expired_at(now));
        assert!(pending.is_expired_at(now + Duration::minutes(5)));
    }
}
