// ============================================================================
// REGISTER VIEWMODEL - Reglas del formulario de registro
// ============================================================================

use crate::utils::{is_email_shape, trimmed_len, FieldErrors};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Datos listos para `SessionStore::sign_up`
#[derive(Debug, Clone, PartialEq)]
pub struct RegisterSubmission {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl RegisterForm {
    pub fn validate(&self) -> Result<RegisterSubmission, FieldErrors> {
        let mut errors = FieldErrors::new();

        if trimmed_len(&self.name) < 2 {
            errors.add("name", "Nombre demasiado corto");
        }
        if !is_email_shape(&self.email) {
            errors.add("email", "Correo electrónico inválido");
        }
        if self.password.chars().count() < 6 {
            errors.add("password", "La contraseña debe tener al menos 6 caracteres");
        }
        if self.password != self.confirm_password {
            errors.add("confirm_password", "Las contraseñas no coinciden");
        }

        errors.into_result(RegisterSubmission {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> RegisterForm {
        RegisterForm {
            name: "Juan Pérez".to_string(),
            email: "correo@ejemplo.com".to_string(),
            password: "clave123".to_string(),
            confirm_password: "clave123".to_string(),
        }
    }

    #[test]
    fn test_valid_form() {
        let submission = valid().validate().unwrap();
        assert_eq!(submission.name, "Juan Pérez");
        assert_eq!(submission.email, "correo@ejemplo.com");
    }

    #[test]
    fn test_mismatched_confirmation_fails_on_confirm_field() {
        let mut form = valid();
        form.confirm_password = "clave124".to_string();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("confirm_password"), Some("Las contraseñas no coinciden"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_every_rule_reported() {
        let form = RegisterForm {
            name: " J ".to_string(),
            email: "correo".to_string(),
            password: "abc".to_string(),
            confirm_password: String::new(),
        };
        let errors = form.validate().unwrap_err();
        for field in ["name", "email", "password", "confirm_password"] {
            assert!(errors.contains(field), "falta error en {}", field);
        }
    }
}
