use crate::utils::{is_email_shape, trimmed_len, FieldErrors, VERIFICATION_CODE_LENGTH};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct VerificationForm {
    pub email: String,
    pub code: String,
}

impl VerificationForm {
    /// Formulario precargado con el email del registro pendiente
    pub fn for_email(email: &str) -> Self {
        Self {
            email: email.to_string(),
            code: String::new(),
        }
    }

    /// Devuelve `(email, código)` sin espacios
    pub fn validate(&self) -> Result<(String, String), FieldErrors> {
        let mut errors = FieldErrors::new();
        if !is_email_shape(&self.email) {
            errors.add("email", "Correo electrónico inválido");
        }
        if trimmed_len(&self.code) < VERIFICATION_CODE_LENGTH {
            errors.add("code", "El código debe tener al menos 6 caracteres");
        }
        errors.into_result((self.email.trim().to_string(), self.code.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_length() {
        let mut form = VerificationForm::for_email("ana@routify.co");
        form.code = " 12345 ".to_string();
        assert!(form.validate().unwrap_err().contains("code"));

        form.code = " 123456 ".to_string();
        assert_eq!(
            form.validate().unwrap(),
            ("ana@routify.co".to_string(), "123456".to_string())
        );
    }

    #[test]
    fn test_email_checked() {
        let form = VerificationForm {
            email: "ana".to_string(),
            code: "123456".to_string(),
        };
        assert!(form.validate().unwrap_err().contains("email"));
    }
}
