use crate::utils::{is_email_shape, FieldErrors};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    /// Devuelve `(email, contraseña)`
    pub fn validate(&self) -> Result<(String, String), FieldErrors> {
        let mut errors = FieldErrors::new();
        if !is_email_shape(&self.email) {
            errors.add("email", "Correo electrónico inválido");
        }
        if self.password.is_empty() {
            errors.add("password", "Ingrese su contraseña");
        }
        errors.into_result((self.email.trim().to_string(), self.password.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_rules() {
        let errors = LoginForm::default().validate().unwrap_err();
        assert!(errors.contains("email"));
        assert!(errors.contains("password"));

        let form = LoginForm {
            email: " demo@routify.co ".to_string(),
            password: " con espacios ".to_string(),
        };
        // La contraseña no se recorta
        assert_eq!(
            form.validate().unwrap(),
            ("demo@routify.co".to_string(), " con espacios ".to_string())
        );
    }
}
