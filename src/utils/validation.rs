// ============================================================================
// VALIDACIÓN - Primitivas compartidas por los formularios
// ============================================================================
// Cada formulario declara sus propias reglas en su viewmodel; aquí solo
// viven el mapa de errores por campo y la forma de un email.
// ============================================================================

use std::collections::BTreeMap;

/// Errores de validación por campo (nombre del campo -> mensaje)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldErrors {
    errors: BTreeMap<&'static str, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registrar error. Se conserva el primero de cada campo.
    pub fn add(&mut self, field: &'static str, message: &str) {
        self.errors
            .entry(field)
            .or_insert_with(|| message.to_string());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// `Ok(value)` si no hay errores
    pub fn into_result<T>(self, value: T) -> Result<T, FieldErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

/// Longitud en caracteres (no bytes) del texto sin espacios alrededor
pub fn trimmed_len(value: &str) -> usize {
    value.trim().chars().count()
}

/// Forma `local@dominio.tld`, sin espacios
pub fn is_email_shape(value: &str) -> bool {
    let value = value.trim();
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_shape() {
        assert!(is_email_shape("correo@ejemplo.com"));
        assert!(is_email_shape(" juan.perez@empresa.com.co "));

        assert!(!is_email_shape(""));
        assert!(!is_email_shape("correo"));
        assert!(!is_email_shape("@ejemplo.com"));
        assert!(!is_email_shape("correo@"));
        assert!(!is_email_shape("correo@ejemplo"));
        assert!(!is_email_shape("correo@@ejemplo.com"));
        assert!(!is_email_shape("correo@ejemplo..com"));
        assert!(!is_email_shape("cor reo@ejemplo.com"));
    }

    #[test]
    fn test_field_errors_keep_first_message() {
        let mut errors = FieldErrors::new();
        errors.add("email", "primero");
        errors.add("email", "segundo");
        assert_eq!(errors.get("email"), Some("primero"));
        assert_eq!(errors.len(), 1);
        assert!(errors.into_result(()).is_err());
    }

    #[test]
    fn test_trimmed_len_counts_chars() {
        assert_eq!(trimmed_len("  Año  "), 3);
        assert_eq!(trimmed_len("   "), 0);
    }
}
