// ============================================================================
// COMPANY SETUP VIEWMODEL - Reglas del formulario de alta de empresa
// ============================================================================

use crate::models::CreateCompanyData;
use crate::utils::{is_email_shape, trimmed_len, FieldErrors};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompanyForm {
    pub name: String,
    pub nit: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub description: String,
}

impl CompanyForm {
    pub fn validate(&self) -> Result<CreateCompanyData, FieldErrors> {
        let mut errors = FieldErrors::new();

        if trimmed_len(&self.name) < 2 {
            errors.add("name", "El nombre debe tener al menos 2 caracteres");
        }
        if trimmed_len(&self.nit) < 3 {
            errors.add("nit", "NIT inválido");
        }
        if !is_email_shape(&self.email) {
            errors.add("email", "Correo electrónico inválido");
        }
        if trimmed_len(&self.phone) < 7 {
            errors.add("phone", "Número de teléfono inválido");
        }
        if trimmed_len(&self.address) < 5 {
            errors.add("address", "Dirección inválida");
        }

        let description = self.description.trim();
        errors.into_result(CreateCompanyData {
            name: self.name.trim().to_string(),
            tax_id: self.nit.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            address: self.address.trim().to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> CompanyForm {
        CompanyForm {
            name: "Transportes XYZ".to_string(),
            nit: "900.123.456-7".to_string(),
            email: "contacto@empresa.com".to_string(),
            phone: "(601) 123-4567".to_string(),
            address: "Calle 123 #45-67, Bogotá".to_string(),
            description: String::new(),
        }
    }

    #[test]
    fn test_valid_form_maps_to_create_data() {
        let data = valid().validate().unwrap();
        assert_eq!(data.tax_id, "900.123.456-7");
        assert_eq!(data.description, None);

        let mut with_description = valid();
        with_description.description = "  Buses intermunicipales ".to_string();
        assert_eq!(
            with_description.validate().unwrap().description.as_deref(),
            Some("Buses intermunicipales")
        );
    }

    #[test]
    fn test_whitespace_does_not_satisfy_lengths() {
        let form = CompanyForm {
            name: "   ".to_string(),
            nit: " 1 ".to_string(),
            email: "contacto@empresa.com".to_string(),
            phone: "123     ".to_string(),
            address: "    ".to_string(),
            description: String::new(),
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(!errors.contains("email"));
    }
}
