use std::cell::RefCell;

use chrono::Utc;
use uuid::Uuid;

use crate::config::CONFIG;
use crate::error::CompanyError;
use crate::models::{Company, CreateCompanyData, Identity};

/// Directorio de empresas mock (en memoria, se pierde al recargar).
/// Solo se accede con una identidad autenticada.
#[derive(Debug, Default)]
pub struct CompanyService {
    companies: RefCell<Vec<Company>>,
}

impl CompanyService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Listar empresas del usuario
    pub fn list_companies(&self, identity: &Identity) -> Vec<Company> {
        log::debug!(
            "📋 Empresas para {} (mock, backend {} sin usar)",
            identity.email(),
            CONFIG.backend_url()
        );
        self.companies.borrow().clone()
    }

    pub fn find_company(&self, id: &str) -> Option<Company> {
        self.companies
            .borrow()
            .iter()
            .find(|company| company.id == id)
            .cloned()
    }

    /// Crear empresa con id y timestamp generados
    pub fn create_company(
        &self,
        identity: &Identity,
        data: CreateCompanyData,
    ) -> Result<Company, CompanyError> {
        require_field("name", &data.name)?;
        require_field("nit", &data.tax_id)?;
        require_field("address", &data.address)?;

        let company = Company {
            id: format!("company-{}", Uuid::new_v4()),
            name: data.name.trim().to_string(),
            tax_id: data.tax_id.trim().to_string(),
            email: data.email.trim().to_string(),
            phone: data.phone.trim().to_string(),
            address: data.address.trim().to_string(),
            description: data
                .description
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty()),
            created_at: Utc::now(),
        };

        self.companies.borrow_mut().push(company.clone());
        log::info!("🏢 Empresa creada por {}: {} ({})", identity.email(), company.name, company.id);
        Ok(company)
    }
}

fn require_field(field: &'static str, value: &str) -> Result<(), CompanyError> {
    if value.trim().is_empty() {
        Err(CompanyError::MissingField(field))
    } else {
        Ok(())
    }
}
