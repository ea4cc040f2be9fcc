// ============================================================================
// DASHBOARD VIEWMODEL - Selección de empresa y búsqueda
// ============================================================================

use crate::models::Company;

/// Qué muestra el shell del dashboard
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardView {
    /// El usuario no tiene empresas: ofrecer el alta
    NoCompany,
    Selected(Company),
}

/// Resolver la empresa activa. Sin selección válida se usa la primera.
pub fn resolve_selection(companies: &[Company], selected_id: Option<&str>) -> DashboardView {
    let selected = selected_id
        .and_then(|id| companies.iter().find(|company| company.id == id))
        .or_else(|| companies.first());

    match selected {
        Some(company) => DashboardView::Selected(company.clone()),
        None => DashboardView::NoCompany,
    }
}

/// Filtrar por nombre, sin distinguir mayúsculas
pub fn filter_companies(companies: &[Company], term: &str) -> Vec<Company> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return companies.to_vec();
    }
    companies
        .iter()
        .filter(|company| company.name.to_lowercase().contains(&term))
        .cloned()
        .collect()
}
