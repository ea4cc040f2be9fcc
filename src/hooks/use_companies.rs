use std::rc::Rc;

use yew::prelude::*;

use crate::error::CompanyError;
use crate::hooks::use_auth;
use crate::models::{Company, CreateCompanyData, Identity};
use crate::services::CompanyService;

#[derive(Clone)]
pub struct UseCompaniesHandle {
    pub companies: Vec<Company>,
    service: Rc<CompanyService>,
    set_companies: UseStateSetter<Vec<Company>>,
}

impl PartialEq for UseCompaniesHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.service, &other.service) && self.companies == other.companies
    }
}

impl UseCompaniesHandle {
    /// Crear empresa y refrescar la lista
    pub fn create_company(
        &self,
        identity: &Identity,
        data: CreateCompanyData,
    ) -> Result<Company, CompanyError> {
        let company = self.service.create_company(identity, data)?;
        self.set_companies.set(self.service.list_companies(identity));
        Ok(company)
    }
}

#[derive(Properties, PartialEq)]
pub struct CompaniesProviderProps {
    pub children: Children,
}

/// Debe anidarse dentro de `AuthProvider`: la lista depende de la identidad
#[function_component(CompaniesProvider)]
pub fn companies_provider(props: &CompaniesProviderProps) -> Html {
    let auth = use_auth();
    let service = use_memo((), |_| CompanyService::new());
    let companies = use_state(Vec::<Company>::new);

    {
        let service = service.clone();
        let companies = companies.clone();
        use_effect_with(auth.identity().cloned(), move |identity| {
            match identity {
                Some(identity) => companies.set(service.list_companies(identity)),
                None => companies.set(Vec::new()),
            }
            || ()
        });
    }

    let handle = UseCompaniesHandle {
        companies: (*companies).clone(),
        service,
        set_companies: companies.setter(),
    };

    html! {
        <ContextProvider<UseCompaniesHandle> context={handle}>
            {props.children.clone()}
        </ContextProvider<UseCompaniesHandle>>
    }
}

#[hook]
pub fn use_companies() -> UseCompaniesHandle {
    use_context::<UseCompaniesHandle>().expect("use_companies debe usarse dentro de CompaniesProvider")
}
