pub mod identity_service;
pub mod company_service;
pub mod dashboard_service;

pub use identity_service::*;
pub use company_service::CompanyService;
pub use dashboard_service::fetch_dashboard_summary;
