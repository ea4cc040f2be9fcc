pub mod register_viewmodel;
pub mod verification_viewmodel;
pub mod login_viewmodel;
pub mod company_setup_viewmodel;
pub mod dashboard_viewmodel;
pub mod navigation_viewmodel;

pub use register_viewmodel::{RegisterForm, RegisterSubmission};
pub use verification_viewmodel::VerificationForm;
pub use login_viewmodel::LoginForm;
pub use company_setup_viewmodel::CompanyForm;
pub use dashboard_viewmodel::{filter_companies, resolve_selection, DashboardView};
pub use navigation_viewmodel::{resolve_screen, AuthTab, Screen};
