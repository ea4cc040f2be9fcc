pub mod use_auth;
pub mod use_companies;
pub mod use_toast;

pub use use_auth::{use_auth, AuthProvider, UseAuthHandle};
pub use use_companies::{use_companies, CompaniesProvider, UseCompaniesHandle};
pub use use_toast::{use_toast, ToastProvider, UseToastHandle};
