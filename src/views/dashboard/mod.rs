mod company_dashboard;
mod company_selector;
mod dashboard_view;
mod no_company;

pub use company_dashboard::*;
pub use company_selector::*;
pub use dashboard_view::*;
pub use no_company::*;
