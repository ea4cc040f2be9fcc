pub mod app;
pub mod auth;
pub mod company_setup;
pub mod dashboard;
pub mod shared;

pub use app::App;
