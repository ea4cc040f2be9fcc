pub mod auth;
pub mod company;
pub mod dashboard;

pub use auth::{Identity, PendingRegistration, Session};
pub use company::{Company, CreateCompanyData};
pub use dashboard::{
    Activity, ActivityCategory, ActivityKind, DashboardSummary, IncidentPoint, RouteStats,
    StaffStats, Timeframe, VehicleStats,
};
