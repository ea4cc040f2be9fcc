mod auth_view;
mod login_view;
mod register_view;
mod verification_view;

pub use auth_view::*;
pub use login_view::*;
pub use register_view::*;
pub use verification_view::*;
