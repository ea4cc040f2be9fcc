mod form_field;
mod sidebar;
mod toast_view;

pub use form_field::*;
pub use sidebar::*;
pub use toast_view::*;
