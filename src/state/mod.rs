// ============================================================================
// STATE MODULE - State Management con Rc<RefCell> + notificaciones
// ============================================================================

pub mod reactivity;
pub mod session_store;
pub mod toast_state;

pub use reactivity::{ReactiveState, SubscriptionId};
pub use session_store::SessionStore;
pub use toast_state::{Toast, ToastAction, ToastKind, ToastState};
