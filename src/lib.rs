// ============================================================================
// ROUTIFY ADMIN - FRONTEND MVVM (RUST + YEW)
// ============================================================================
// Arquitectura MVVM:
// - Views: componentes Yew (sin reglas de negocio)
// - ViewModels: reglas de formularios, selección y navegación
// - Hooks: contextos compartidos (sesión, empresas, toasts)
// - State: SessionStore reactivo con Rc<RefCell>
// - Services: proveedor de identidad, empresas y dashboard (mock)
// - Models: estructuras compartidas
// ============================================================================

pub mod config;
pub mod error;
pub mod hooks;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;
pub mod views;

pub use views::App;
