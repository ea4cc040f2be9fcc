// ============================================================================
// NAVIGATION VIEWMODEL - Pantallas y guardia de autenticación
// ============================================================================

use crate::models::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthTab {
    #[default]
    Login,
    Register,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Auth(AuthTab),
    /// Verificación del registro pendiente de `email`
    Verify { email: String },
    Dashboard,
    CompanySetup,
}

impl Default for Screen {
    fn default() -> Self {
        Screen::Auth(AuthTab::Login)
    }
}

impl Screen {
    pub fn requires_auth(&self) -> bool {
        matches!(self, Screen::Dashboard | Screen::CompanySetup)
    }
}

/// Pantalla efectiva: sin sesión nunca se llega a una pantalla protegida,
/// con sesión las pantallas de acceso llevan al dashboard.
pub fn resolve_screen(session: &Session, requested: &Screen) -> Screen {
    match (session.is_authenticated(), requested.requires_auth()) {
        (false, true) => Screen::Auth(AuthTab::Login),
        (true, false) => Screen::Dashboard,
        _ => requested.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Identity;

    #[test]
    fn test_anonymous_is_sent_to_login() {
        let session = Session::Anonymous;
        assert_eq!(resolve_screen(&session, &Screen::Dashboard), Screen::Auth(AuthTab::Login));
        assert_eq!(resolve_screen(&session, &Screen::CompanySetup), Screen::Auth(AuthTab::Login));
        assert_eq!(
            resolve_screen(&session, &Screen::Auth(AuthTab::Register)),
            Screen::Auth(AuthTab::Register)
        );
        let verify = Screen::Verify { email: "ana@routify.co".to_string() };
        assert_eq!(resolve_screen(&session, &verify), verify);
    }

    #[test]
    fn test_authenticated_skips_auth_screens() {
        let session = Session::Authenticated(Identity::new("ana@routify.co", "Ana").unwrap());
        assert_eq!(resolve_screen(&session, &Screen::default()), Screen::Dashboard);
        assert_eq!(resolve_screen(&session, &Screen::CompanySetup), Screen::CompanySetup);
    }
}
