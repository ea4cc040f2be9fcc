/// Única entrada de localStorage: identidad del usuario serializada
pub const STORAGE_KEY_USER: &str = "routify_user";

/// Longitud de los códigos de verificación
pub const VERIFICATION_CODE_LENGTH: usize = 6;

/// Cuenta demo sembrada en desarrollo
pub const DEMO_ACCOUNT_NAME: &str = "Administrador Demo";
pub const DEMO_ACCOUNT_EMAIL: &str = "demo@routify.co";
pub const DEMO_ACCOUNT_PASSWORD: &str = "routify123";
