use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// URL del backend real (placeholder, la app funciona 100% con datos mock)
    pub backend_url: String,
    pub environment: String,
    pub enable_logging: bool,
    pub auth_config: AuthConfig,
    pub ui_config: UIConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: "https://api.your-backend-url.com".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            auth_config: AuthConfig::default(),
            ui_config: UIConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    pub verification_code_ttl_hours: i64,
    pub min_password_length: usize,
    pub seed_demo_account: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            verification_code_ttl_hours: 24,
            min_password_length: 6,
            seed_demo_account: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UIConfig {
    pub toast_duration_ms: u32,
}

impl Default for UIConfig {
    fn default() -> Self {
        Self {
            toast_duration_ms: 4000,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            backend_url: option_env!("BACKEND_URL")
                .map(str::to_string)
                .unwrap_or(defaults.backend_url),
            environment: option_env!("ENVIRONMENT")
                .map(str::to_string)
                .unwrap_or(defaults.environment),
            enable_logging: parse_or(option_env!("ENABLE_LOGGING"), defaults.enable_logging),
            auth_config: AuthConfig {
                verification_code_ttl_hours: parse_or(
                    option_env!("VERIFICATION_CODE_TTL_HOURS"),
                    defaults.auth_config.verification_code_ttl_hours,
                ),
                min_password_length: parse_or(
                    option_env!("MIN_PASSWORD_LENGTH"),
                    defaults.auth_config.min_password_length,
                ),
                seed_demo_account: parse_or(
                    option_env!("SEED_DEMO_ACCOUNT"),
                    defaults.auth_config.seed_demo_account,
                ),
            },
            ui_config: UIConfig {
                toast_duration_ms: parse_or(
                    option_env!("TOAST_DURATION_MS"),
                    defaults.ui_config.toast_duration_ms,
                ),
            },
        }
    }

    pub fn backend_url(&self) -> &str {
        &self.backend_url
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Verifica si el modo de logging está habilitado
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    /// Nivel de log para wasm-logger
    pub fn log_level(&self) -> log::Level {
        if self.is_logging_enabled() {
            log::Level::Debug
        } else {
            log::Level::Warn
        }
    }

    /// La cuenta demo solo existe fuera de producción
    pub fn should_seed_demo_account(&self) -> bool {
        self.auth_config.seed_demo_account && !self.is_production()
    }
}

fn parse_or<T: std::str::FromStr>(raw: Option<&str>, default: T) -> T {
    raw.and_then(|value| value.trim().parse().ok()).unwrap_or(default)
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_or_falls_back_on_garbage() {
        assert_eq!(parse_or(Some("12"), 3u32), 12);
        assert_eq!(parse_or(Some(" 7 "), 3u32), 7);
        assert_eq!(parse_or(Some("doce"), 3u32), 3);
        assert_eq!(parse_or::<bool>(None, true), true);
    }

    #[test]
    fn test_demo_account_never_seeded_in_production() {
        let mut config = AppConfig::default();
        assert!(config.should_seed_demo_account());

        config.environment = "production".to_string();
        assert!(!config.should_seed_demo_account());
    }

    #[test]
    fn test_log_level_follows_flag() {
        let mut config = AppConfig::default();
        assert_eq!(config.log_level(), log::Level::Debug);
        config.enable_logging = false;
        assert_eq!(config.log_level(), log::Level::Warn);
    }
}
