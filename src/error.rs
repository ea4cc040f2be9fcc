// ============================================================================
// ERRORES - Tipos de error del dominio (auth, storage, empresas)
// ============================================================================

use thiserror::Error;

/// Fallo al registrar una cuenta nueva
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    #[error("Ya existe una cuenta con el correo {0}")]
    DuplicateEmail(String),
    #[error("Contraseña débil: {0}")]
    WeakPassword(String),
    #[error("El correo electrónico está vacío")]
    InvalidEmail,
}

/// Fallo al confirmar (o reenviar) el código de verificación
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidCodeError {
    #[error("No hay registro pendiente para {0}")]
    UnknownRegistration(String),
    #[error("El código de verificación no coincide")]
    Mismatch,
    #[error("El código de verificación ha expirado")]
    Expired,
}

/// Credenciales incorrectas (correo inexistente, contraseña errónea o cuenta sin confirmar)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Correo o contraseña incorrectos")]
pub struct InvalidCredentialsError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("No se pudo acceder a localStorage")]
    Unavailable,
    #[error("Error serializando datos: {0}")]
    Serialization(String),
    #[error("Error escribiendo en localStorage: {0}")]
    Write(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompanyError {
    #[error("Campo obligatorio vacío: {0}")]
    MissingField(&'static str),
}
