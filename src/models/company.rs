use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Company {
    pub id: String,
    pub name: String,
    #[serde(rename = "nit")]
    pub tax_id: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    #[serde(default)]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Datos del formulario de alta de empresa (sin id ni timestamp)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CreateCompanyData {
    pub name: String,
    #[serde(rename = "nit")]
    pub tax_id: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    #[serde(default)]
    pub description: Option<String>,
}
