//! Request DTOs
//!
//! Data structures for API request bodies.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

/// Cliente create/update request body.
///
/// Fields missing from the JSON body deserialize to their defaults so the
/// validator can report them as empty instead of the request failing at the
/// deserialization stage.
#[derive(Debug, Deserialize, Validate)]
pub struct CustomerPayload {
    #[serde(default)]
    #[validate(length(min = 1, message = "no puede estar vacío"))]
    pub nombre: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "no puede estar vacío"))]
    pub apellido: String,

    #[serde(default)]
    #[validate(
        length(min = 1, message = "no puede estar vacío"),
        email(message = "no es una dirección de correo bien formada")
    )]
    pub email: String,

    /// Creation timestamp; defaults to the current time on insert when absent
    #[serde(rename = "createAt", default)]
    pub create_at: Option<DateTime<Utc>>,
}
