//! Validation Utilities

use validator::ValidationErrors;

use super::error::AppError;

/// Render per-field validation failures as client-facing messages,
/// `El campo '<campo>' <motivo>`.
pub fn field_messages(errors: &ValidationErrors) -> Vec<String> {
    errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                let motivo = e
                    .message
                    .clone()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "no es válido".into());
                format!("El campo '{}' {}", field, motivo)
            })
        })
        .collect()
}

/// Convert validation errors to AppError
pub fn validation_error(errors: &ValidationErrors) -> AppError {
    AppError::Validation(field_messages(errors))
}
