use thiserror::Error;

use crate::shared::types::FieldErrors;

#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("La solicitud contiene {} campo(s) con errores", .0.len())]
    Validation(FieldErrors),

    #[error("Tipo de archivo no permitido: {0}")]
    UnsupportedAttachment(String),

    #[error("El archivo supera el tamaño máximo permitido ({0} bytes)")]
    AttachmentTooLarge(usize),

    #[error("Error al aceptar la solicitud: {0}")]
    Acceptance(String),
}

impl IntakeError {
    /// The per-field error map of a failed validation pass, if any.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            IntakeError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, IntakeError>;
