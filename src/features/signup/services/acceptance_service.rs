use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use crate::core::error::{IntakeError, Result};
use crate::features::signup::models::{AttachmentSet, SignupSubmission};

/// Synchronous acknowledgment surfaced to the applicant once a valid
/// submission has been handed off.
#[derive(Debug, Clone, Serialize)]
pub struct Acknowledgment {
    pub id: Uuid,
    pub message: String,
    pub received_at: DateTime<Utc>,
}

/// Acceptance step for validated submissions. Invoked exactly once per
/// successful submit, with the complete submission value and the attachment
/// data. A real deployment implements this against the intake endpoint.
pub trait SubmissionAcceptor {
    fn accept(
        &mut self,
        submission: &SignupSubmission,
        attachments: &AttachmentSet,
    ) -> Result<Acknowledgment>;
}

/// Placeholder acceptance step: logs the intake and acknowledges
/// synchronously without performing any network call.
#[derive(Debug, Default)]
pub struct LocalAcceptor {
    accepted: usize,
}

impl LocalAcceptor {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many submissions this acceptor has acknowledged.
    pub fn accepted_count(&self) -> usize {
        self.accepted
    }
}

impl SubmissionAcceptor for LocalAcceptor {
    fn accept(
        &mut self,
        submission: &SignupSubmission,
        attachments: &AttachmentSet,
    ) -> Result<Acknowledgment> {
        // The serialized form is the payload a real endpoint would receive.
        let payload = serde_json::to_string(submission)
            .map_err(|e| IntakeError::Acceptance(format!("Failed to serialize submission: {e}")))?;

        debug!("Submission payload: {}", payload);

        self.accepted += 1;

        let acknowledgment = Acknowledgment {
            id: Uuid::new_v4(),
            message:
                "Formulario validado correctamente. En producción, aquí se enviarían los datos."
                    .to_string(),
            received_at: Utc::now(),
        };

        info!(
            "Signup accepted locally: id={}, attachments={}, payload_bytes={}",
            acknowledgment.id,
            attachments.len(),
            payload.len()
        );

        Ok(acknowledgment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::storage::PreviewStore;
    use crate::shared::test_helpers::{filled_attachments, filled_submission};

    #[test]
    fn test_local_acceptor_counts_each_acknowledgment() {
        let mut previews = PreviewStore::new();
        let attachments = filled_attachments(&mut previews);
        let submission = filled_submission();
        let mut acceptor = LocalAcceptor::new();

        let first = acceptor.accept(&submission, &attachments).unwrap();
        let second = acceptor.accept(&submission, &attachments).unwrap();

        assert_eq!(acceptor.accepted_count(), 2);
        assert_ne!(first.id, second.id);
        assert!(first.message.starts_with("Formulario validado correctamente"));
    }
}
