use validator::Validate;

use crate::features::signup::models::{AttachmentSet, Field, PaymentMethod, SignupSubmission};
use crate::shared::types::FieldErrors;

/// Validation pass run on every submit attempt. Pure function of the
/// current state: every rule is evaluated independently (no short-circuit)
/// and the full error map is rebuilt from scratch each time.
pub fn validate_submission(
    submission: &SignupSubmission,
    attachments: &AttachmentSet,
) -> FieldErrors {
    let mut errors = FieldErrors::new();

    // Unconditional field rules come from the Validate derive on the model.
    if let Err(validation) = submission.validate() {
        for (field, field_errors) in validation.field_errors() {
            if let Some(first) = field_errors.first() {
                let message = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Valor inválido: {}", field));
                errors.insert(field.to_string(), message);
            }
        }
    }

    // Card data is only meaningful under auto-debit, and only the number is
    // checked. Expiry, type and bank stay unvalidated.
    if submission.payment_method == PaymentMethod::AutoDebit && submission.card.number.is_empty() {
        errors.insert(
            Field::CardNumber.name(),
            "Complete los datos de la tarjeta",
        );
    }

    for slot in attachments.missing_slots() {
        errors.insert(slot.field_name(), slot.missing_message());
    }

    errors
}
