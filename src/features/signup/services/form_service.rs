use tracing::{debug, info, warn};

use crate::core::error::{IntakeError, Result};
use crate::features::signup::models::{
    Attachment, AttachmentSet, AttachmentSlot, CardType, Field, PaymentMethod, Plan,
    SignupSubmission, UploadedFile,
};
use crate::features::signup::services::acceptance_service::{Acknowledgment, SubmissionAcceptor};
use crate::features::signup::services::pricing_service::PriceSummary;
use crate::features::signup::services::validation_service::validate_submission;
use crate::modules::storage::PreviewStore;
use crate::shared::constants::{
    ALLOWED_ATTACHMENT_MIME_TYPES, MAX_ADDITIONAL_TVS, MAX_ATTACHMENT_SIZE,
};
use crate::shared::types::FieldErrors;

/// One event per editable field. Applying an event overwrites that field
/// (last-write-wins) and clears only that field's stored error.
#[derive(Debug, Clone)]
pub enum FormEvent {
    PlanSelected(Plan),
    AddressChanged(String),
    NeighborhoodChanged(String),
    LocalityChanged(String),
    MapLinkChanged(String),
    EmailChanged(String),
    PhoneChanged(String),
    WifiPasswordChanged(String),
    AdditionalTvCountChanged(u8),
    PaymentMethodChanged(PaymentMethod),
    CardNumberChanged(String),
    CardExpiryChanged(String),
    CardTypeChanged(CardType),
    CardBankChanged(String),
}

impl FormEvent {
    /// The field this event edits, used as the error-map key to clear.
    pub fn field(&self) -> Field {
        match self {
            FormEvent::PlanSelected(_) => Field::Plan,
            FormEvent::AddressChanged(_) => Field::Address,
            FormEvent::NeighborhoodChanged(_) => Field::Neighborhood,
            FormEvent::LocalityChanged(_) => Field::Locality,
            FormEvent::MapLinkChanged(_) => Field::MapLink,
            FormEvent::EmailChanged(_) => Field::Email,
            FormEvent::PhoneChanged(_) => Field::Phone,
            FormEvent::WifiPasswordChanged(_) => Field::WifiPassword,
            FormEvent::AdditionalTvCountChanged(_) => Field::AdditionalTvCount,
            FormEvent::PaymentMethodChanged(_) => Field::PaymentMethod,
            FormEvent::CardNumberChanged(_) => Field::CardNumber,
            FormEvent::CardExpiryChanged(_) => Field::CardExpiry,
            FormEvent::CardTypeChanged(_) => Field::CardType,
            FormEvent::CardBankChanged(_) => Field::CardBank,
        }
    }
}

/// One form instance: the submission under construction, its attachment
/// slots and preview handles, and the error map from the last submit
/// attempt. All transitions are synchronous; the instance is the sole owner
/// of its state.
#[derive(Debug, Default)]
pub struct SignupForm {
    submission: SignupSubmission,
    attachments: AttachmentSet,
    previews: PreviewStore,
    errors: FieldErrors,
}

impl SignupForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a field edit. Overwrites the field's value and clears any
    /// error previously recorded for it; errors of other fields are left
    /// untouched. Switching the payment method away from auto-debit keeps
    /// previously entered card data.
    pub fn apply(&mut self, event: FormEvent) {
        let field = event.field();

        match event {
            FormEvent::PlanSelected(plan) => self.submission.plan = Some(plan),
            FormEvent::AddressChanged(value) => self.submission.address = value,
            FormEvent::NeighborhoodChanged(value) => self.submission.neighborhood = value,
            FormEvent::LocalityChanged(value) => self.submission.locality = value,
            FormEvent::MapLinkChanged(value) => self.submission.map_link = value,
            FormEvent::EmailChanged(value) => self.submission.email = value,
            FormEvent::PhoneChanged(value) => self.submission.phone = value,
            FormEvent::WifiPasswordChanged(value) => self.submission.wifi_password = value,
            FormEvent::AdditionalTvCountChanged(count) => {
                // The form offers exactly 0..=5; anything above is clamped so
                // the invariant holds even for programmatic callers.
                if count > MAX_ADDITIONAL_TVS {
                    warn!(
                        "Additional TV count {} clamped to {}",
                        count, MAX_ADDITIONAL_TVS
                    );
                }
                self.submission.additional_tv_count = count.min(MAX_ADDITIONAL_TVS);
            }
            FormEvent::PaymentMethodChanged(method) => self.submission.payment_method = method,
            FormEvent::CardNumberChanged(value) => self.submission.card.number = value,
            FormEvent::CardExpiryChanged(value) => self.submission.card.expiry = value,
            FormEvent::CardTypeChanged(card_type) => {
                self.submission.card.card_type = Some(card_type)
            }
            FormEvent::CardBankChanged(value) => self.submission.card.bank = value,
        }

        if self.errors.remove(field.name()).is_some() {
            debug!("Cleared error for edited field: {}", field.name());
        }
    }

    /// Select a file for one of the three slots. The displaced attachment's
    /// preview is revoked before the new one is minted; the slot's error is
    /// cleared like any other field edit. Rejected files leave the slot and
    /// the preview store untouched.
    pub fn attach(&mut self, slot: AttachmentSlot, file: UploadedFile) -> Result<()> {
        if !ALLOWED_ATTACHMENT_MIME_TYPES.contains(&file.content_type.as_str()) {
            return Err(IntakeError::UnsupportedAttachment(file.content_type));
        }
        if file.size() > MAX_ATTACHMENT_SIZE {
            return Err(IntakeError::AttachmentTooLarge(file.size()));
        }

        if let Some(previous) = self.attachments.take(slot) {
            self.previews.revoke(previous.preview);
        }

        let preview = self.previews.create(&file);
        debug!(
            "Attachment stored: slot={}, file={}, size={}",
            slot,
            file.file_name,
            file.size()
        );
        self.attachments.insert(slot, Attachment { file, preview });
        self.errors.remove(slot.field_name());

        Ok(())
    }

    /// Clear a slot, revoking its preview before the attachment is dropped.
    /// Returns false when the slot was already empty.
    pub fn remove_attachment(&mut self, slot: AttachmentSlot) -> bool {
        match self.attachments.take(slot) {
            Some(attachment) => {
                self.previews.revoke(attachment.preview);
                self.errors.remove(slot.field_name());
                debug!("Attachment removed: slot={}", slot);
                true
            }
            None => false,
        }
    }

    /// Submit attempt: rebuild the full error map, and only on a clean pass
    /// hand the complete submission (attachments included) to the acceptance
    /// step, exactly once. A failed pass stores the errors for inline
    /// display and has no other side effect. Successful submission does not
    /// reset the form; the applicant may correct and resubmit.
    pub fn submit(&mut self, acceptor: &mut dyn SubmissionAcceptor) -> Result<Acknowledgment> {
        self.errors = validate_submission(&self.submission, &self.attachments);

        if !self.errors.is_empty() {
            debug!("Submit rejected: {} field error(s)", self.errors.len());
            return Err(IntakeError::Validation(self.errors.clone()));
        }

        let acknowledgment = acceptor.accept(&self.submission, &self.attachments)?;
        info!("Signup submitted: ack_id={}", acknowledgment.id);

        Ok(acknowledgment)
    }

    /// Price summary for the current state; present once a plan is chosen.
    pub fn price_summary(&self) -> Option<PriceSummary> {
        PriceSummary::for_submission(&self.submission)
    }

    pub fn submission(&self) -> &SignupSubmission {
        &self.submission
    }

    pub fn attachments(&self) -> &AttachmentSet {
        &self.attachments
    }

    /// Errors from the last submit attempt, keyed by field name.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Preview handles created and not yet revoked. Stays equal to the
    /// number of filled slots unless a handle leaks.
    pub fn live_preview_count(&self) -> usize {
        self.previews.live_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::signup::services::acceptance_service::LocalAcceptor;
    use crate::features::signup::services::pricing_service::connection_total;
    use crate::shared::test_helpers::{fill_valid_form, init_test_tracing, sample_photo};

    #[test]
    fn test_valid_form_submits_and_invokes_acceptor_once() {
        init_test_tracing();
        let mut form = SignupForm::new();
        fill_valid_form(&mut form);
        let mut acceptor = LocalAcceptor::new();

        let acknowledgment = form.submit(&mut acceptor).unwrap();

        assert!(form.errors().is_empty());
        assert_eq!(acceptor.accepted_count(), 1);
        assert!(acknowledgment
            .message
            .starts_with("Formulario validado correctamente"));
    }

    #[test]
    fn test_failed_submit_stores_errors_and_skips_acceptor() {
        let mut form = SignupForm::new();
        let mut acceptor = LocalAcceptor::new();

        let result = form.submit(&mut acceptor);

        assert!(result.is_err());
        assert!(form.errors().contains("plan"));
        assert!(form.errors().contains("address"));
        assert!(form.errors().contains("id_front"));
        assert_eq!(acceptor.accepted_count(), 0);
    }

    #[test]
    fn test_edit_clears_only_that_fields_error() {
        let mut form = SignupForm::new();
        let mut acceptor = LocalAcceptor::new();
        form.submit(&mut acceptor).unwrap_err();
        assert!(form.errors().contains("email"));
        assert!(form.errors().contains("phone"));

        form.apply(FormEvent::EmailChanged("vecino@ejemplo.com".to_string()));

        assert!(!form.errors().contains("email"));
        assert!(form.errors().contains("phone"));
    }

    #[test]
    fn test_errors_are_recomputed_in_full_each_attempt() {
        let mut form = SignupForm::new();
        let mut acceptor = LocalAcceptor::new();
        form.submit(&mut acceptor).unwrap_err();
        let first_count = form.errors().len();

        fill_valid_form(&mut form);
        form.submit(&mut acceptor).unwrap();

        assert!(first_count > 0);
        assert!(form.errors().is_empty());
        assert_eq!(acceptor.accepted_count(), 1);
    }

    #[test]
    fn test_successful_submit_keeps_state_for_resubmission() {
        let mut form = SignupForm::new();
        fill_valid_form(&mut form);
        let mut acceptor = LocalAcceptor::new();

        form.submit(&mut acceptor).unwrap();

        assert!(form.submission().plan.is_some());
        assert_eq!(form.attachments().len(), 3);

        form.submit(&mut acceptor).unwrap();
        assert_eq!(acceptor.accepted_count(), 2);
    }

    #[test]
    fn test_switching_payment_method_preserves_card_data() {
        let mut form = SignupForm::new();
        form.apply(FormEvent::PaymentMethodChanged(PaymentMethod::AutoDebit));
        form.apply(FormEvent::CardNumberChanged("4111111111111111".to_string()));
        form.apply(FormEvent::CardExpiryChanged("12/27".to_string()));
        form.apply(FormEvent::CardTypeChanged(CardType::Credit));
        form.apply(FormEvent::CardBankChanged("Banco Nación".to_string()));

        form.apply(FormEvent::PaymentMethodChanged(PaymentMethod::Manual));
        form.apply(FormEvent::PaymentMethodChanged(PaymentMethod::AutoDebit));

        let card = &form.submission().card;
        assert_eq!(card.number, "4111111111111111");
        assert_eq!(card.expiry, "12/27");
        assert_eq!(card.card_type, Some(CardType::Credit));
        assert_eq!(card.bank, "Banco Nación");
    }

    #[test]
    fn test_additional_tv_count_is_clamped_to_the_offered_range() {
        let mut form = SignupForm::new();

        form.apply(FormEvent::AdditionalTvCountChanged(3));
        assert_eq!(form.submission().additional_tv_count, 3);

        form.apply(FormEvent::AdditionalTvCountChanged(9));
        assert_eq!(form.submission().additional_tv_count, 5);
    }

    #[test]
    fn test_replacing_an_attachment_swaps_file_and_preview() {
        let mut form = SignupForm::new();
        form.attach(AttachmentSlot::IdFront, sample_photo("frente-v1.jpg"))
            .unwrap();
        let first_url = form
            .attachments()
            .get(AttachmentSlot::IdFront)
            .unwrap()
            .preview
            .url()
            .to_string();

        form.attach(AttachmentSlot::IdFront, sample_photo("frente-v2.jpg"))
            .unwrap();

        let replacement = form.attachments().get(AttachmentSlot::IdFront).unwrap();
        assert_eq!(replacement.file.file_name, "frente-v2.jpg");
        assert_ne!(replacement.preview.url(), first_url);
        // The displaced preview was revoked, not reused.
        assert_eq!(form.live_preview_count(), 1);
    }

    #[test]
    fn test_remove_then_reattach_uses_a_fresh_preview() {
        let mut form = SignupForm::new();
        form.attach(AttachmentSlot::DwellingPhoto, sample_photo("casa.jpg"))
            .unwrap();

        assert!(form.remove_attachment(AttachmentSlot::DwellingPhoto));
        assert_eq!(form.live_preview_count(), 0);
        assert!(!form.remove_attachment(AttachmentSlot::DwellingPhoto));

        form.attach(AttachmentSlot::DwellingPhoto, sample_photo("casa-nueva.jpg"))
            .unwrap();
        assert_eq!(form.live_preview_count(), 1);
        assert_eq!(
            form.attachments()
                .get(AttachmentSlot::DwellingPhoto)
                .unwrap()
                .file
                .file_name,
            "casa-nueva.jpg"
        );
    }

    #[test]
    fn test_rejected_files_leave_slot_and_previews_untouched() {
        let mut form = SignupForm::new();

        let pdf = UploadedFile::new("dni.pdf", "application/pdf", vec![0x25, 0x50]);
        let result = form.attach(AttachmentSlot::IdFront, pdf);
        assert!(matches!(result, Err(IntakeError::UnsupportedAttachment(_))));

        let oversized = UploadedFile::new(
            "casa.jpg",
            "image/jpeg",
            vec![0; MAX_ATTACHMENT_SIZE + 1],
        );
        let result = form.attach(AttachmentSlot::IdFront, oversized);
        assert!(matches!(result, Err(IntakeError::AttachmentTooLarge(_))));

        assert!(form.attachments().is_empty());
        assert_eq!(form.live_preview_count(), 0);
    }

    #[test]
    fn test_price_summary_tracks_plan_and_tv_edits() {
        let mut form = SignupForm::new();
        assert!(form.price_summary().is_none());

        form.apply(FormEvent::PlanSelected(Plan::Mega100));
        form.apply(FormEvent::AdditionalTvCountChanged(2));

        let summary = form.price_summary().unwrap();
        assert_eq!(summary.plan, Plan::Mega100);
        assert_eq!(summary.total_due, connection_total(2));
    }
}
