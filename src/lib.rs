//! State-transition core for the residential fiber signup intake form.
//!
//! One [`SignupForm`] instance owns the submission under construction, the
//! three photo attachment slots with their preview handles, and the error
//! map from the last submit attempt. Validation is recomputed in full on
//! every submit; a clean pass hands the complete submission to a
//! [`SubmissionAcceptor`] exactly once. Rendering is out of scope: the crate
//! specifies state transitions only.

pub mod core;
pub mod features;
pub mod modules;
pub mod shared;

pub use crate::core::error::{IntakeError, Result};
pub use crate::features::signup::{
    Acknowledgment, Attachment, AttachmentSet, AttachmentSlot, CardDetails, CardType, Field,
    FormEvent, LocalAcceptor, PaymentMethod, Plan, PriceSummary, SignupForm, SignupSubmission,
    SubmissionAcceptor, UploadedFile,
};
pub use crate::modules::storage::{PreviewHandle, PreviewStore};
pub use crate::shared::types::FieldErrors;
