pub mod models;
pub mod services;

pub use models::{
    Attachment, AttachmentSet, AttachmentSlot, CardDetails, CardType, Field, PaymentMethod, Plan,
    SignupSubmission, UploadedFile,
};
pub use services::{
    connection_total, Acknowledgment, FormEvent, LocalAcceptor, PriceSummary, SignupForm,
    SubmissionAcceptor,
};
