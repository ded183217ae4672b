mod attachment;
mod submission;

pub use attachment::{Attachment, AttachmentSet, AttachmentSlot, UploadedFile};
pub use submission::{CardDetails, CardType, Field, PaymentMethod, Plan, SignupSubmission};
