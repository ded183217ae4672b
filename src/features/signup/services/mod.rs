mod acceptance_service;
mod form_service;
mod pricing_service;
mod validation_service;

pub use acceptance_service::{Acknowledgment, LocalAcceptor, SubmissionAcceptor};
pub use form_service::{FormEvent, SignupForm};
pub use pricing_service::{
    additional_tv_monthly, additional_tv_one_time, connection_total, PriceSummary,
};
pub use validation_service::validate_submission;
