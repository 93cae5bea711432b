use crate::domain::{InquiryMessage, InquirySubject, SubmitterEmail, SubmitterName};

/// A validated contact-form submission. Lives for a single request:
/// built from the form payload, consumed by the relay handler, dropped.
#[derive(Debug)]
pub struct ContactRequest {
    pub name: SubmitterName,
    pub email: SubmitterEmail,
    pub subject: InquirySubject,
    pub message: InquiryMessage,
}
