mod contact_request;
mod inquiry_message;
mod inquiry_subject;
mod submitter_email;
mod submitter_name;

pub use contact_request::ContactRequest;
pub use inquiry_message::InquiryMessage;
pub use inquiry_subject::InquirySubject;
pub use submitter_email::SubmitterEmail;
pub use submitter_name::SubmitterName;
