use crate::domain::{
    ContactRequest, InquiryMessage, InquirySubject, SubmitterEmail, SubmitterName,
};
use crate::email_client::EmailClient;
use crate::site::{OWNER_EMAIL, OWNER_LINKEDIN, OWNER_NAME, OWNER_PHONE, OWNER_TITLE};
use actix_http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};
use anyhow::Context;
use chrono::{DateTime, Utc};
use std::fmt::{Debug, Formatter};

#[derive(serde::Deserialize)]
pub struct FormData {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

impl TryFrom<FormData> for ContactRequest {
    type Error = String;

    fn try_from(value: FormData) -> Result<Self, Self::Error> {
        let name = SubmitterName::parse(value.name)?;
        let email = SubmitterEmail::parse(value.email)?;
        let subject = InquirySubject::parse(value.subject)?;
        let message = InquiryMessage::parse(value.message)?;
        Ok(ContactRequest {
            name,
            email,
            subject,
            message,
        })
    }
}

#[derive(thiserror::Error)]
pub enum ContactError {
    #[error("{0}")]
    ValidationError(String),
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl Debug for ContactError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for ContactError {
    fn status_code(&self) -> StatusCode {
        match self {
            ContactError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ContactError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        // The generic 500 body hides provider diagnostics and credentials
        // from the caller; the full error chain only reaches the logs.
        let error = match self {
            ContactError::ValidationError(reason) => reason.clone(),
            ContactError::UnexpectedError(_) => {
                "Failed to send email. Please try again later.".to_string()
            }
        };
        HttpResponse::build(self.status_code()).json(serde_json::json!({ "error": error }))
    }
}

impl From<String> for ContactError {
    fn from(s: String) -> Self {
        Self::ValidationError(s)
    }
}

#[tracing::instrument(
    name = "Relaying a contact form submission",
    skip(form, email_client),
    fields(
        submitter_email = %form.email,
        submitter_name = %form.name
    )
)]
pub async fn submit_contact(
    form: web::Json<FormData>,
    email_client: web::Data<EmailClient>,
) -> Result<HttpResponse, ContactError> {
    if form.name.is_empty()
        || form.email.is_empty()
        || form.subject.is_empty()
        || form.message.is_empty()
    {
        return Err(ContactError::ValidationError(
            "All fields are required".to_string(),
        ));
    }
    let submission: ContactRequest = form.0.try_into()?;
    let received_at = Utc::now();

    send_notification_email(&email_client, &submission, received_at)
        .await
        .context("Failed to send the notification email to the owner")?;
    send_acknowledgement_email(&email_client, &submission)
        .await
        .context("Failed to send the acknowledgement email to the submitter")?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "message": "Email sent successfully!" })))
}

#[tracing::instrument(
    name = "Sending notification email to the owner",
    skip(email_client, submission)
)]
async fn send_notification_email(
    email_client: &EmailClient,
    submission: &ContactRequest,
    received_at: DateTime<Utc>,
) -> Result<(), anyhow::Error> {
    let owner = SubmitterEmail::parse(OWNER_EMAIL.to_string())
        .map_err(|e| anyhow::anyhow!("Invalid owner mailbox: {}", e))?;
    let timestamp = received_at.format("%Y-%m-%d %H:%M:%S UTC");
    let message_id = email_client
        .send_mail(
            &owner,
            &format!("Portfolio Contact: {}", submission.subject.as_ref()),
            &format!(
                "<h2>New Contact Form Submission</h2>\
                <p><strong>Name:</strong> {name}</p>\
                <p><strong>Email:</strong> {email}</p>\
                <p><strong>Subject:</strong> {subject}</p>\
                <h3>Message</h3>\
                <p>{message}</p>\
                <hr />\
                <p>This email was sent from your portfolio contact form at {timestamp}</p>",
                name = submission.name.as_ref(),
                email = submission.email.as_ref(),
                subject = submission.subject.as_ref(),
                message = submission.message.as_ref(),
                timestamp = timestamp,
            ),
            &format!(
                "New contact form submission\n\
                Name: {name}\n\
                Email: {email}\n\
                Subject: {subject}\n\n\
                {message}\n\n\
                Received at {timestamp}",
                name = submission.name.as_ref(),
                email = submission.email.as_ref(),
                subject = submission.subject.as_ref(),
                message = submission.message.as_ref(),
                timestamp = timestamp,
            ),
        )
        .await?;
    // Logged before the acknowledgement is attempted so a partial dispatch
    // is always diagnosable from the logs.
    tracing::info!(%message_id, "Notification email delivered");
    Ok(())
}

#[tracing::instrument(
    name = "Sending acknowledgement email to the submitter",
    skip(email_client, submission)
)]
async fn send_acknowledgement_email(
    email_client: &EmailClient,
    submission: &ContactRequest,
) -> Result<(), anyhow::Error> {
    let message_id = email_client
        .send_mail(
            &submission.email,
            &format!("Thank you for contacting {}", OWNER_NAME),
            &format!(
                "<h2>Thank You for Getting in Touch!</h2>\
                <p>Hi {name},</p>\
                <p>Thank you for reaching out through my portfolio. I've received your \
                message and will get back to you as soon as possible.</p>\
                <h3>Your Message Summary</h3>\
                <p><strong>Subject:</strong> {subject}</p>\
                <p><strong>Message:</strong> {message}</p>\
                <p>I typically respond within 24-48 hours. If your inquiry is urgent, \
                you can also reach me directly at:</p>\
                <ul>\
                <li>Email: {owner_email}</li>\
                <li>Phone: {owner_phone}</li>\
                <li>LinkedIn: <a href=\"{owner_linkedin}\">{owner_name}</a></li>\
                </ul>\
                <p>Best regards,<br /><strong>{owner_name}</strong><br />{owner_title}</p>\
                <hr />\
                <p>This is an automated response. Please reply directly to {owner_email} \
                for faster communication.</p>",
                name = submission.name.as_ref(),
                subject = submission.subject.as_ref(),
                message = submission.message.as_ref(),
                owner_email = OWNER_EMAIL,
                owner_phone = OWNER_PHONE,
                owner_linkedin = OWNER_LINKEDIN,
                owner_name = OWNER_NAME,
                owner_title = OWNER_TITLE,
            ),
            &format!(
                "Hi {name},\n\n\
                Thank you for reaching out through my portfolio. I've received your \
                message and will get back to you as soon as possible.\n\n\
                Subject: {subject}\n\
                Message: {message}\n\n\
                If your inquiry is urgent you can also reach me at {owner_email} \
                or {owner_phone}.\n\n\
                Best regards,\n\
                {owner_name}",
                name = submission.name.as_ref(),
                subject = submission.subject.as_ref(),
                message = submission.message.as_ref(),
                owner_email = OWNER_EMAIL,
                owner_phone = OWNER_PHONE,
                owner_name = OWNER_NAME,
            ),
        )
        .await?;
    tracing::info!(%message_id, "Acknowledgement email delivered");
    Ok(())
}

fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}
