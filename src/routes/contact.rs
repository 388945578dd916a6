use axum::{
    Json,
    extract::{Multipart, State, multipart::MultipartRejection},
};
use jungdam_contact::{ContactSubmission, Error};
use serde_json::{Value, json};

use crate::{error::AppError, routes::AppState};

/// POST /api/contact
///
/// Decode, check configuration, validate, compose, send. Each step's failure
/// ends the request; the mail sender is called at most once.
#[tracing::instrument(skip_all)]
pub async fn action(
    State(app): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<Value>, AppError> {
    let contact = &app.config.contact;
    let multipart = multipart.map_err(crate::multipart::rejection_error)?;

    let form = crate::multipart::decode(multipart, &contact.limits).await?;
    tracing::debug!(
        fields = form.fields.len(),
        files = form.files.len(),
        "Contact form decoded"
    );

    let envelope = app.config.email.envelope().map_err(Error::from)?;

    let submission = ContactSubmission::from_parts(&form.fields, form.files);
    submission.validate(&contact.required_fields, &contact.limits)?;

    let mail = submission.into_mail(envelope, &contact.site_tag);
    let attachments = mail.attachments.len();

    app.mailer.send(mail).await.map_err(Error::Delivery)?;

    tracing::info!(attachments, "Contact submission relayed");

    Ok(Json(json!({ "ok": true })))
}

/// Any method other than POST on the contact endpoints.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed { allow: "POST" }
}
