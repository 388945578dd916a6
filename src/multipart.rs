//! Decoding of the untrusted `multipart/form-data` body.

use axum::{
    extract::{
        Multipart,
        multipart::{MultipartError, MultipartRejection},
    },
    http::StatusCode,
};
use jungdam_contact::{Attachment, Error, FormFields, Limits, Result};

#[derive(Debug, Default)]
pub struct DecodedForm {
    pub fields: FormFields,
    pub files: Vec<Attachment>,
}

fn decode_error(err: MultipartError) -> Error {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        Error::BodyTooLarge
    } else {
        Error::Decode(err.body_text())
    }
}

/// The request never got as far as a multipart stream: wrong or missing
/// `Content-Type`, or no boundary.
pub fn rejection_error(rejection: MultipartRejection) -> Error {
    Error::Decode(rejection.body_text())
}

/// Split the body into text fields and file parts.
///
/// Limits are enforced while reading: the part that would exceed
/// `max_file_size`, or the file after `max_files`, fails the whole request.
/// Empty file parts (an untouched file picker) are dropped.
pub async fn decode(mut multipart: Multipart, limits: &Limits) -> Result<DecodedForm> {
    let mut form = DecodedForm::default();

    while let Some(mut field) = multipart.next_field().await.map_err(decode_error)? {
        let name = field.name().unwrap_or_default().to_owned();

        let Some(file_name) = field.file_name().map(str::to_owned) else {
            let value = field.text().await.map_err(decode_error)?;
            form.fields.insert(name, &value);
            continue;
        };
        let content_type = field.content_type().map(str::to_owned);

        let mut content = Vec::new();
        while let Some(chunk) = field.chunk().await.map_err(decode_error)? {
            if content.len() + chunk.len() > limits.max_file_size {
                return Err(Error::FileTooLarge {
                    file_name,
                    limit_mib: limits.max_file_size_mib(),
                });
            }
            content.extend_from_slice(&chunk);
        }

        if content.is_empty() {
            tracing::debug!(field = %name, "Dropping empty file part");
            continue;
        }

        if form.files.len() == limits.max_files {
            return Err(Error::TooManyFiles {
                max: limits.max_files,
            });
        }

        form.files.push(Attachment::new(
            name,
            Some(&file_name),
            content_type.as_deref(),
            content,
        ));
    }

    Ok(form)
}
