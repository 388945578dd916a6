use std::path::Path;

use jungdam_contact::{Field, Limits, RequiredFields};
use reqwest::multipart::{Form, Part};
use strum::VariantArray;

use crate::ClientError;

/// Multipart name of the repeatable file field.
pub const FILES_FIELD: &str = "files";

/// A file picked for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpload {
    pub name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl FileUpload {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    /// Read a file from disk, guessing its type from the extension.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self, ClientError> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let mime_type = mime_guess::from_path(path)
            .first_or_octet_stream()
            .essence_str()
            .to_owned();

        Ok(Self::new(name, mime_type, bytes))
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

/// Contact form state as the user filled it in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub inquiry_type: String,
    pub company: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub region: String,
    pub subject: String,
    pub message: String,
    pub files_link: String,
    pub attachments: Vec<FileUpload>,
}

impl ContactForm {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Type => &self.inquiry_type,
            Field::Org => &self.company,
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Region => &self.region,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
            Field::FilesLink => &self.files_link,
        }
    }

    /// Multipart name used on the wire; the form posts the organization as `company`.
    fn wire_name(field: Field) -> &'static str {
        match field {
            Field::Org => "company",
            field => field.name(),
        }
    }

    /// Local checks mirroring the relay's: attachment count, attachment
    /// size, then required fields.
    pub fn prevalidate(&self, required: &RequiredFields, limits: &Limits) -> Result<(), ClientError> {
        if self.attachments.len() > limits.max_files {
            return Err(ClientError::TooManyFiles {
                max: limits.max_files,
            });
        }

        if let Some(over) = self
            .attachments
            .iter()
            .find(|file| file.size() > limits.max_file_size)
        {
            return Err(ClientError::FileTooLarge {
                file_name: over.name.to_owned(),
                limit_mib: limits.max_file_size_mib(),
            });
        }

        let missing = required.missing(|field| self.value(field));
        if !missing.is_empty() {
            return Err(ClientError::MissingFields(missing));
        }

        Ok(())
    }

    /// Every text field is sent trimmed, empty or not; attachments follow
    /// in selection order under [`FILES_FIELD`].
    pub fn encode(&self) -> Result<Form, ClientError> {
        let mut form = Form::new();
        for field in Field::VARIANTS {
            form = form.text(
                Self::wire_name(*field),
                self.value(*field).trim().to_owned(),
            );
        }

        for file in &self.attachments {
            let part = Part::bytes(file.bytes.clone())
                .file_name(file.name.clone())
                .mime_str(&file.mime_type)
                .map_err(|_| ClientError::InvalidAttachment {
                    file_name: file.name.clone(),
                    mime_type: file.mime_type.clone(),
                })?;
            form = form.part(FILES_FIELD, part);
        }

        Ok(form)
    }

    /// Reset to a blank form, attachment selection included.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
