use jungdam_notification::{FALLBACK_CONTENT_TYPE, MailAttachment};

use crate::{Error, Field, FormFields, InquiryType, Limits, RequiredFields, Result};

pub const DEFAULT_FILE_NAME: &str = "attachment";

/// One retained file part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub field_name: String,
    pub file_name: String,
    pub content_type: String,
    pub content: Vec<u8>,
}

impl Attachment {
    /// Blank or missing names and types fall back to generic placeholders.
    pub fn new(
        field_name: impl Into<String>,
        file_name: Option<&str>,
        content_type: Option<&str>,
        content: Vec<u8>,
    ) -> Self {
        let non_blank = |value: Option<&str>| {
            value
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(str::to_owned)
        };

        Self {
            field_name: field_name.into(),
            file_name: non_blank(file_name).unwrap_or_else(|| DEFAULT_FILE_NAME.to_owned()),
            content_type: non_blank(content_type)
                .unwrap_or_else(|| FALLBACK_CONTENT_TYPE.to_owned()),
            content,
        }
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

impl From<Attachment> for MailAttachment {
    fn from(value: Attachment) -> Self {
        Self {
            file_name: value.file_name,
            content_type: value.content_type,
            content: value.content,
        }
    }
}

/// A single inquiry, alive for the duration of one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub inquiry_type: Option<InquiryType>,
    /// Raw `type` value, as sent
    pub inquiry_type_raw: String,
    pub organization: String,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    pub region: String,
    pub subject: String,
    pub message: String,
    pub external_link: String,
    pub attachments: Vec<Attachment>,
}

impl ContactSubmission {
    pub fn from_parts(fields: &FormFields, attachments: Vec<Attachment>) -> Self {
        let inquiry_type_raw = fields.get(Field::Type.name()).to_owned();

        Self {
            inquiry_type: InquiryType::parse(&inquiry_type_raw),
            inquiry_type_raw,
            organization: fields.first_of(&["org", "company"]).to_owned(),
            contact_name: fields.get(Field::Name.name()).to_owned(),
            email: fields.get(Field::Email.name()).to_owned(),
            phone: fields.get(Field::Phone.name()).to_owned(),
            region: fields.get(Field::Region.name()).to_owned(),
            subject: fields.get(Field::Subject.name()).to_owned(),
            message: fields.get(Field::Message.name()).to_owned(),
            external_link: fields.get(Field::FilesLink.name()).to_owned(),
            attachments,
        }
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Type => &self.inquiry_type_raw,
            Field::Org => &self.organization,
            Field::Name => &self.contact_name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Region => &self.region,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
            Field::FilesLink => &self.external_link,
        }
    }

    /// Server-side check of every constraint, regardless of what the client
    /// already verified.
    pub fn validate(&self, required: &RequiredFields, limits: &Limits) -> Result<()> {
        if self.attachments.len() > limits.max_files {
            return Err(Error::TooManyFiles {
                max: limits.max_files,
            });
        }

        if let Some(attachment) = self
            .attachments
            .iter()
            .find(|a| a.len() > limits.max_file_size)
        {
            return Err(Error::FileTooLarge {
                file_name: attachment.file_name.to_owned(),
                limit_mib: limits.max_file_size_mib(),
            });
        }

        let missing = required.missing(|field| self.value(field));
        if !missing.is_empty() {
            return Err(Error::MissingFields {
                required: required.clone(),
                missing,
            });
        }

        Ok(())
    }
}
