use async_trait::async_trait;
use lettre::{
    Message,
    message::{Attachment, Mailbox, MultiPart, SinglePart, header::ContentType},
};

/// Content type used when an attachment declares none, or one lettre cannot parse.
pub const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// Capability that delivers one composed message.
///
/// Implementations must either deliver the whole message, attachments
/// included, or fail; there is no partial delivery.
#[async_trait]
pub trait MailSender: Send + Sync {
    async fn send(&self, mail: Mail) -> anyhow::Result<()>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct MailAttachment {
    pub file_name: String,
    pub content_type: String,
    pub content: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Mail {
    pub from: String,
    pub to: String,
    pub reply_to: Option<String>,
    pub subject: String,
    pub text: String,
    pub attachments: Vec<MailAttachment>,
}

impl Mail {
    /// Build the lettre message: plain text only without attachments,
    /// `multipart/mixed` otherwise.
    pub fn to_message(&self) -> anyhow::Result<Message> {
        let mut builder = Message::builder()
            .from(self.from.parse()?)
            .to(self.to.parse()?)
            .subject(self.subject.as_str());

        if let Some(reply_to) = self.reply_to.as_deref() {
            match reply_to.parse::<Mailbox>() {
                Ok(mailbox) => builder = builder.reply_to(mailbox),
                Err(e) => tracing::warn!(error = %e, reply_to, "Skipping unparsable reply-to"),
            }
        }

        if self.attachments.is_empty() {
            return Ok(builder
                .header(ContentType::TEXT_PLAIN)
                .body(self.text.clone())?);
        }

        let mut body = MultiPart::mixed().singlepart(SinglePart::plain(self.text.clone()));
        for attachment in &self.attachments {
            let content_type = ContentType::parse(&attachment.content_type)
                .or_else(|_| ContentType::parse(FALLBACK_CONTENT_TYPE))?;
            body = body.singlepart(
                Attachment::new(attachment.file_name.clone())
                    .body(attachment.content.clone(), content_type),
            );
        }

        Ok(builder.multipart(body)?)
    }
}
