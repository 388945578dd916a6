use jungdam_notification::{Envelope, Mail};

use crate::ContactSubmission;

fn or_dash(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}

impl ContactSubmission {
    /// `[<site_tag> 문의] <subject> | <name> / <phone>`, falling back to the
    /// inquiry type when no subject was given.
    pub fn mail_subject(&self, site_tag: &str) -> String {
        let topic = if !self.subject.is_empty() {
            self.subject.as_str()
        } else {
            self.inquiry_type
                .as_ref()
                .map(|inquiry| inquiry.label())
                .unwrap_or("문의")
        };

        format!(
            "[{site_tag} 문의] {topic} | {} / {}",
            self.contact_name, self.phone
        )
    }

    /// Plain-text body. Region and link lines only appear when present.
    pub fn mail_body(&self) -> String {
        let inquiry = self
            .inquiry_type
            .as_ref()
            .map(|inquiry| inquiry.label())
            .unwrap_or("-");

        let mut lines = vec![
            "[문의 접수]".to_owned(),
            format!("- 문의 유형: {inquiry}"),
            format!("- 회사/기관명: {}", or_dash(&self.organization)),
        ];
        if !self.region.is_empty() {
            lines.push(format!("- 지역: {}", self.region));
        }
        lines.push(format!("- 성함: {}", or_dash(&self.contact_name)));
        lines.push(format!("- 연락처: {}", or_dash(&self.phone)));
        lines.push(format!("- 이메일: {}", or_dash(&self.email)));
        if !self.external_link.is_empty() {
            lines.push(format!("- 첨부 링크: {}", self.external_link));
        }
        lines.push(String::new());
        lines.push("[문의 내용]".to_owned());
        lines.push(or_dash(&self.message).to_owned());

        lines.join("\n")
    }

    /// Consume the submission into the outbound message. Attachments keep
    /// their order, names and declared types.
    pub fn into_mail(self, envelope: Envelope, site_tag: &str) -> Mail {
        let subject = self.mail_subject(site_tag);
        let text = self.mail_body();
        let reply_to = (!self.email.is_empty()).then(|| self.email.clone());

        Mail {
            from: envelope.from,
            to: envelope.to,
            reply_to,
            subject,
            text,
            attachments: self.attachments.into_iter().map(Into::into).collect(),
        }
    }
}
