use std::str::FromStr;

use strum::EnumString;

/// Inquiry category selected on the contact form.
///
/// Values outside the known set are kept verbatim so that a form revision
/// adding a category never makes the relay drop submissions.
#[derive(EnumString, Clone, Debug, PartialEq, Eq)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum InquiryType {
    Partnership,
    B2b,
    Catering,
    #[strum(serialize = "ops", serialize = "operations")]
    Ops,
    Other,
    #[strum(default)]
    Custom(String),
}

impl InquiryType {
    /// `None` for an empty (or blank) value.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.is_empty() {
            return None;
        }

        Some(Self::from_str(value).unwrap_or_else(|_| Self::Custom(value.to_owned())))
    }

    /// Label shown to the operator in the composed message.
    pub fn label(&self) -> &str {
        match self {
            Self::Partnership => "입점/제휴",
            Self::B2b => "납품(B2B)",
            Self::Catering => "케이터링/행사",
            Self::Ops => "운영 협업/기타",
            Self::Other => "기타",
            Self::Custom(value) => value,
        }
    }
}
