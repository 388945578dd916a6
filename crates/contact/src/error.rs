use jungdam_notification::MissingSetting;

use crate::RequiredFields;

/// Everything that can stop a submission between decoding and delivery.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("필수 항목 누락 ({required}) - 미입력: {missing}")]
    MissingFields {
        required: RequiredFields,
        missing: RequiredFields,
    },

    #[error("파일은 최대 {max}개까지 가능합니다.")]
    TooManyFiles { max: usize },

    #[error("\"{file_name}\" 파일이 {limit_mib}MB 제한을 초과했습니다.")]
    FileTooLarge { file_name: String, limit_mib: usize },

    #[error("요청 본문이 너무 큽니다.")]
    BodyTooLarge,

    #[error("업로드 오류: {0}")]
    Decode(String),

    #[error(transparent)]
    Config(#[from] MissingSetting),

    #[error("메일 전송 실패")]
    Delivery(#[source] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Bad input from the caller, as opposed to an operator or upstream fault.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Error::Config(_) | Error::Delivery(_))
    }

    /// Size overage, reported with its own status code.
    pub fn is_size_overage(&self) -> bool {
        matches!(self, Error::FileTooLarge { .. } | Error::BodyTooLarge)
    }
}
