use jungdam_contact::RequiredFields;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("파일은 최대 {max}개까지 첨부할 수 있어요.")]
    TooManyFiles { max: usize },

    #[error("\"{file_name}\" 파일이 {limit_mib}MB를 초과합니다.")]
    FileTooLarge { file_name: String, limit_mib: usize },

    #[error("\"{file_name}\" 파일 형식({mime_type})을 인식할 수 없습니다.")]
    InvalidAttachment { file_name: String, mime_type: String },

    #[error("필수 항목(*)을 모두 입력해 주세요. ({0})")]
    MissingFields(RequiredFields),

    #[error("전송 실패: {message}")]
    Rejected { status: u16, message: String },

    #[error("전송 실패: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("파일을 읽을 수 없습니다: {0}")]
    Io(#[from] std::io::Error),
}

impl ClientError {
    /// Rejected locally, before any request was made.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            ClientError::TooManyFiles { .. }
                | ClientError::FileTooLarge { .. }
                | ClientError::InvalidAttachment { .. }
                | ClientError::MissingFields(_)
                | ClientError::Io(_)
        )
    }
}
