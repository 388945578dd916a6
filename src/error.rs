use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Contact(#[from] jungdam_contact::Error),

    #[error("{allow} only")]
    MethodNotAllowed { allow: &'static str },
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Contact(e) if e.is_size_overage() => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Contact(e) if e.is_client_error() => StatusCode::BAD_REQUEST,
            AppError::Contact(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            AppError::Contact(jungdam_contact::Error::Config(e)) => {
                tracing::error!(setting = e.0, "Mail delivery is not configured");
            }
            AppError::Contact(jungdam_contact::Error::Delivery(e)) => {
                tracing::error!(error = ?e, "Mail delivery failed");
            }
            AppError::Contact(e) => {
                tracing::warn!(status = status.as_u16(), "Contact submission rejected: {e}");
            }
            AppError::MethodNotAllowed { .. } => {}
        }

        let body = Json(json!({ "ok": false, "message": self.to_string() }));
        let mut response = (status, body).into_response();

        if let AppError::MethodNotAllowed { allow } = self {
            response
                .headers_mut()
                .insert(header::ALLOW, HeaderValue::from_static(allow));
        }

        response
    }
}

#[cfg(test)]
mod tests {
    use jungdam_contact::{Error, RequiredFields};
    use jungdam_notification::MissingSetting;

    use super::*;

    #[test]
    fn test_status_codes() {
        let missing = AppError::from(Error::MissingFields {
            required: RequiredFields::default(),
            missing: RequiredFields::default(),
        });
        let too_many = AppError::from(Error::TooManyFiles { max: 3 });
        let too_large = AppError::from(Error::FileTooLarge {
            file_name: "a.pdf".to_string(),
            limit_mib: 10,
        });
        let config = AppError::from(Error::Config(MissingSetting("TO_EMAIL")));
        let delivery = AppError::from(Error::Delivery(anyhow::anyhow!("connection refused")));

        assert_eq!(missing.status(), StatusCode::BAD_REQUEST);
        assert_eq!(too_many.status(), StatusCode::BAD_REQUEST);
        assert_eq!(too_large.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(config.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(delivery.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_delivery_cause_is_not_exposed() {
        let err = AppError::from(Error::Delivery(anyhow::anyhow!("535 bad credentials")));

        assert_eq!(err.to_string(), "메일 전송 실패");
    }

    #[test]
    fn test_method_not_allowed_sets_allow_header() {
        let response = AppError::MethodNotAllowed { allow: "POST" }.into_response();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.headers()[header::ALLOW], "POST");
    }
}
