use jungdam_contact::{Limits, RequiredFields};
use reqwest::Url;
use serde::Deserialize;

use crate::{ClientError, ContactForm, SubmitControl};

pub const CONFIRMATION: &str = "문의가 접수되었습니다.";
const FALLBACK_FAILURE: &str = "서버/설정을 확인하세요.";

/// `{ ok, message | error }` envelope returned by the relay.
#[derive(Debug, Default, Deserialize)]
struct Reply {
    #[serde(default)]
    ok: bool,
    #[serde(default, alias = "error")]
    message: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ContactClient {
    http: reqwest::Client,
    endpoint: Url,
    required: RequiredFields,
    limits: Limits,
}

impl ContactClient {
    pub fn new(endpoint: Url) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint,
            required: RequiredFields::default(),
            limits: Limits::default(),
        }
    }

    pub fn with_http(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    pub fn with_required_fields(mut self, required: RequiredFields) -> Self {
        self.required = required;
        self
    }

    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Pre-validate, post, and interpret the reply.
    ///
    /// The form is cleared only on success. `control` is busy for exactly
    /// the duration of the request.
    #[tracing::instrument(skip_all, fields(endpoint = %self.endpoint, attachments = form.attachments.len()))]
    pub async fn submit(
        &self,
        form: &mut ContactForm,
        control: &mut SubmitControl,
    ) -> Result<&'static str, ClientError> {
        form.prevalidate(&self.required, &self.limits)?;
        let body = form.encode()?;

        let _busy = control.begin();

        let response = self
            .http
            .post(self.endpoint.clone())
            .multipart(body)
            .send()
            .await
            .inspect_err(|e| tracing::warn!(error = %e, "Contact request failed"))?;

        let status = response.status();
        let reply = response.json::<Reply>().await.unwrap_or_default();

        if !status.is_success() || !reply.ok {
            let message = reply
                .message
                .filter(|message| !message.is_empty())
                .unwrap_or_else(|| FALLBACK_FAILURE.to_owned());
            tracing::warn!(status = status.as_u16(), %message, "Contact submission rejected");

            return Err(ClientError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        form.clear();
        tracing::info!("Contact submission accepted");

        Ok(CONFIRMATION)
    }
}
