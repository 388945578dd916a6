//! Shared fixtures for the relay integration tests: a test configuration,
//! mail senders that record or fail, and a raw multipart body builder.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use http_body_util::BodyExt;
use jungdam::{
    AppState, Config,
    config::{ContactConfig, CorsConfig, LoggingConfig, ServerConfig},
};
use jungdam_notification::{EmailConfig, Mail, MailSender};
use serde_json::Value;

pub const MIB: usize = 1024 * 1024;
pub const BOUNDARY: &str = "----jungdam-test-boundary";

/// Keeps every message it is asked to deliver.
#[derive(Clone, Default)]
pub struct RecordingMailer {
    sent: Arc<Mutex<Vec<Mail>>>,
}

impl RecordingMailer {
    pub fn sent(&self) -> Vec<Mail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl MailSender for RecordingMailer {
    async fn send(&self, mail: Mail) -> anyhow::Result<()> {
        self.sent.lock().unwrap().push(mail);
        Ok(())
    }
}

/// Fails every delivery, counting attempts.
#[derive(Clone, Default)]
pub struct FailingMailer {
    attempts: Arc<Mutex<usize>>,
}

impl FailingMailer {
    pub fn attempts(&self) -> usize {
        *self.attempts.lock().unwrap()
    }
}

#[async_trait]
impl MailSender for FailingMailer {
    async fn send(&self, _mail: Mail) -> anyhow::Result<()> {
        *self.attempts.lock().unwrap() += 1;
        anyhow::bail!("535 5.7.8 Username and Password not accepted")
    }
}

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 5000,
        },
        email: EmailConfig {
            smtp_username: "site@example.com".to_string(),
            smtp_password: "app-password".to_string(),
            contact_address: "inbox@example.com".to_string(),
            ..EmailConfig::default()
        },
        contact: ContactConfig::default(),
        cors: CorsConfig::default(),
        logging: LoggingConfig::default(),
    }
}

pub fn app(config: Config, mailer: impl MailSender + 'static) -> Router {
    jungdam::router(AppState {
        config,
        mailer: Arc::new(mailer),
    })
}

/// Hand-built `multipart/form-data` body.
#[derive(Default)]
pub struct MultipartBody {
    bytes: Vec<u8>,
}

impl MultipartBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.bytes.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
        self
    }

    pub fn file(mut self, name: &str, file_name: &str, content_type: Option<&str>, content: &[u8]) -> Self {
        self.bytes.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\n"
            )
            .as_bytes(),
        );
        if let Some(content_type) = content_type {
            self.bytes
                .extend_from_slice(format!("Content-Type: {content_type}\r\n").as_bytes());
        }
        self.bytes.extend_from_slice(b"\r\n");
        self.bytes.extend_from_slice(content);
        self.bytes.extend_from_slice(b"\r\n");
        self
    }

    /// The submission from the worked example: a B2B bulk order from Kim.
    pub fn bulk_order() -> Self {
        Self::new()
            .text("type", "b2b")
            .text("company", "Acme")
            .text("name", "Kim")
            .text("email", "a@b.com")
            .text("phone", "010-1111-2222")
            .text("region", "")
            .text("subject", "Bulk order")
            .text("message", "Need 500 units")
            .text("filesLink", "")
    }

    pub fn into_request(self, uri: &str) -> Request<Body> {
        let mut bytes = self.bytes;
        bytes.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

        Request::builder()
            .method("POST")
            .uri(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(bytes))
            .unwrap()
    }
}

pub async fn json_body(response: Response<Body>) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

/// Deterministic, non-uniform content so truncation or reordering shows up.
pub fn payload(len: usize, seed: u8) -> Vec<u8> {
    (0..len).map(|i| (i as u8).wrapping_mul(31).wrapping_add(seed)).collect()
}
