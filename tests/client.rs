use axum::{Json, Router, extract::Multipart, routing::post};
use jungdam_client::{CONFIRMATION, ClientError, ContactClient, ContactForm, FileUpload, SubmitControl};
use jungdam_contact::{Field, RequiredFields};

mod helpers;

use helpers::{RecordingMailer, app, test_config};

/// Serve the router on an ephemeral port and return the contact endpoint.
async fn spawn(router: axum::Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{addr}/api/contact")
}

fn form() -> ContactForm {
    ContactForm {
        inquiry_type: "partnership".to_owned(),
        company: " Acme ".to_owned(),
        name: "Kim".to_owned(),
        email: "a@b.com".to_owned(),
        phone: "010-1111-2222".to_owned(),
        subject: "Store entry".to_owned(),
        message: "We would like to stock your products.".to_owned(),
        attachments: vec![FileUpload::new(
            "deck.pdf",
            "application/pdf",
            b"%PDF-1.4 deck".to_vec(),
        )],
        ..ContactForm::default()
    }
}

#[tokio::test]
async fn test_client_submission_round_trip() {
    let mailer = RecordingMailer::default();
    let endpoint = spawn(app(test_config(), mailer.clone())).await;
    let client = ContactClient::new(endpoint.parse().unwrap());
    let mut form = form();
    let mut control = SubmitControl::default();

    let confirmation = client.submit(&mut form, &mut control).await.unwrap();

    assert_eq!(confirmation, CONFIRMATION);
    assert_eq!(form, ContactForm::default());
    assert!(!control.is_disabled());

    let sent = mailer.sent();
    assert_eq!(sent.len(), 1);
    assert!(sent[0].subject.starts_with("[JUNGDAM 문의] Store entry | Kim"));
    assert!(sent[0].text.contains("- 문의 유형: 입점/제휴"));
    assert!(sent[0].text.contains("- 회사/기관명: Acme\n"));
    assert_eq!(sent[0].attachments.len(), 1);
    assert_eq!(sent[0].attachments[0].file_name, "deck.pdf");
    assert_eq!(sent[0].attachments[0].content, b"%PDF-1.4 deck");
}

#[tokio::test]
async fn test_server_rejection_is_surfaced() {
    let mailer = RecordingMailer::default();
    let mut config = test_config();
    config.contact.required_fields = RequiredFields::new([Field::Name, Field::Region]);
    let endpoint = spawn(app(config, mailer.clone())).await;
    let client = ContactClient::new(endpoint.parse().unwrap());
    let mut form = form();
    let mut control = SubmitControl::default();

    let err = client.submit(&mut form, &mut control).await.unwrap_err();

    match err {
        ClientError::Rejected { status, message } => {
            assert_eq!(status, 400);
            assert!(message.contains("region"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(form.name, "Kim");
    assert!(!control.is_disabled());
    assert!(mailer.sent().is_empty());
}

/// `(name, file_name, content)` of every part, in the order received.
type ReceivedParts = Vec<(String, Option<String>, String)>;

async fn echo_parts(mut multipart: Multipart) -> Json<ReceivedParts> {
    let mut parts = Vec::new();
    while let Some(field) = multipart.next_field().await.unwrap() {
        let name = field.name().unwrap_or_default().to_owned();
        let file_name = field.file_name().map(str::to_owned);
        let bytes = field.bytes().await.unwrap();
        parts.push((name, file_name, String::from_utf8_lossy(&bytes).into_owned()));
    }
    Json(parts)
}

#[tokio::test]
async fn test_encode_sends_every_field_trimmed() {
    let endpoint = spawn(Router::new().route("/api/contact", post(echo_parts))).await;
    let mut form = form();
    form.message = "  Need 500 units\n".to_owned();

    let parts: ReceivedParts = reqwest::Client::new()
        .post(endpoint)
        .multipart(form.encode().unwrap())
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let text: Vec<(&str, &str)> = parts
        .iter()
        .filter(|(_, file_name, _)| file_name.is_none())
        .map(|(name, _, value)| (name.as_str(), value.as_str()))
        .collect();
    assert_eq!(
        text,
        [
            ("type", "partnership"),
            ("company", "Acme"),
            ("name", "Kim"),
            ("email", "a@b.com"),
            ("phone", "010-1111-2222"),
            ("region", ""),
            ("subject", "Store entry"),
            ("message", "Need 500 units"),
            ("filesLink", ""),
        ]
    );

    let files: Vec<_> = parts
        .iter()
        .filter(|(_, file_name, _)| file_name.is_some())
        .collect();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].0, "files");
    assert_eq!(files[0].1.as_deref(), Some("deck.pdf"));
    assert_eq!(files[0].2, "%PDF-1.4 deck");
}
