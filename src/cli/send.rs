use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use jungdam::Config;
use jungdam_client::{ContactClient, ContactForm, FileUpload, SubmitControl};
use reqwest::Url;

#[derive(Args)]
pub struct SendArgs {
    /// Relay endpoint (defaults to the configured server)
    #[arg(long)]
    endpoint: Option<Url>,

    /// Inquiry type: partnership, b2b, catering, ops, other
    #[arg(long = "type")]
    inquiry_type: String,

    /// Company or brand name
    #[arg(long, default_value = "")]
    company: String,

    #[arg(long)]
    name: String,

    #[arg(long, default_value = "")]
    email: String,

    #[arg(long, default_value = "")]
    phone: String,

    #[arg(long, default_value = "")]
    region: String,

    #[arg(long, default_value = "")]
    subject: String,

    #[arg(long)]
    message: String,

    /// Link to files hosted elsewhere
    #[arg(long, default_value = "")]
    files_link: String,

    /// File to attach, repeatable
    #[arg(long = "file")]
    files: Vec<PathBuf>,
}

pub async fn send(config: Config, args: SendArgs) -> Result<()> {
    let endpoint = match args.endpoint {
        Some(endpoint) => endpoint,
        None => format!(
            "http://{}:{}/api/contact",
            config.server.host, config.server.port
        )
        .parse()?,
    };

    let mut attachments = Vec::with_capacity(args.files.len());
    for path in &args.files {
        attachments.push(FileUpload::from_path(path).await?);
    }

    let mut form = ContactForm {
        inquiry_type: args.inquiry_type,
        company: args.company,
        name: args.name,
        email: args.email,
        phone: args.phone,
        region: args.region,
        subject: args.subject,
        message: args.message,
        files_link: args.files_link,
        attachments,
    };

    let client = ContactClient::new(endpoint)
        .with_required_fields(config.contact.required_fields.clone())
        .with_limits(config.contact.limits);
    let mut control = SubmitControl::default();

    let confirmation = client.submit(&mut form, &mut control).await?;
    println!("{confirmation}");

    Ok(())
}
