//! Mail delivery: sends rendered reports to the HR recipient list.
//!
//! Default backend: Postmark's outbound email API over reqwest.
//! `AppState` holds an `Option<Arc<dyn Mailer>>`; `None` means mail settings are
//! missing and every delivery attempt fails with `MailError::NotConfigured`.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

const POSTMARK_API_URL: &str = "https://api.postmarkapp.com/email";
const MESSAGE_STREAM: &str = "outbound";
const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum MailError {
    #[error("mail delivery is not configured (set POSTMARK_SERVER_TOKEN, MAIL_FROM and HR_RECIPIENTS)")]
    NotConfigured,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("mail API rejected the message (status {status}, code {code}): {message}")]
    Rejected {
        status: u16,
        code: i64,
        message: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct OutgoingEmail {
    pub to: Vec<String>,
    pub subject: String,
    pub html_body: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeliveryReceipt {
    pub message_id: String,
}

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: &OutgoingEmail) -> Result<DeliveryReceipt, MailError>;
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct PostmarkRequest<'a> {
    from: &'a str,
    to: String,
    subject: &'a str,
    html_body: &'a str,
    message_stream: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct PostmarkResponse {
    #[serde(default)]
    error_code: i64,
    #[serde(default)]
    message: String,
    #[serde(rename = "MessageID", default)]
    message_id: String,
}

#[derive(Clone)]
pub struct PostmarkMailer {
    client: Client,
    server_token: String,
    from: String,
}

impl PostmarkMailer {
    pub fn new(server_token: String, from: String) -> Result<Self, MailError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            client,
            server_token,
            from,
        })
    }
}

#[async_trait]
impl Mailer for PostmarkMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<DeliveryReceipt, MailError> {
        let body = PostmarkRequest {
            from: &self.from,
            to: email.to.join(","),
            subject: &email.subject,
            html_body: &email.html_body,
            message_stream: MESSAGE_STREAM,
        };

        let response = self
            .client
            .post(POSTMARK_API_URL)
            .header("X-Postmark-Server-Token", &self.server_token)
            .header("Accept", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        let parsed = serde_json::from_str::<PostmarkResponse>(&text).ok();

        match parsed {
            Some(p) if status.is_success() && p.error_code == 0 => {
                info!(message_id = %p.message_id, recipients = email.to.len(), "Assessment email sent");
                Ok(DeliveryReceipt {
                    message_id: p.message_id,
                })
            }
            Some(p) => Err(MailError::Rejected {
                status: status.as_u16(),
                code: p.error_code,
                message: p.message,
            }),
            None => Err(MailError::Rejected {
                status: status.as_u16(),
                code: -1,
                message: text,
            }),
        }
    }
}
