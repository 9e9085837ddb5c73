use serde::{Deserialize, Serialize};

use crate::domain::error::NotifyError;

/// REST client for the transactional-email provider.
#[derive(Debug)]
pub struct MailerComponent {
    http_client: reqwest::Client,
    mailer_url: String,
    mailer_key: String,
    sender: String,
}

pub const SEND_EMAIL_URI: &str = "/emails";

#[derive(Debug, Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    html: &'a str,
}

#[derive(Debug, Deserialize)]
struct SendEmailResponse {
    id: String,
}

#[derive(Debug, Deserialize)]
struct MailerErrorBody {
    message: String,
}

impl MailerComponent {
    pub fn new(url: String, key: String, sender: String) -> Self {
        if url.is_empty() {
            panic!("missing mailer URL")
        }

        Self {
            http_client: reqwest::Client::new(),
            mailer_url: url,
            mailer_key: key,
            sender,
        }
    }

    /// Submits one message and returns the provider-assigned identifier.
    #[tracing::instrument(name = "Submitting email for delivery", skip(self, subject, html_content))]
    pub async fn send_email(
        &self,
        recipient: &str,
        subject: &str,
        html_content: &str,
    ) -> Result<String, NotifyError> {
        let send_url = format!("{}{}", self.mailer_url, SEND_EMAIL_URI);

        let request_body = SendEmailRequest {
            from: &self.sender,
            to: recipient,
            subject,
            html: html_content,
        };

        let response = self
            .http_client
            .post(send_url)
            .bearer_auth(&self.mailer_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|err| NotifyError::Delivery(err.to_string()))?;

        if !response.status().is_success() {
            let reason = read_mailer_failure(response).await;
            log::warn!("Couldn't submit email for delivery: {}", reason);
            return Err(NotifyError::Delivery(reason));
        }

        response
            .json::<SendEmailResponse>()
            .await
            .map(|body| body.id)
            .map_err(|err| NotifyError::Delivery(err.to_string()))
    }
}

async fn read_mailer_failure(response: reqwest::Response) -> String {
    let status = response.status();
    match response.json::<MailerErrorBody>().await {
        Ok(body) => body.message,
        Err(_) => format!("mailer responded with status {}", status),
    }
}
