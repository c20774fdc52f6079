pub mod signature;

use serde::Serialize;

/// Thin client for the transactional email provider's `POST /emails` API.
///
/// Used for the support-inbox auto-reply and admin responses to inquiries.
/// Broadcast deliveries are persisted as `message_deliveries` rows instead;
/// this client is not on that path.
#[derive(Clone)]
pub struct EmailClient {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    from: String,
}

#[derive(Debug, Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    text: &'a str,
}

impl EmailClient {
    pub fn new(api_key: &str, from: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: "https://api.resend.com/emails".to_string(),
            api_key: api_key.to_string(),
            from: from.to_string(),
        }
    }

    /// Send a plain-text email. Returns the provider's error text on failure;
    /// callers decide whether that is fatal.
    pub async fn send(&self, to: &str, subject: &str, text: &str) -> Result<(), String> {
        let body = SendEmailRequest {
            from: &self.from,
            to,
            subject,
            text,
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| format!("Email request failed: {e}"))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(format!("Email provider returned HTTP {status}: {detail}"));
        }

        Ok(())
    }

    /// The auto-reply sent back to whoever writes to the support inbox.
    pub async fn send_auto_reply(&self, to: &str, original_subject: &str) -> Result<(), String> {
        let subject = format!("Re: {original_subject}");
        let text = "Thanks for reaching out! We've received your message and \
                    our team will get back to you within two business days.";
        self.send(to, &subject, text).await
    }
}
