use super::{NotificationChannel, RunSummary};
use anyhow::Result;
use async_trait::async_trait;
use serde_json::json;

/// Posts the run summary to a webhook as a JSON message.
pub struct WebhookNotifier {
    webhook_url: String,
    client: reqwest::Client,
}

impl WebhookNotifier {
    pub fn new(webhook_url: String) -> Self {
        Self {
            webhook_url,
            client: reqwest::Client::new(),
        }
    }

    fn format_message(&self, summary: &RunSummary) -> serde_json::Value {
        json!({
            "status": if summary.has_errors { "error" } else { "ok" },
            "text": format!("{}\n{}", summary.title(), summary.body),
        })
    }
}

#[async_trait]
impl NotificationChannel for WebhookNotifier {
    async fn notify(&self, summary: &RunSummary) -> Result<()> {
        let payload = self.format_message(summary);
        self.client
            .post(&self.webhook_url)
            .json(&payload)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
