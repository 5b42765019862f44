mod webhook;

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

use crate::config::NotifyConfig;
use crate::core::models::RunReport;

/// Final report handed to the notification layer.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub body: String,
    pub has_errors: bool,
}

impl RunSummary {
    pub fn from_report(report: &RunReport) -> Self {
        Self {
            body: report.render(),
            has_errors: report.has_errors(),
        }
    }

    pub fn title(&self) -> &'static str {
        if self.has_errors {
            "Backup finished with errors"
        } else {
            "Backup complete"
        }
    }
}

/// Trait for notification channel implementations (webhook, etc.)
#[async_trait]
pub trait NotificationChannel: Send + Sync {
    async fn notify(&self, summary: &RunSummary) -> Result<()>;
}

/// Factory function to create a notifier based on config
pub fn create_notifier(config: &NotifyConfig) -> Option<Arc<dyn NotificationChannel>> {
    let url = config.webhook_url.as_ref()?;
    if url.is_empty() {
        return None;
    }
    Some(Arc::new(webhook::WebhookNotifier::new(url.clone())))
}
