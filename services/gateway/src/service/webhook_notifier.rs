use common::PakasirConfig;
use contracts::WebhookPayload;

use crate::domain::WebhookError;

/// Tells Pakasir that a PayPal order was captured. One POST per call, no retry.
#[derive(Clone)]
pub struct WebhookNotifier {
    http: reqwest::Client,
    config: PakasirConfig,
}

impl WebhookNotifier {
    pub fn new(http: reqwest::Client, config: PakasirConfig) -> Self {
        Self { http, config }
    }

    pub async fn send_webhook(
        &self,
        pakasir_id: &str,
        paypal_order_id: &str,
    ) -> Result<serde_json::Value, WebhookError> {
        let payload = WebhookPayload::new(pakasir_id, paypal_order_id);

        let response = self
            .http
            .post(&self.config.webhook_url)
            .query(&[("secret", self.config.secret.as_str())])
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(
                "Failed to send webhook to Pakasir {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("")
            );
            return Err(WebhookError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        let data: serde_json::Value = serde_json::from_slice(&bytes)?;
        tracing::info!("Response from Pakasir: {}", data);

        Ok(data)
    }
}
