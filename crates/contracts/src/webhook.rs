use serde::{Deserialize, Serialize};

/// Body posted to the Pakasir webhook after a capture.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct WebhookPayload {
    /// Pakasir-side identifier of the purchase.
    pub id: String,
    /// PayPal order id that was captured.
    pub paypal_id: String,
}

impl WebhookPayload {
    pub fn new(pakasir_id: &str, paypal_order_id: &str) -> Self {
        Self {
            id: pakasir_id.to_string(),
            paypal_id: paypal_order_id.to_string(),
        }
    }
}
