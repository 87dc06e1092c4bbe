use serde::Deserialize;
use thiserror::Error;

/// Failures talking to the PayPal Orders API.
#[derive(Error, Debug)]
pub enum PaymentApiError {
    /// PayPal answered with a non-2xx status.
    #[error("{message}")]
    Remote {
        status: u16,
        name: Option<String>,
        message: String,
        debug_id: Option<String>,
        issues: Vec<String>,
    },

    #[error("PayPal authentication failed: {0}")]
    Authentication(String),

    #[error("PayPal request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("PayPal response is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Default, Deserialize)]
struct PayPalErrorBody {
    name: Option<String>,
    message: Option<String>,
    debug_id: Option<String>,
    #[serde(default)]
    details: Vec<PayPalErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct PayPalErrorDetail {
    issue: String,
    description: Option<String>,
}

impl PaymentApiError {
    /// Builds a `Remote` error from a non-2xx PayPal response body.
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        let parsed: PayPalErrorBody = serde_json::from_slice(body).unwrap_or_default();
        let message = parsed
            .message
            .unwrap_or_else(|| format!("Response status code was not ok: {}.", status));
        let issues = parsed
            .details
            .into_iter()
            .map(|d| match d.description {
                Some(description) => format!("{}: {}", d.issue, description),
                None => d.issue,
            })
            .collect();

        PaymentApiError::Remote {
            status,
            name: parsed.name,
            message,
            debug_id: parsed.debug_id,
            issues,
        }
    }
}

/// Failures delivering the capture notification to Pakasir.
#[derive(Error, Debug)]
pub enum WebhookError {
    #[error("Failed to send webhook to Pakasir: HTTP {status}")]
    Status { status: u16, body: String },

    #[error("Failed to send webhook to Pakasir: {0}")]
    Transport(reqwest::Error),

    #[error("Pakasir webhook response is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

// The webhook URL carries the shared secret, so it never goes into the error.
impl From<reqwest::Error> for WebhookError {
    fn from(e: reqwest::Error) -> Self {
        WebhookError::Transport(e.without_url())
    }
}
