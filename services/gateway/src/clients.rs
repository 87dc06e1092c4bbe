// PayPal Orders API client
use std::sync::Arc;

use chrono::{DateTime, Utc};
use common::{time, PayPalConfig};
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::domain::{CreateOrderBody, OrderResult, PaymentApiError};

pub const PREFER_HEADER: &str = "Prefer";
pub const PREFER_MINIMAL: &str = "return=minimal";

// Refresh the token this many seconds before PayPal says it expires.
const TOKEN_EXPIRY_MARGIN_SECS: i64 = 60;

#[derive(Deserialize)]
struct AccessTokenResponse {
    access_token: String,
    expires_in: i64,
}

struct AccessToken {
    value: String,
    expires_at: DateTime<Utc>,
}

struct Inner {
    http: reqwest::Client,
    config: PayPalConfig,
    token: Mutex<Option<AccessToken>>,
}

/// Shared, cheaply clonable handle. The cached OAuth token is the only
/// mutable state and sits behind an async mutex.
#[derive(Clone)]
pub struct PayPalClient {
    inner: Arc<Inner>,
}

impl PayPalClient {
    pub fn new(http: reqwest::Client, config: PayPalConfig) -> Self {
        Self {
            inner: Arc::new(Inner {
                http,
                config,
                token: Mutex::new(None),
            }),
        }
    }

    pub async fn create_order(
        &self,
        body: &CreateOrderBody,
    ) -> Result<OrderResult, PaymentApiError> {
        let url = format!("{}/v2/checkout/orders", self.inner.config.base_url);
        self.post(&url, Some(body)).await
    }

    pub async fn capture_order(&self, order_id: &str) -> Result<OrderResult, PaymentApiError> {
        let url = format!(
            "{}/v2/checkout/orders/{}/capture",
            self.inner.config.base_url,
            urlencoding::encode(order_id)
        );
        self.post::<()>(&url, None).await
    }

    async fn post<T: Serialize>(
        &self,
        url: &str,
        body: Option<&T>,
    ) -> Result<OrderResult, PaymentApiError> {
        let token = self.access_token().await?;

        let mut request = self
            .inner
            .http
            .post(url)
            .bearer_auth(token)
            .header(PREFER_HEADER, PREFER_MINIMAL);

        match body {
            Some(body) => {
                tracing::info!(
                    "PayPal request: POST {} body={}",
                    url,
                    serde_json::to_string(body)?
                );
                request = request.json(body);
            }
            None => {
                tracing::info!("PayPal request: POST {}", url);
                request = request.header(CONTENT_TYPE, "application/json");
            }
        }

        let response = request.send().await?;
        let status = response.status();
        tracing::info!(
            "PayPal response: {} status={} headers={:?}",
            url,
            status.as_u16(),
            response.headers()
        );

        let bytes = response.bytes().await?;
        if !status.is_success() {
            return Err(PaymentApiError::from_response(status.as_u16(), &bytes));
        }

        Ok(OrderResult {
            json_response: serde_json::from_slice(&bytes)?,
            http_status_code: status.as_u16(),
        })
    }

    /// Returns a valid bearer token, fetching a new one when the cached token
    /// is missing or about to expire. Concurrent callers wait on the same fetch.
    async fn access_token(&self) -> Result<String, PaymentApiError> {
        let mut cached = self.inner.token.lock().await;

        if let Some(token) = cached.as_ref() {
            if token.expires_at > time::now() {
                return Ok(token.value.clone());
            }
        }

        let fresh = self.fetch_access_token().await?;
        let value = fresh.value.clone();
        *cached = Some(fresh);
        Ok(value)
    }

    async fn fetch_access_token(&self) -> Result<AccessToken, PaymentApiError> {
        let config = &self.inner.config;
        let url = format!("{}/v1/oauth2/token", config.base_url);

        let response = self
            .inner
            .http
            .post(&url)
            .basic_auth(&config.client_id, Some(&config.client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PaymentApiError::Authentication(format!(
                "HTTP {}: {}",
                status.as_u16(),
                body
            )));
        }

        let token = response.json::<AccessTokenResponse>().await?;
        tracing::info!(
            "Obtained PayPal access token (expires in {}s)",
            token.expires_in
        );

        Ok(AccessToken {
            value: token.access_token,
            expires_at: time::seconds_from_now(token.expires_in - TOKEN_EXPIRY_MARGIN_SECS),
        })
    }
}
