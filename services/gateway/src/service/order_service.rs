use contracts::Amount;

use crate::clients::PayPalClient;
use crate::domain::{CreateOrderBody, OrderResult, PaymentApiError};

/// Stateless facade over the PayPal Orders API. Each operation is exactly one
/// remote order call; status and body come back as PayPal sent them.
#[derive(Clone)]
pub struct OrderService {
    paypal_client: PayPalClient,
}

impl OrderService {
    pub fn new(paypal_client: PayPalClient) -> Self {
        Self { paypal_client }
    }

    pub async fn create_order(&self, amount: &Amount) -> Result<OrderResult, PaymentApiError> {
        let body = CreateOrderBody::capture_usd(amount);

        let result = self.paypal_client.create_order(&body).await?;
        tracing::info!(
            "PayPal order created for {} USD (status {})",
            amount,
            result.http_status_code
        );

        Ok(result)
    }

    pub async fn capture_order(&self, order_id: &str) -> Result<OrderResult, PaymentApiError> {
        let result = self.paypal_client.capture_order(order_id).await?;
        tracing::info!(
            "PayPal order {} captured (status {})",
            order_id,
            result.http_status_code
        );

        Ok(result)
    }
}
