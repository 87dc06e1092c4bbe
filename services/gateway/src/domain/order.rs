use contracts::Amount;
use serde::{Deserialize, Serialize};

pub const CURRENCY_USD: &str = "USD";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum CheckoutPaymentIntent {
    Capture,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Money {
    pub currency_code: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PurchaseUnit {
    pub amount: Money,
}

/// Body of `POST /v2/checkout/orders`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateOrderBody {
    pub intent: CheckoutPaymentIntent,
    pub purchase_units: Vec<PurchaseUnit>,
}

impl CreateOrderBody {
    /// A capture-intent order with a single USD purchase unit.
    pub fn capture_usd(amount: &Amount) -> Self {
        Self {
            intent: CheckoutPaymentIntent::Capture,
            purchase_units: vec![PurchaseUnit {
                amount: Money {
                    currency_code: CURRENCY_USD.to_string(),
                    value: amount.to_string(),
                },
            }],
        }
    }
}

/// Parsed remote body and status, passed through to the caller untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderResult {
    pub json_response: serde_json::Value,
    pub http_status_code: u16,
}
