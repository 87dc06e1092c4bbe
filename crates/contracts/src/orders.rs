use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Number;

pub const CREATE_ORDER_FAILED: &str = "Failed to create order.";
pub const CAPTURE_ORDER_FAILED: &str = "Failed to capture order.";
pub const CAPTURED_NOT_NOTIFIED: &str = "Order captured but webhook notification failed.";

/// Order amount in major currency units, as sent by the storefront.
///
/// Clients send either a JSON number or a string. Nothing is validated
/// locally; the payment API is the one that rejects bad amounts.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Amount {
    Number(Number),
    Text(String),
}

impl fmt::Display for Amount {
    /// Renders the amount the way the storefront renders numbers:
    /// `19.99` stays `19.99`, `20.0` becomes `20`, `1e21` becomes `1e+21`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Amount::Text(text) => f.write_str(text),
            Amount::Number(n) => f.write_str(&js_number(n.as_f64().unwrap_or_default())),
        }
    }
}

/// ECMAScript `Number::toString` for finite values, built on the shortest
/// round-trip digits that `{:e}` produces.
fn js_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    let sci = format!("{:e}", value.abs());
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let k = digits.len() as i32;
    let n = exponent.parse::<i32>().unwrap_or(0) + 1;

    let body = if k <= n && n <= 21 {
        format!("{}{}", digits, "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int, frac) = digits.split_at(n as usize);
        format!("{}.{}", int, frac)
    } else if -6 < n && n <= 0 {
        format!("0.{}{}", "0".repeat((-n) as usize), digits)
    } else {
        let e = n - 1;
        let sign = if e >= 0 { '+' } else { '-' };
        let (lead, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{}e{}{}", lead, sign, e.abs())
        } else {
            format!("{}.{}e{}{}", lead, rest, sign, e.abs())
        }
    };

    if value < 0.0 {
        format!("-{}", body)
    } else {
        body
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Number::from_f64(value)
            .map(Amount::Number)
            .unwrap_or_else(|| Amount::Text(value.to_string()))
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct OrderRequest {
    pub amount: Amount,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CaptureRequest {
    pub pakasir_id: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: &str) -> Self {
        Self {
            error: message.to_string(),
        }
    }
}
