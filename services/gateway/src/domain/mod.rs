pub mod errors;
pub mod order;

pub use errors::{PaymentApiError, WebhookError};
pub use order::{CheckoutPaymentIntent, CreateOrderBody, Money, OrderResult, PurchaseUnit};
