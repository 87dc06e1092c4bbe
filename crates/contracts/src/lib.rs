// Wire shapes shared between the relay's routes and its callers
pub mod orders;
pub mod webhook;

pub use orders::{
    Amount, CaptureRequest, ErrorResponse, OrderRequest, CAPTURED_NOT_NOTIFIED,
    CAPTURE_ORDER_FAILED, CREATE_ORDER_FAILED,
};
pub use webhook::WebhookPayload;
