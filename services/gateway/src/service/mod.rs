pub mod order_service;
pub mod webhook_notifier;

pub use order_service::OrderService;
pub use webhook_notifier::WebhookNotifier;
