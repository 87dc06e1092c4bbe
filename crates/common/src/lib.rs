// Shared building blocks for the relay services
pub mod config;
pub mod errors;
pub mod http_client;
pub mod time;

pub use config::{AppConfig, PakasirConfig, PayPalConfig, WebhookFailureMode};
pub use errors::ConfigError;
