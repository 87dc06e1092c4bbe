use std::env;
use std::fmt;
use std::str::FromStr;

use crate::errors::ConfigError;

pub const DEFAULT_PAYPAL_BASE_URL: &str = "https://api-m.paypal.com";
pub const DEFAULT_PAKASIR_WEBHOOK_URL: &str = "https://app.pakasir.com/api/webhook-paypal-2";

/// What the capture route answers when the payment was captured but the
/// webhook notification failed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WebhookFailureMode {
    /// Answer with the generic capture failure (500).
    #[default]
    Fail,
    /// Answer 502 with the capture body and `captured: true`.
    Report,
}

impl FromStr for WebhookFailureMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fail" => Ok(WebhookFailureMode::Fail),
            "report" => Ok(WebhookFailureMode::Report),
            other => Err(format!("expected `fail` or `report`, got `{}`", other)),
        }
    }
}

#[derive(Clone)]
pub struct PayPalConfig {
    pub client_id: String,
    pub client_secret: String,
    pub base_url: String,
}

impl fmt::Debug for PayPalConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PayPalConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"***")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[derive(Clone)]
pub struct PakasirConfig {
    pub webhook_url: String,
    pub secret: String,
}

impl fmt::Debug for PakasirConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PakasirConfig")
            .field("webhook_url", &self.webhook_url)
            .field("secret", &"***")
            .finish()
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub service_name: String,
    pub server_host: String,
    pub server_port: u16,
    pub log_level: String,
    pub paypal: PayPalConfig,
    pub pakasir: PakasirConfig,
    pub webhook_failure_mode: WebhookFailureMode,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let required = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        let server_port = match get("SERVER_PORT") {
            Some(port) => port.parse::<u16>().map_err(|e| ConfigError::Invalid {
                var: "SERVER_PORT",
                reason: e.to_string(),
            })?,
            None => 7200,
        };

        let webhook_failure_mode = match get("WEBHOOK_FAILURE_MODE") {
            Some(mode) => mode.parse().map_err(|reason| ConfigError::Invalid {
                var: "WEBHOOK_FAILURE_MODE",
                reason,
            })?,
            None => WebhookFailureMode::default(),
        };

        Ok(Self {
            service_name: get("SERVICE_NAME").unwrap_or_else(|| "payment-relay".to_string()),
            server_host: get("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            server_port,
            log_level: get("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
            paypal: PayPalConfig {
                client_id: required("PAYPAL_CLIENT_ID")?,
                client_secret: required("PAYPAL_CLIENT_SECRET")?,
                base_url: get("PAYPAL_BASE_URL")
                    .unwrap_or_else(|| DEFAULT_PAYPAL_BASE_URL.to_string())
                    .trim_end_matches('/')
                    .to_string(),
            },
            pakasir: PakasirConfig {
                webhook_url: get("PAKASIR_WEBHOOK_URL")
                    .unwrap_or_else(|| DEFAULT_PAKASIR_WEBHOOK_URL.to_string()),
                secret: required("PAKASIR_SECRET")?,
            },
            webhook_failure_mode,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    const REQUIRED: [(&str, &str); 3] = [
        ("PAYPAL_CLIENT_ID", "client-id"),
        ("PAYPAL_CLIENT_SECRET", "client-secret"),
        ("PAKASIR_SECRET", "pakasir-secret"),
    ];

    #[test]
    fn defaults_apply_when_only_credentials_are_set() {
        let config = AppConfig::from_lookup(lookup(&REQUIRED)).unwrap();

        assert_eq!(config.server_address(), "0.0.0.0:7200");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.paypal.base_url, DEFAULT_PAYPAL_BASE_URL);
        assert_eq!(config.pakasir.webhook_url, DEFAULT_PAKASIR_WEBHOOK_URL);
        assert_eq!(config.webhook_failure_mode, WebhookFailureMode::Fail);
    }

    #[test]
    fn missing_credentials_are_reported_by_name() {
        let err = AppConfig::from_lookup(lookup(&REQUIRED[..1])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("PAYPAL_CLIENT_SECRET"));

        let mut vars = REQUIRED.to_vec();
        vars[2] = ("PAKASIR_SECRET", "  ");
        let err = AppConfig::from_lookup(lookup(&vars)).unwrap_err();
        assert_eq!(err, ConfigError::Missing("PAKASIR_SECRET"));
    }

    #[test]
    fn overrides_are_parsed() {
        let mut vars = REQUIRED.to_vec();
        vars.extend([
            ("SERVER_PORT", "8088"),
            ("PAYPAL_BASE_URL", "https://api-m.sandbox.paypal.com/"),
            ("WEBHOOK_FAILURE_MODE", "Report"),
        ]);
        let config = AppConfig::from_lookup(lookup(&vars)).unwrap();

        assert_eq!(config.server_port, 8088);
        assert_eq!(config.paypal.base_url, "https://api-m.sandbox.paypal.com");
        assert_eq!(config.webhook_failure_mode, WebhookFailureMode::Report);
    }

    #[test]
    fn invalid_values_are_rejected() {
        let mut vars = REQUIRED.to_vec();
        vars.push(("SERVER_PORT", "seventy-two"));
        assert!(matches!(
            AppConfig::from_lookup(lookup(&vars)),
            Err(ConfigError::Invalid { var: "SERVER_PORT", .. })
        ));

        let mut vars = REQUIRED.to_vec();
        vars.push(("WEBHOOK_FAILURE_MODE", "retry"));
        assert!(matches!(
            AppConfig::from_lookup(lookup(&vars)),
            Err(ConfigError::Invalid { var: "WEBHOOK_FAILURE_MODE", .. })
        ));
    }

    #[test]
    fn debug_output_hides_secrets() {
        let config = AppConfig::from_lookup(lookup(&REQUIRED)).unwrap();
        let rendered = format!("{:?}", config);

        assert!(!rendered.contains("client-secret"));
        assert!(!rendered.contains("pakasir-secret"));
        assert!(rendered.contains("client-id"));
    }
}
