// Outbound HTTP client shared by the PayPal and webhook callers
use reqwest::Client;

/// Builds the pooled client used for every outbound call.
///
/// No request timeout is configured: a call waits for as long as the remote
/// side takes to answer.
pub fn build_client(service_name: &str) -> reqwest::Result<Client> {
    Client::builder()
        .user_agent(format!("{}/{}", service_name, env!("CARGO_PKG_VERSION")))
        .build()
}
