use actix_web::{web, App, HttpServer};
use common::config::AppConfig;
use common::http_client;
use common::WebhookFailureMode;
use tracing_subscriber::EnvFilter;

use payment_relay::clients::PayPalClient;
use payment_relay::routes;
use payment_relay::service::{OrderService, WebhookNotifier};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;

    let filter =
        EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // One pooled client for PayPal and Pakasir, built once and shared
    let http = http_client::build_client(&config.service_name)?;

    let paypal_client = PayPalClient::new(http.clone(), config.paypal.clone());
    let order_service = OrderService::new(paypal_client);
    let webhook_notifier = WebhookNotifier::new(http, config.pakasir.clone());
    let failure_mode = config.webhook_failure_mode;

    let server_address = config.server_address();
    tracing::info!("💳 Payment relay starting on http://{}", server_address);
    tracing::info!("PayPal API: {}", config.paypal.base_url);
    if failure_mode == WebhookFailureMode::Fail {
        tracing::warn!(
            "WEBHOOK_FAILURE_MODE=fail: captures whose webhook fails are reported as failed"
        );
    }

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(order_service.clone()))
            .app_data(web::Data::new(webhook_notifier.clone()))
            .app_data(web::Data::new(failure_mode))
            .configure(routes::configure)
    })
    .bind(&server_address)?
    .run()
    .await?;

    Ok(())
}
