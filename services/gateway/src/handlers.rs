use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use common::WebhookFailureMode;
use contracts::{
    CaptureRequest, ErrorResponse, OrderRequest, CAPTURED_NOT_NOTIFIED, CAPTURE_ORDER_FAILED,
    CREATE_ORDER_FAILED,
};
use serde::Serialize;

use crate::domain::{OrderResult, PaymentApiError};
use crate::service::{OrderService, WebhookNotifier};

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    service: String,
}

#[derive(Serialize)]
struct CapturedNotNotifiedResponse {
    error: String,
    captured: bool,
    order: serde_json::Value,
}

pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
    })
}

pub async fn create_order(
    order_service: web::Data<OrderService>,
    request: web::Json<OrderRequest>,
) -> impl Responder {
    match order_service.create_order(&request.amount).await {
        Ok(result) => pass_through(result),
        Err(e) => {
            log_payment_error("Failed to create order", &e);
            HttpResponse::InternalServerError().json(ErrorResponse::new(CREATE_ORDER_FAILED))
        }
    }
}

pub async fn capture_order(
    order_service: web::Data<OrderService>,
    webhook_notifier: web::Data<WebhookNotifier>,
    failure_mode: web::Data<WebhookFailureMode>,
    order_id: web::Path<String>,
    request: web::Json<CaptureRequest>,
) -> impl Responder {
    let order_id = order_id.into_inner();

    let result = match order_service.capture_order(&order_id).await {
        Ok(result) => result,
        Err(e) => {
            log_payment_error("Failed to capture order", &e);
            return HttpResponse::InternalServerError()
                .json(ErrorResponse::new(CAPTURE_ORDER_FAILED));
        }
    };

    // The money has moved at this point; only the notification is left.
    if let Err(e) = webhook_notifier
        .send_webhook(&request.pakasir_id, &order_id)
        .await
    {
        tracing::error!(
            "Order {} captured but Pakasir was not notified (pakasir_id {}): {}",
            order_id,
            request.pakasir_id,
            e
        );

        return match failure_mode.get_ref() {
            WebhookFailureMode::Fail => HttpResponse::InternalServerError()
                .json(ErrorResponse::new(CAPTURE_ORDER_FAILED)),
            WebhookFailureMode::Report => {
                HttpResponse::BadGateway().json(CapturedNotNotifiedResponse {
                    error: CAPTURED_NOT_NOTIFIED.to_string(),
                    captured: true,
                    order: result.json_response,
                })
            }
        };
    }

    pass_through(result)
}

fn pass_through(result: OrderResult) -> HttpResponse {
    let status = StatusCode::from_u16(result.http_status_code).unwrap_or(StatusCode::OK);
    HttpResponse::build(status).json(result.json_response)
}

fn log_payment_error(context: &str, error: &PaymentApiError) {
    match error {
        PaymentApiError::Remote {
            status,
            name,
            message,
            debug_id,
            issues,
        } => tracing::error!(
            "{}: PayPal returned {} {} {} (debug_id {}) {:?}",
            context,
            status,
            name.as_deref().unwrap_or("-"),
            message,
            debug_id.as_deref().unwrap_or("-"),
            issues
        ),
        other => tracing::error!("{}: {}", context, other),
    }
}
