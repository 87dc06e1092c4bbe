use actix_web::{error::InternalError, web, HttpResponse};
use contracts::{ErrorResponse, CAPTURE_ORDER_FAILED, CREATE_ORDER_FAILED};

use crate::handlers;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(handlers::health_check))
        .service(
            web::scope("/api/orders")
                .service(
                    web::resource("")
                        .app_data(json_config(CREATE_ORDER_FAILED))
                        .route(web::post().to(handlers::create_order)),
                )
                .service(
                    web::resource("/{order_id}/capture")
                        .app_data(json_config(CAPTURE_ORDER_FAILED))
                        .route(web::post().to(handlers::capture_order)),
                ),
        );
}

/// Unreadable bodies get the route's generic 500 instead of actix's 400.
fn json_config(failure: &'static str) -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(move |err, _req| {
            tracing::error!("{} Invalid request body: {}", failure, err);
            let response = HttpResponse::InternalServerError().json(ErrorResponse::new(failure));
            InternalError::from_response(err, response).into()
        })
}
