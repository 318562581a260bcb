use actix_web::error::InternalError;
use actix_web::{HttpResponse, web};
use serde::Serialize;

use crate::services::{ServiceError, ServiceResult};

pub mod main;
pub mod orders;
pub mod products;
pub mod users;

/// `{"message": ...}` body used for acknowledgements and errors.
#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Register every HTTP endpoint of the service.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(main::show_index)
        .service(products::list_products)
        .service(products::add_product)
        .service(products::show_product)
        .service(products::edit_product)
        .service(orders::place_order)
        .service(orders::show_cart)
        .service(orders::cancel_order)
        .service(users::register_user);
}

/// JSON extractor settings that answer malformed bodies with a `400` message
/// instead of the framework's plain-text default.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let response = HttpResponse::BadRequest().json(MessageBody::new(err.to_string()));
        InternalError::from_response(err, response).into()
    })
}

/// Query-string extractor settings with the same `{"message"}` error body.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        let response = HttpResponse::BadRequest().json(MessageBody::new(err.to_string()));
        InternalError::from_response(err, response).into()
    })
}

/// Run a blocking service call on the actix blocking pool.
pub(crate) async fn run_blocking<F, T>(task: F) -> ServiceResult<T>
where
    F: FnOnce() -> ServiceResult<T> + Send + 'static,
    T: Send + 'static,
{
    match web::block(task).await {
        Ok(result) => result,
        Err(err) => Err(ServiceError::Internal(err.to_string())),
    }
}

/// Translate a service failure into its HTTP response.
///
/// Internal failures are logged with `context` and answered with `context`
/// alone so storage details never reach the client.
pub(crate) fn error_response(err: ServiceError, context: &str) -> HttpResponse {
    match err {
        ServiceError::NotFound(message) => HttpResponse::NotFound().json(MessageBody::new(message)),
        ServiceError::Validation(message) => {
            HttpResponse::BadRequest().json(MessageBody::new(message))
        }
        ServiceError::Internal(detail) => {
            log::error!("{context}: {detail}");
            HttpResponse::InternalServerError().json(MessageBody::new(context))
        }
    }
}
