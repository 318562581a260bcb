use actix_web::{HttpResponse, Responder, delete, get, post, web};

use crate::forms::orders::PlaceOrderForm;
use crate::repository::DieselRepository;
use crate::routes::{MessageBody, error_response, run_blocking};
use crate::services::orders;

#[post("/orders")]
pub async fn place_order(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<PlaceOrderForm>,
) -> impl Responder {
    let repo = repo.into_inner();
    match run_blocking(move || orders::place_order(repo.as_ref(), form)).await {
        Ok(placed) => HttpResponse::Ok().json(placed),
        Err(err) => error_response(err, "Failed to place order"),
    }
}

#[get("/cart/{email}")]
/// Return every order placed by the buyer with this email.
pub async fn show_cart(path: web::Path<String>, repo: web::Data<DieselRepository>) -> impl Responder {
    let repo = repo.into_inner();
    let email = path.into_inner();
    match run_blocking(move || orders::list_cart(repo.as_ref(), &email)).await {
        Ok(items) => HttpResponse::Ok().json(items),
        Err(err) => error_response(err, "Failed to fetch cart"),
    }
}

#[delete("/cart/{order_id}")]
pub async fn cancel_order(
    path: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let repo = repo.into_inner();
    let order_id = path.into_inner();
    match run_blocking(move || orders::cancel_order(repo.as_ref(), &order_id)).await {
        Ok(_) => HttpResponse::Ok().json(MessageBody::new(orders::ORDER_REMOVED)),
        Err(err) => error_response(err, "Failed to remove order"),
    }
}
