use actix_web::{HttpResponse, Responder, post, web};

use crate::forms::users::RegisterUserForm;
use crate::repository::DieselRepository;
use crate::routes::{error_response, run_blocking};
use crate::services::users;

#[post("/users")]
pub async fn register_user(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<RegisterUserForm>,
) -> impl Responder {
    let repo = repo.into_inner();
    match run_blocking(move || users::register_user(repo.as_ref(), form)).await {
        Ok(registered) => HttpResponse::Ok().json(registered),
        Err(err) => error_response(err, "Failed to register user"),
    }
}
