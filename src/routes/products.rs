use actix_web::{HttpResponse, Responder, get, post, put, web};

use crate::forms::products::{AddProductForm, EditProductForm};
use crate::repository::DieselRepository;
use crate::routes::{MessageBody, error_response, run_blocking};
use crate::services::products;

#[get("/products")]
/// List products, optionally filtered by `category` and seller `email`.
pub async fn list_products(
    params: web::Query<products::ProductsQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let repo = repo.into_inner();
    match run_blocking(move || products::list_products(repo.as_ref(), params.into_inner())).await {
        Ok(items) => HttpResponse::Ok().json(items),
        Err(err) => error_response(err, "Failed to fetch products"),
    }
}

#[post("/products")]
pub async fn add_product(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<AddProductForm>,
) -> impl Responder {
    let repo = repo.into_inner();
    match run_blocking(move || products::create_product(repo.as_ref(), form)).await {
        Ok(created) => HttpResponse::Ok().json(created),
        Err(err) => error_response(err, "Failed to add product"),
    }
}

#[get("/products/{product_id}")]
pub async fn show_product(
    path: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let repo = repo.into_inner();
    let product_id = path.into_inner();
    match run_blocking(move || products::get_product(repo.as_ref(), &product_id)).await {
        Ok(product) => HttpResponse::Ok().json(product),
        Err(err) => error_response(err, "Failed to fetch product"),
    }
}

#[put("/products/{product_id}")]
/// Apply a partial update; only fields present in the body change.
pub async fn edit_product(
    path: web::Path<String>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<EditProductForm>,
) -> impl Responder {
    let repo = repo.into_inner();
    let product_id = path.into_inner();
    match run_blocking(move || products::update_product(repo.as_ref(), &product_id, form)).await {
        Ok(_) => HttpResponse::Ok().json(MessageBody::new("Product updated successfully")),
        Err(err) => error_response(err, "Failed to update product"),
    }
}
