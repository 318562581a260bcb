use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use serde_json::{Value, json};

use b2b_wholesale::routes;

mod common;

macro_rules! init_app {
    ($test_db:expr) => {
        test::init_service(
            App::new()
                .app_data(routes::json_config())
                .app_data(routes::query_config())
                .app_data(web::Data::new($test_db.repo()))
                .configure(routes::configure),
        )
        .await
    };
}

fn product_body() -> Value {
    json!({
        "name": "Basmati Rice",
        "brand": "Paddy",
        "category": "grains",
        "minQty": "5",
        "description": "Long grain",
        "price": "10",
        "rating": 4.5,
        "image": "https://img.example.com/rice.png",
        "mainQuantity": 100,
        "userEmail": "seller@example.com"
    })
}

fn order_body(product_id: &Value, quantity: i32) -> Value {
    json!({
        "productId": product_id,
        "quantity": quantity,
        "buyerName": "Buyer",
        "buyerEmail": "buyer@example.com",
        "phone": "555-0100",
        "address": "1 Market Street"
    })
}

#[actix_web::test]
async fn index_greets() {
    let test_db = common::TestDb::new("api_index_greets");
    let app = init_app!(test_db);

    let req = test::TestRequest::get().uri("/").to_request();
    let body = test::call_and_read_body(&app, req).await;

    assert_eq!(body, web::Bytes::from_static(b"Hello World!"));
}

#[actix_web::test]
async fn order_lifecycle_over_http() {
    let test_db = common::TestDb::new("api_order_lifecycle");
    let app = init_app!(test_db);

    let req = test::TestRequest::post()
        .uri("/products")
        .set_json(product_body())
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let product_id = created["productId"].clone();
    assert!(product_id.is_number());

    let req = test::TestRequest::get()
        .uri(&format!("/products/{product_id}"))
        .to_request();
    let product: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(product["_id"], product_id);
    assert_eq!(product["minQty"], 5);
    assert_eq!(product["price"].as_f64(), Some(10.0));
    assert_eq!(product["stock"], 100);
    assert_eq!(product["userEmail"], "seller@example.com");

    let req = test::TestRequest::post()
        .uri("/orders")
        .set_json(order_body(&product_id, 5))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let placed: Value = test::read_body_json(resp).await;
    assert_eq!(placed["message"], "Order placed successfully");
    let order_id = placed["orderId"].clone();

    let req = test::TestRequest::post()
        .uri("/orders")
        .set_json(order_body(&product_id, 4))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Minimum order is 5");

    let req = test::TestRequest::post()
        .uri("/orders")
        .set_json(order_body(&product_id, 200))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Not enough stock");

    let req = test::TestRequest::get()
        .uri("/cart/buyer@example.com")
        .to_request();
    let cart: Value = test::call_and_read_body_json(&app, req).await;
    let cart = cart.as_array().expect("cart is an array");
    assert_eq!(cart.len(), 1);
    assert_eq!(cart[0]["_id"], order_id);
    assert_eq!(cart[0]["total"].as_f64(), Some(50.0));
    assert_eq!(cart[0]["minBuyQty"], 5);
    assert_eq!(cart[0]["productName"], "Basmati Rice");

    let req = test::TestRequest::get()
        .uri(&format!("/products/{product_id}"))
        .to_request();
    let product: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(product["mainQuantity"], 95);

    let req = test::TestRequest::delete()
        .uri(&format!("/cart/{order_id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Order removed and stock updated");

    let req = test::TestRequest::delete()
        .uri(&format!("/cart/{order_id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get()
        .uri(&format!("/products/{product_id}"))
        .to_request();
    let product: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(product["mainQuantity"], 100);
}

#[actix_web::test]
async fn product_listing_filters_by_category_and_email() {
    let test_db = common::TestDb::new("api_product_filters");
    let app = init_app!(test_db);

    let mut oil = product_body();
    oil["name"] = json!("Sunflower Oil");
    oil["category"] = json!("oils");
    let mut anonymous = product_body();
    anonymous["name"] = json!("Salt");
    anonymous
        .as_object_mut()
        .expect("object")
        .remove("userEmail");

    for body in [product_body(), oil, anonymous] {
        let req = test::TestRequest::post()
            .uri("/products")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let req = test::TestRequest::get().uri("/products").to_request();
    let all: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(all.as_array().map(Vec::len), Some(3));

    let req = test::TestRequest::get()
        .uri("/products?category=grains")
        .to_request();
    let grains: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(grains.as_array().map(Vec::len), Some(2));

    let req = test::TestRequest::get()
        .uri("/products?category=grains&email=anonymous")
        .to_request();
    let anonymous: Value = test::call_and_read_body_json(&app, req).await;
    let anonymous = anonymous.as_array().expect("array");
    assert_eq!(anonymous.len(), 1);
    assert_eq!(anonymous[0]["name"], "Salt");
}

#[actix_web::test]
async fn product_errors_map_to_status_codes() {
    let test_db = common::TestDb::new("api_product_errors");
    let app = init_app!(test_db);

    let req = test::TestRequest::get().uri("/products/abc").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::get().uri("/products/4242").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Product not found");

    let req = test::TestRequest::put()
        .uri("/products/4242")
        .set_json(json!({ "price": 3 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let mut bad = product_body();
    bad["price"] = json!("ten");
    let req = test::TestRequest::post()
        .uri("/products")
        .set_json(bad)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/products")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["message"].is_string());
}

#[actix_web::test]
async fn product_update_applies_partial_fields() {
    let test_db = common::TestDb::new("api_product_update");
    let app = init_app!(test_db);

    let req = test::TestRequest::post()
        .uri("/products")
        .set_json(product_body())
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let product_id = created["productId"].clone();

    let req = test::TestRequest::put()
        .uri(&format!("/products/{product_id}"))
        .set_json(json!({ "mainQuantity": "250", "price": 12.5 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Product updated successfully");

    let req = test::TestRequest::put()
        .uri(&format!("/products/{product_id}"))
        .set_json(json!({ "mainQuantity": -1 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::get()
        .uri(&format!("/products/{product_id}"))
        .to_request();
    let product: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(product["mainQuantity"], 250);
    assert_eq!(product["price"].as_f64(), Some(12.5));
    assert_eq!(product["name"], "Basmati Rice");
    assert_eq!(product["stock"], 100);
}

#[actix_web::test]
async fn order_errors_map_to_status_codes() {
    let test_db = common::TestDb::new("api_order_errors");
    let app = init_app!(test_db);

    let req = test::TestRequest::post()
        .uri("/orders")
        .set_json(order_body(&json!("4242"), 5))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::post()
        .uri("/orders")
        .set_json(order_body(&json!("507f1f77bcf86cd799439011"), 5))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::delete().uri("/cart/xyz").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::delete().uri("/cart/4242").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Order not found");
}

#[actix_web::test]
async fn users_are_stored_verbatim() {
    let test_db = common::TestDb::new("api_users");
    let app = init_app!(test_db);

    let req = test::TestRequest::post()
        .uri("/users")
        .set_json(json!({ "name": "Buyer", "email": "buyer@example.com", "photo": null }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["acknowledged"], true);
    assert!(body["insertedId"].is_number());

    let req = test::TestRequest::post()
        .uri("/users")
        .set_json(json!(["not", "an", "object"]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn oversized_price_is_rejected_before_any_order() {
    let test_db = common::TestDb::new("api_oversized_price");
    let app = init_app!(test_db);

    let req = test::TestRequest::post()
        .uri("/products")
        .set_json(json!({
            "name": "Gold Bar",
            "price": "90000000000000000",
            "minQty": 1,
            "mainQuantity": 10
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "`price` is too large");

    let req = test::TestRequest::get().uri("/products").to_request();
    let all: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(all.as_array().map(Vec::len), Some(0));
}

#[actix_web::test]
async fn malformed_query_string_gets_message_body() {
    let test_db = common::TestDb::new("api_malformed_query");
    let app = init_app!(test_db);

    let req = test::TestRequest::get()
        .uri("/products?category=grains&category=oils")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["message"].is_string());
}
