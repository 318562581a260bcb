use serde::Serialize;

use crate::domain::order::{Order, OrderListQuery};
use crate::domain::product::QuantityViolation;
use crate::forms::orders::PlaceOrderForm;
use crate::forms::parse_record_id;
use crate::repository::{OrderReader, OrderWriter, ProductReader, RepositoryError};
use crate::services::products::PRODUCT_NOT_FOUND;
use crate::services::{ServiceError, ServiceResult, TOTAL_TOO_LARGE};

pub const ORDER_NOT_FOUND: &str = "Order not found";
pub const INVALID_ORDER_ID: &str = "Invalid order id";
pub const ORDER_PLACED: &str = "Order placed successfully";
pub const ORDER_REMOVED: &str = "Order removed and stock updated";

/// Response body returned after an order is placed.
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OrderPlaced {
    pub message: String,
    pub order_id: i32,
}

/// Places an order and takes its quantity out of the product's stock.
///
/// The product is read first so callers get precise errors for the common
/// cases. The stock itself is only decremented by the repository's
/// conditional update; if that update loses a race the product is read again
/// to report why.
pub fn place_order<R>(repo: &R, form: PlaceOrderForm) -> ServiceResult<OrderPlaced>
where
    R: ProductReader + OrderWriter + ?Sized,
{
    let new_order = form
        .into_new_order()
        .map_err(|err| ServiceError::Validation(err.to_string()))?;

    let product = repo
        .get_product_by_id(new_order.product_id)
        .map_err(ServiceError::from)?
        .ok_or_else(|| ServiceError::NotFound(PRODUCT_NOT_FOUND.to_string()))?;

    product
        .check_order_quantity(new_order.quantity)
        .map_err(|violation| ServiceError::Validation(violation.to_string()))?;

    if product.total_for(new_order.quantity).is_none() {
        return Err(ServiceError::Validation(TOTAL_TOO_LARGE.to_string()));
    }

    let order = match repo.place_order(&new_order) {
        Ok(order) => order,
        Err(RepositoryError::NotFound) => {
            return Err(ServiceError::NotFound(PRODUCT_NOT_FOUND.to_string()));
        }
        Err(RepositoryError::StockConflict) => {
            return Err(explain_stock_conflict(repo, new_order.product_id, new_order.quantity));
        }
        Err(err) => return Err(ServiceError::from(err)),
    };

    log::info!(
        "Placed order {} for {} x product {} by {}",
        order.id,
        order.quantity,
        order.product_id,
        order.buyer_email
    );

    Ok(OrderPlaced {
        message: ORDER_PLACED.to_string(),
        order_id: order.id,
    })
}

fn explain_stock_conflict<R>(repo: &R, product_id: i32, quantity: i32) -> ServiceError
where
    R: ProductReader + ?Sized,
{
    match repo.get_product_by_id(product_id) {
        Ok(Some(product)) => {
            let violation = product
                .check_order_quantity(quantity)
                .err()
                .unwrap_or(QuantityViolation::NotEnoughStock);
            ServiceError::Validation(violation.to_string())
        }
        Ok(None) => ServiceError::NotFound(PRODUCT_NOT_FOUND.to_string()),
        Err(err) => ServiceError::from(err),
    }
}

/// Lists the orders placed by `buyer_email`.
pub fn list_cart<R>(repo: &R, buyer_email: &str) -> ServiceResult<Vec<Order>>
where
    R: OrderReader + ?Sized,
{
    repo.list_orders(OrderListQuery::new().buyer_email(buyer_email.trim()))
        .map_err(ServiceError::from)
}

/// Cancels an order and returns its quantity to the product's stock.
pub fn cancel_order<R>(repo: &R, raw_id: &str) -> ServiceResult<Order>
where
    R: OrderWriter + ?Sized,
{
    let order_id = parse_record_id(raw_id)
        .ok_or_else(|| ServiceError::Validation(INVALID_ORDER_ID.to_string()))?;

    match repo.cancel_order(order_id) {
        Ok(order) => {
            log::info!(
                "Cancelled order {}, returned {} units to product {}",
                order.id,
                order.quantity,
                order.product_id
            );
            Ok(order)
        }
        Err(RepositoryError::NotFound) => Err(ServiceError::NotFound(ORDER_NOT_FOUND.to_string())),
        Err(err) => Err(ServiceError::from(err)),
    }
}
