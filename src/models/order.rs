use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::order::{NewOrder as DomainNewOrder, Order as DomainOrder};
use crate::domain::product::Product as DomainProduct;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::orders)]
pub struct Order {
    pub id: i32,
    pub product_id: i32,
    pub product_name: String,
    pub product_image: String,
    pub category: String,
    pub description: String,
    pub min_buy_qty: i32,
    pub quantity: i32,
    pub buyer_name: String,
    pub buyer_email: String,
    pub phone: String,
    pub address: String,
    pub total_cents: i64,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::orders)]
pub struct NewOrder<'a> {
    pub product_id: i32,
    pub product_name: &'a str,
    pub product_image: &'a str,
    pub category: &'a str,
    pub description: &'a str,
    pub min_buy_qty: i32,
    pub quantity: i32,
    pub buyer_name: &'a str,
    pub buyer_email: &'a str,
    pub phone: &'a str,
    pub address: &'a str,
    pub total_cents: i64,
    pub created_at: NaiveDateTime,
}

impl<'a> NewOrder<'a> {
    /// Combine the order request with the product row it draws stock from.
    ///
    /// Returns `None` when the order total overflows.
    pub fn from_parts(order: &'a DomainNewOrder, product: &'a DomainProduct) -> Option<Self> {
        let total_cents = product.total_for(order.quantity)?;
        Some(Self {
            product_id: product.id,
            product_name: product.name.as_str(),
            product_image: product.image.as_str(),
            category: product.category.as_str(),
            description: product.description.as_str(),
            min_buy_qty: product.min_qty,
            quantity: order.quantity,
            buyer_name: order.buyer.name.as_str(),
            buyer_email: order.buyer.email.as_str(),
            phone: order.buyer.phone.as_str(),
            address: order.buyer.address.as_str(),
            total_cents,
            created_at: order.created_at,
        })
    }
}

impl From<Order> for DomainOrder {
    fn from(value: Order) -> Self {
        Self {
            id: value.id,
            product_id: value.product_id,
            product_name: value.product_name,
            product_image: value.product_image,
            category: value.category,
            description: value.description,
            min_buy_qty: value.min_buy_qty,
            quantity: value.quantity,
            buyer_name: value.buyer_name,
            buyer_email: value.buyer_email,
            phone: value.phone,
            address: value.address,
            total_cents: value.total_cents,
            created_at: value.created_at,
        }
    }
}
