use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::serialize_cents;

/// Domain representation of a placed order.
///
/// Product details are copied at placement time so later catalog edits do not
/// change what the buyer agreed to.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Unique identifier of the order.
    #[serde(rename = "_id")]
    pub id: i32,
    /// Identifier of the ordered product.
    pub product_id: i32,
    pub product_name: String,
    pub product_image: String,
    pub category: String,
    pub description: String,
    /// Minimum order quantity of the product when the order was placed.
    pub min_buy_qty: i32,
    /// Number of units ordered.
    pub quantity: i32,
    pub buyer_name: String,
    pub buyer_email: String,
    pub phone: String,
    pub address: String,
    /// Unit price times quantity, in the smallest currency unit.
    #[serde(rename = "total", serialize_with = "serialize_cents")]
    pub total_cents: i64,
    /// Timestamp for when the order was placed.
    #[serde(rename = "date")]
    pub created_at: NaiveDateTime,
}

/// Contact details of the buyer placing an order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Buyer {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl Buyer {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }
}

/// Request to place an order for a product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    pub product_id: i32,
    pub quantity: i32,
    pub buyer: Buyer,
    /// Timestamp captured when the order payload was created.
    pub created_at: NaiveDateTime,
}

impl NewOrder {
    /// Build an order request stamped with the current time.
    pub fn new(product_id: i32, quantity: i32, buyer: Buyer) -> Self {
        Self {
            product_id,
            quantity,
            buyer,
            created_at: chrono::Utc::now().naive_utc(),
        }
    }
}

/// Query definition used to list orders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderListQuery {
    /// Optional exact buyer email filter.
    pub buyer_email: Option<String>,
}

impl OrderListQuery {
    /// Construct a query that matches every order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter the results to orders placed by `buyer_email`.
    pub fn buyer_email(mut self, buyer_email: impl Into<String>) -> Self {
        self.buyer_email = Some(buyer_email.into());
        self
    }
}
