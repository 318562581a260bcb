use chrono::NaiveDateTime;
use serde::Serialize;
use thiserror::Error;

use crate::domain::serialize_cents;

/// Owner recorded for products created without an email.
pub const ANONYMOUS_OWNER: &str = "anonymous";

/// Largest unit price in cents for which any `i32` quantity has an `i64` total.
pub const MAX_PRICE_CENTS: i64 = i64::MAX / i32::MAX as i64;

/// Domain representation of a catalog product.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier of the product.
    #[serde(rename = "_id")]
    pub id: i32,
    /// Human-readable name of the product.
    pub name: String,
    pub brand: String,
    pub category: String,
    pub description: String,
    /// Image URL shown in the storefront.
    pub image: String,
    /// Unit price represented in the smallest currency unit.
    #[serde(rename = "price", serialize_with = "serialize_cents")]
    pub price_cents: i64,
    pub rating: f64,
    /// Smallest quantity accepted in a single order.
    pub min_qty: i32,
    /// Units currently available for new orders.
    pub main_quantity: i32,
    /// Stock recorded when the product was created.
    pub stock: i32,
    /// Email of the seller that listed the product.
    #[serde(rename = "userEmail")]
    pub owner_email: String,
    /// Timestamp for when the product record was created.
    pub created_at: NaiveDateTime,
}

/// Reasons an order quantity is refused for a product.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum QuantityViolation {
    #[error("Minimum order is {min_qty}")]
    BelowMinimum { min_qty: i32 },
    #[error("Not enough stock")]
    NotEnoughStock,
}

impl Product {
    /// Check `quantity` against the minimum order size and current stock.
    pub fn check_order_quantity(&self, quantity: i32) -> Result<(), QuantityViolation> {
        if quantity < self.min_qty {
            return Err(QuantityViolation::BelowMinimum {
                min_qty: self.min_qty,
            });
        }

        if quantity > self.main_quantity {
            return Err(QuantityViolation::NotEnoughStock);
        }

        Ok(())
    }

    /// Order total in the smallest currency unit for `quantity` units.
    ///
    /// Returns `None` when the total does not fit in an `i64`.
    pub fn total_for(&self, quantity: i32) -> Option<i64> {
        self.price_cents.checked_mul(i64::from(quantity))
    }
}

/// Payload required to insert a new product.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub brand: String,
    pub category: String,
    pub description: String,
    pub image: String,
    pub price_cents: i64,
    pub rating: f64,
    pub min_qty: i32,
    pub main_quantity: i32,
    pub owner_email: String,
    /// Timestamp captured when the product payload was created.
    pub created_at: NaiveDateTime,
}

impl NewProduct {
    /// Build a new product payload with the required fields and current timestamp.
    pub fn new(name: impl Into<String>, price_cents: i64, min_qty: i32, main_quantity: i32) -> Self {
        Self {
            name: name.into(),
            brand: String::new(),
            category: String::new(),
            description: String::new(),
            image: String::new(),
            price_cents,
            rating: 0.0,
            min_qty,
            main_quantity,
            owner_email: ANONYMOUS_OWNER.to_string(),
            created_at: chrono::Utc::now().naive_utc(),
        }
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = brand.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    /// Record the seller email; blank values keep the anonymous owner.
    pub fn with_owner_email(mut self, owner_email: impl Into<String>) -> Self {
        let owner_email = owner_email.into();
        if !owner_email.trim().is_empty() {
            self.owner_email = owner_email;
        }
        self
    }
}

/// Patch data applied when updating an existing product.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateProduct {
    pub name: Option<String>,
    pub brand: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub price_cents: Option<i64>,
    pub rating: Option<f64>,
    pub min_qty: Option<i32>,
    pub main_quantity: Option<i32>,
    pub owner_email: Option<String>,
}

impl UpdateProduct {
    /// Create a new patch object with no changes applied yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the patch would leave the record untouched.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn price_cents(mut self, price_cents: i64) -> Self {
        self.price_cents = Some(price_cents);
        self
    }

    pub fn rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn min_qty(mut self, min_qty: i32) -> Self {
        self.min_qty = Some(min_qty);
        self
    }

    /// Replace the available stock.
    pub fn main_quantity(mut self, main_quantity: i32) -> Self {
        self.main_quantity = Some(main_quantity);
        self
    }

    pub fn owner_email(mut self, owner_email: impl Into<String>) -> Self {
        self.owner_email = Some(owner_email.into());
        self
    }
}

/// Query definition used to list catalog products.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductListQuery {
    /// Optional exact category filter.
    pub category: Option<String>,
    /// Optional exact seller email filter.
    pub owner_email: Option<String>,
}

impl ProductListQuery {
    /// Construct a query that matches every product.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter the results to products in `category`.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Filter the results to products listed by `owner_email`.
    pub fn owner_email(mut self, owner_email: impl Into<String>) -> Self {
        self.owner_email = Some(owner_email.into());
        self
    }
}
