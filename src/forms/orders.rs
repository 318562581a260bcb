use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::order::{Buyer, NewOrder};
use crate::forms::{IdInput, NumericInput, sanitize_inline_text, sanitize_multiline_text};

pub type OrderFormResult<T> = Result<T, OrderFormError>;

#[derive(Debug, Error, PartialEq)]
pub enum OrderFormError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("Invalid product id")]
    InvalidProductId,
    #[error("Quantity must be a whole number")]
    InvalidQuantity,
}

/// JSON payload accepted when a buyer places an order.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderForm {
    pub product_id: IdInput,
    pub quantity: NumericInput,
    #[serde(default)]
    pub buyer_name: String,
    #[validate(email)]
    pub buyer_email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
}

impl PlaceOrderForm {
    /// Validates the payload into a domain `NewOrder`.
    ///
    /// Quantity bounds depend on the product and are checked by the order
    /// service, not here.
    pub fn into_new_order(self) -> OrderFormResult<NewOrder> {
        self.validate()?;

        let product_id = self
            .product_id
            .as_record_id()
            .ok_or(OrderFormError::InvalidProductId)?;
        let quantity = self
            .quantity
            .as_whole()
            .ok_or(OrderFormError::InvalidQuantity)?;

        let buyer = Buyer::new(self.buyer_email.trim())
            .with_name(sanitize_inline_text(&self.buyer_name))
            .with_phone(sanitize_inline_text(&self.phone))
            .with_address(sanitize_multiline_text(&self.address));

        Ok(NewOrder::new(product_id, quantity, buyer))
    }
}
