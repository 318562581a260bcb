use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::product::{MAX_PRICE_CENTS, NewProduct, UpdateProduct};
use crate::forms::{NumericInput, sanitize_inline_text, sanitize_multiline_text};

/// Maximum allowed length for a product name.
const NAME_MAX_LEN: u64 = 256;

/// Maximum allowed length for short text attributes such as brand or category.
const ATTRIBUTE_MAX_LEN: u64 = 128;

/// Result type returned by the product form helpers.
pub type ProductFormResult<T> = Result<T, ProductFormError>;

/// Errors that can occur while processing product forms.
#[derive(Debug, Error, PartialEq)]
pub enum ProductFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The provided name is empty after sanitization.
    #[error("product name cannot be empty")]
    EmptyName,
    #[error("`{field}` is required")]
    MissingField { field: &'static str },
    #[error("`{field}` must be a number")]
    InvalidNumber { field: &'static str },
    #[error("`{field}` must be a whole number")]
    NotWholeNumber { field: &'static str },
    #[error("`{field}` must be at least {min}")]
    BelowMinimum { field: &'static str, min: i64 },
    #[error("`{field}` is too large")]
    TooLarge { field: &'static str },
    /// An update payload did not carry any product field.
    #[error("no product fields to update")]
    EmptyUpdate,
}

/// JSON payload accepted when listing a new product.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddProductForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: String,
    #[validate(length(max = ATTRIBUTE_MAX_LEN))]
    pub brand: Option<String>,
    #[validate(length(max = ATTRIBUTE_MAX_LEN))]
    pub category: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub min_qty: Option<NumericInput>,
    pub price: Option<NumericInput>,
    pub rating: Option<NumericInput>,
    pub main_quantity: Option<NumericInput>,
    /// Seller email; `ownerEmail` is accepted as an alias.
    #[serde(alias = "ownerEmail")]
    pub user_email: Option<String>,
}

impl AddProductForm {
    /// Validates and coerces the payload into a domain `NewProduct`.
    pub fn into_new_product(self) -> ProductFormResult<NewProduct> {
        self.validate()?;

        let name = sanitize_inline_text(&self.name);
        if name.is_empty() {
            return Err(ProductFormError::EmptyName);
        }

        let min_qty = parse_min_qty(required(self.min_qty.as_ref(), "minQty")?)?;
        let price_cents = parse_price(required(self.price.as_ref(), "price")?)?;
        let main_quantity =
            parse_main_quantity(required(self.main_quantity.as_ref(), "mainQuantity")?)?;

        let mut new_product = NewProduct::new(name, price_cents, min_qty, main_quantity);

        if let Some(rating) = self.rating.as_ref() {
            new_product = new_product.with_rating(parse_rating(rating)?);
        }
        if let Some(brand) = self.brand.as_deref() {
            new_product = new_product.with_brand(sanitize_inline_text(brand));
        }
        if let Some(category) = self.category.as_deref() {
            new_product = new_product.with_category(sanitize_inline_text(category));
        }
        if let Some(description) = self.description.as_deref() {
            new_product = new_product.with_description(sanitize_multiline_text(description));
        }
        if let Some(image) = self.image.as_deref() {
            new_product = new_product.with_image(image.trim());
        }
        if let Some(user_email) = self.user_email.as_deref() {
            new_product = new_product.with_owner_email(user_email.trim());
        }

        Ok(new_product)
    }
}

/// JSON payload accepted when editing a product; absent fields stay unchanged.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EditProductForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: Option<String>,
    #[validate(length(max = ATTRIBUTE_MAX_LEN))]
    pub brand: Option<String>,
    #[validate(length(max = ATTRIBUTE_MAX_LEN))]
    pub category: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub min_qty: Option<NumericInput>,
    pub price: Option<NumericInput>,
    pub rating: Option<NumericInput>,
    pub main_quantity: Option<NumericInput>,
    #[serde(alias = "ownerEmail")]
    pub user_email: Option<String>,
}

impl EditProductForm {
    /// Validates and coerces the payload into a domain `UpdateProduct`.
    pub fn into_update_product(self) -> ProductFormResult<UpdateProduct> {
        self.validate()?;

        let mut updates = UpdateProduct::new();

        if let Some(name) = self.name.as_deref() {
            let sanitized = sanitize_inline_text(name);
            if sanitized.is_empty() {
                return Err(ProductFormError::EmptyName);
            }
            updates = updates.name(sanitized);
        }
        if let Some(brand) = self.brand.as_deref() {
            updates = updates.brand(sanitize_inline_text(brand));
        }
        if let Some(category) = self.category.as_deref() {
            updates = updates.category(sanitize_inline_text(category));
        }
        if let Some(description) = self.description.as_deref() {
            updates = updates.description(sanitize_multiline_text(description));
        }
        if let Some(image) = self.image.as_deref() {
            updates = updates.image(image.trim());
        }
        if let Some(min_qty) = self.min_qty.as_ref() {
            updates = updates.min_qty(parse_min_qty(min_qty)?);
        }
        if let Some(price) = self.price.as_ref() {
            updates = updates.price_cents(parse_price(price)?);
        }
        if let Some(rating) = self.rating.as_ref() {
            updates = updates.rating(parse_rating(rating)?);
        }
        if let Some(main_quantity) = self.main_quantity.as_ref() {
            updates = updates.main_quantity(parse_main_quantity(main_quantity)?);
        }
        if let Some(user_email) = self.user_email.as_deref() {
            let trimmed = user_email.trim();
            if !trimmed.is_empty() {
                updates = updates.owner_email(trimmed);
            }
        }

        if updates.is_empty() {
            return Err(ProductFormError::EmptyUpdate);
        }

        Ok(updates)
    }
}

fn required<'a>(
    value: Option<&'a NumericInput>,
    field: &'static str,
) -> ProductFormResult<&'a NumericInput> {
    value.ok_or(ProductFormError::MissingField { field })
}

fn parse_whole(input: &NumericInput, field: &'static str, min: i32) -> ProductFormResult<i32> {
    if input.as_f64().is_none() {
        return Err(ProductFormError::InvalidNumber { field });
    }
    let value = input
        .as_whole()
        .ok_or(ProductFormError::NotWholeNumber { field })?;
    if value < min {
        return Err(ProductFormError::BelowMinimum {
            field,
            min: i64::from(min),
        });
    }
    Ok(value)
}

fn parse_min_qty(input: &NumericInput) -> ProductFormResult<i32> {
    parse_whole(input, "minQty", 1)
}

fn parse_main_quantity(input: &NumericInput) -> ProductFormResult<i32> {
    parse_whole(input, "mainQuantity", 0)
}

/// Convert a decimal price into the smallest currency unit.
fn parse_price(input: &NumericInput) -> ProductFormResult<i64> {
    let field = "price";
    let value = input
        .as_f64()
        .ok_or(ProductFormError::InvalidNumber { field })?;
    if value < 0.0 {
        return Err(ProductFormError::BelowMinimum { field, min: 0 });
    }
    let cents = (value * 100.0).round();
    if cents > MAX_PRICE_CENTS as f64 {
        return Err(ProductFormError::TooLarge { field });
    }
    Ok(cents as i64)
}

fn parse_rating(input: &NumericInput) -> ProductFormResult<f64> {
    input
        .as_f64()
        .ok_or(ProductFormError::InvalidNumber { field: "rating" })
}
