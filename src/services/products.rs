use serde::{Deserialize, Serialize};

use crate::domain::product::{Product, ProductListQuery};
use crate::forms::parse_record_id;
use crate::forms::products::{AddProductForm, EditProductForm};
use crate::repository::{ProductReader, ProductWriter, RepositoryError};
use crate::services::{ServiceError, ServiceResult};

pub const PRODUCT_NOT_FOUND: &str = "Product not found";
pub const INVALID_PRODUCT_ID: &str = "Invalid product id";

/// Query parameters accepted by the product listing.
#[derive(Debug, Default, Deserialize)]
pub struct ProductsQuery {
    /// Optional exact category filter.
    pub category: Option<String>,
    /// Optional seller email filter.
    pub email: Option<String>,
}

/// Response body returned after a product is created.
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProductCreated {
    pub product_id: i32,
}

/// Lists products matching every non-blank filter in `query`.
pub fn list_products<R>(repo: &R, query: ProductsQuery) -> ServiceResult<Vec<Product>>
where
    R: ProductReader + ?Sized,
{
    let mut list_query = ProductListQuery::new();

    if let Some(category) = non_blank(query.category) {
        list_query = list_query.category(category);
    }

    if let Some(email) = non_blank(query.email) {
        list_query = list_query.owner_email(email);
    }

    repo.list_products(list_query).map_err(ServiceError::from)
}

/// Loads a single product by its raw path identifier.
pub fn get_product<R>(repo: &R, raw_id: &str) -> ServiceResult<Product>
where
    R: ProductReader + ?Sized,
{
    let product_id = parse_product_id(raw_id)?;

    repo.get_product_by_id(product_id)
        .map_err(ServiceError::from)?
        .ok_or_else(|| ServiceError::NotFound(PRODUCT_NOT_FOUND.to_string()))
}

/// Creates a new catalog product.
pub fn create_product<R>(repo: &R, form: AddProductForm) -> ServiceResult<ProductCreated>
where
    R: ProductWriter + ?Sized,
{
    let new_product = form
        .into_new_product()
        .map_err(|err| ServiceError::Validation(err.to_string()))?;

    let created = repo
        .create_product(&new_product)
        .map_err(ServiceError::from)?;

    log::info!(
        "Created product {} `{}` with stock {}",
        created.id,
        created.name,
        created.main_quantity
    );

    Ok(ProductCreated {
        product_id: created.id,
    })
}

/// Applies a partial update to an existing product.
pub fn update_product<R>(repo: &R, raw_id: &str, form: EditProductForm) -> ServiceResult<Product>
where
    R: ProductWriter + ?Sized,
{
    let product_id = parse_product_id(raw_id)?;

    let updates = form
        .into_update_product()
        .map_err(|err| ServiceError::Validation(err.to_string()))?;

    match repo.update_product(product_id, &updates) {
        Ok(product) => Ok(product),
        Err(RepositoryError::NotFound) => {
            Err(ServiceError::NotFound(PRODUCT_NOT_FOUND.to_string()))
        }
        Err(err) => Err(ServiceError::from(err)),
    }
}

pub(crate) fn parse_product_id(raw_id: &str) -> ServiceResult<i32> {
    parse_record_id(raw_id).ok_or_else(|| ServiceError::Validation(INVALID_PRODUCT_ID.to_string()))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    use crate::repository::mock::{MockProductReader, MockProductWriter};

    fn fixed_datetime() -> NaiveDateTime {
        match NaiveDate::from_ymd_opt(2024, 1, 1) {
            Some(date) => date.and_hms_opt(0, 0, 0).unwrap_or_default(),
            None => NaiveDateTime::default(),
        }
    }

    fn sample_product(id: i32) -> Product {
        Product {
            id,
            name: "Rice".to_string(),
            brand: String::new(),
            category: "grains".to_string(),
            description: String::new(),
            image: String::new(),
            price_cents: 1000,
            rating: 0.0,
            min_qty: 5,
            main_quantity: 100,
            stock: 100,
            owner_email: "seller@example.com".to_string(),
            created_at: fixed_datetime(),
        }
    }

    #[test]
    fn list_products_passes_non_blank_filters() {
        let mut repo = MockProductReader::new();

        repo.expect_list_products()
            .times(1)
            .withf(|query| {
                query.category.as_deref() == Some("grains") && query.owner_email.is_none()
            })
            .returning(|_| Ok(vec![sample_product(1)]));

        let query = ProductsQuery {
            category: Some("grains".to_string()),
            email: Some("  ".to_string()),
        };

        let products = list_products(&repo, query).expect("expected success");
        assert_eq!(products.len(), 1);
    }

    #[test]
    fn get_product_rejects_malformed_id_without_store_access() {
        let mut repo = MockProductReader::new();
        repo.expect_get_product_by_id().times(0);

        let result = get_product(&repo, "not-an-id");

        assert!(matches!(result, Err(ServiceError::Validation(message)) if message == INVALID_PRODUCT_ID));
    }

    #[test]
    fn get_product_reports_missing_product() {
        let mut repo = MockProductReader::new();
        repo.expect_get_product_by_id()
            .times(1)
            .withf(|id| *id == 77)
            .returning(|_| Ok(None));

        let result = get_product(&repo, "77");

        assert!(matches!(result, Err(ServiceError::NotFound(message)) if message == PRODUCT_NOT_FOUND));
    }

    #[test]
    fn create_product_returns_new_identifier() {
        let mut repo = MockProductWriter::new();
        repo.expect_create_product()
            .times(1)
            .withf(|new_product| new_product.main_quantity == 100 && new_product.price_cents == 1000)
            .returning(|_| Ok(sample_product(9)));

        let form: AddProductForm = serde_json::from_value(serde_json::json!({
            "name": "Rice", "minQty": 5, "price": 10, "mainQuantity": 100
        }))
        .expect("form");

        let created = create_product(&repo, form).expect("expected success");
        assert_eq!(created, ProductCreated { product_id: 9 });
    }

    #[test]
    fn create_product_surfaces_form_errors_as_validation() {
        let mut repo = MockProductWriter::new();
        repo.expect_create_product().times(0);

        let form: AddProductForm = serde_json::from_value(serde_json::json!({
            "name": "Rice", "minQty": "five", "price": 10, "mainQuantity": 100
        }))
        .expect("form");

        let result = create_product(&repo, form);
        assert!(matches!(result, Err(ServiceError::Validation(message)) if message.contains("minQty")));
    }

    #[test]
    fn update_product_maps_missing_record() {
        let mut repo = MockProductWriter::new();
        repo.expect_update_product()
            .times(1)
            .returning(|_, _| Err(RepositoryError::NotFound));

        let form: EditProductForm =
            serde_json::from_value(serde_json::json!({ "price": 3 })).expect("form");

        let result = update_product(&repo, "5", form);
        assert!(matches!(result, Err(ServiceError::NotFound(message)) if message == PRODUCT_NOT_FOUND));
    }
}
