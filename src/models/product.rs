use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::product::{
    NewProduct as DomainNewProduct, Product as DomainProduct, UpdateProduct as DomainUpdateProduct,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::products)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub brand: String,
    pub category: String,
    pub description: String,
    pub image: String,
    pub price_cents: i64,
    pub rating: f64,
    pub min_qty: i32,
    pub main_quantity: i32,
    pub stock: i32,
    pub user_email: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::products)]
pub struct NewProduct<'a> {
    pub name: &'a str,
    pub brand: &'a str,
    pub category: &'a str,
    pub description: &'a str,
    pub image: &'a str,
    pub price_cents: i64,
    pub rating: f64,
    pub min_qty: i32,
    pub main_quantity: i32,
    pub stock: i32,
    pub user_email: &'a str,
    pub created_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::products)]
pub struct UpdateProduct<'a> {
    pub name: Option<&'a str>,
    pub brand: Option<&'a str>,
    pub category: Option<&'a str>,
    pub description: Option<&'a str>,
    pub image: Option<&'a str>,
    pub price_cents: Option<i64>,
    pub rating: Option<f64>,
    pub min_qty: Option<i32>,
    pub main_quantity: Option<i32>,
    pub user_email: Option<&'a str>,
}

impl From<Product> for DomainProduct {
    fn from(value: Product) -> Self {
        Self {
            id: value.id,
            name: value.name,
            brand: value.brand,
            category: value.category,
            description: value.description,
            image: value.image,
            price_cents: value.price_cents,
            rating: value.rating,
            min_qty: value.min_qty,
            main_quantity: value.main_quantity,
            stock: value.stock,
            owner_email: value.user_email,
            created_at: value.created_at,
        }
    }
}

impl<'a> From<&'a DomainNewProduct> for NewProduct<'a> {
    fn from(value: &'a DomainNewProduct) -> Self {
        Self {
            name: value.name.as_str(),
            brand: value.brand.as_str(),
            category: value.category.as_str(),
            description: value.description.as_str(),
            image: value.image.as_str(),
            price_cents: value.price_cents,
            rating: value.rating,
            min_qty: value.min_qty,
            main_quantity: value.main_quantity,
            stock: value.main_quantity,
            user_email: value.owner_email.as_str(),
            created_at: value.created_at,
        }
    }
}

impl<'a> From<&'a DomainUpdateProduct> for UpdateProduct<'a> {
    fn from(value: &'a DomainUpdateProduct) -> Self {
        Self {
            name: value.name.as_deref(),
            brand: value.brand.as_deref(),
            category: value.category.as_deref(),
            description: value.description.as_deref(),
            image: value.image.as_deref(),
            price_cents: value.price_cents,
            rating: value.rating,
            min_qty: value.min_qty,
            main_quantity: value.main_quantity,
            user_email: value.owner_email.as_deref(),
        }
    }
}
