use crate::db::{DbConnection, DbPool};
use crate::domain::{
    order::{NewOrder, Order, OrderListQuery},
    product::{NewProduct, Product, ProductListQuery, UpdateProduct},
    user::{NewUser, User},
};

pub mod errors;
pub mod order;
pub mod product;
pub mod user;

#[cfg(test)]
pub mod mock;

pub use errors::{RepositoryError, RepositoryResult};

#[derive(Clone)]
/// Diesel-backed repository implementation that wraps an r2d2 pool.
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository using the provided connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations over product records.
pub trait ProductReader {
    fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;
    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<Vec<Product>>;
}

/// Write operations over product records.
pub trait ProductWriter {
    fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
    fn update_product(&self, product_id: i32, updates: &UpdateProduct)
    -> RepositoryResult<Product>;
}

/// Read-only operations over order records.
pub trait OrderReader {
    fn get_order_by_id(&self, id: i32) -> RepositoryResult<Option<Order>>;
    fn list_orders(&self, query: OrderListQuery) -> RepositoryResult<Vec<Order>>;
}

/// Order operations that move product stock.
///
/// Both methods commit the order row and the stock adjustment together or not
/// at all.
pub trait OrderWriter {
    /// Take `quantity` units from the product and record the order.
    ///
    /// Fails with [`RepositoryError::NotFound`] when the product does not exist
    /// and [`RepositoryError::StockConflict`] when the product no longer admits
    /// the quantity at the moment of the update.
    fn place_order(&self, new_order: &NewOrder) -> RepositoryResult<Order>;
    /// Return the order's units to its product and delete the order.
    fn cancel_order(&self, order_id: i32) -> RepositoryResult<Order>;
}

/// Read-only operations over user documents.
pub trait UserReader {
    fn get_user_by_id(&self, id: i32) -> RepositoryResult<Option<User>>;
}

/// Write operations over user documents.
pub trait UserWriter {
    fn create_user(&self, new_user: &NewUser) -> RepositoryResult<User>;
}
