use mockall::mock;

use super::{
    OrderReader, OrderWriter, ProductReader, ProductWriter, RepositoryResult, UserWriter,
};
use crate::domain::{
    order::{NewOrder, Order, OrderListQuery},
    product::{NewProduct, Product, ProductListQuery, UpdateProduct},
    user::{NewUser, User},
};

mock! {
    pub ProductReader {}

    impl ProductReader for ProductReader {
        fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;
        fn list_products(&self, query: ProductListQuery) -> RepositoryResult<Vec<Product>>;
    }
}

mock! {
    pub ProductWriter {}

    impl ProductWriter for ProductWriter {
        fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
        fn update_product(&self, product_id: i32, updates: &UpdateProduct) -> RepositoryResult<Product>;
    }
}

mock! {
    pub OrderReader {}

    impl OrderReader for OrderReader {
        fn get_order_by_id(&self, id: i32) -> RepositoryResult<Option<Order>>;
        fn list_orders(&self, query: OrderListQuery) -> RepositoryResult<Vec<Order>>;
    }
}

mock! {
    pub OrderStore {}

    impl ProductReader for OrderStore {
        fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;
        fn list_products(&self, query: ProductListQuery) -> RepositoryResult<Vec<Product>>;
    }

    impl OrderWriter for OrderStore {
        fn place_order(&self, new_order: &NewOrder) -> RepositoryResult<Order>;
        fn cancel_order(&self, order_id: i32) -> RepositoryResult<Order>;
    }
}

mock! {
    pub UserWriter {}

    impl UserWriter for UserWriter {
        fn create_user(&self, new_user: &NewUser) -> RepositoryResult<User>;
    }
}
